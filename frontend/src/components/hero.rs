use yew::prelude::*;

use crate::animation::{hero_parallax, translate_y_style};
use crate::assets::AssetRef;
use crate::components::asset_image::AssetImage;

/// Share of the window height taken by the hero banner.
const HERO_HEIGHT_RATIO: f64 = 0.6;

#[derive(Properties, PartialEq)]
pub struct HeroBannerProps {
    pub image: AssetRef,
    pub title: String,
    pub subtitle: String,
    pub scroll_offset: f64,
    pub page_height: f64,
}

#[function_component(HeroBanner)]
pub fn hero_banner(props: &HeroBannerProps) -> Html {
    let drift = translate_y_style(hero_parallax(props.scroll_offset, props.page_height));
    let height = if props.page_height > 0.0 {
        format!("height: {}px;", props.page_height * HERO_HEIGHT_RATIO)
    } else {
        "height: 60vh;".to_string()
    };

    html! {
        <section class="hero-banner" style={height}>
            <AssetImage src={props.image.clone()} alt="Hero banner" class={classes!("hero-banner-image")} />
            <div class="hero-banner-overlay">
                <h1 class="hero-banner-title" style={drift.clone()}>{&props.title}</h1>
                <p class="hero-banner-subtitle" style={drift}>{&props.subtitle}</p>
            </div>
            <style>
                {r#"
                .hero-banner {
                    position: relative;
                    overflow: hidden;
                }

                .hero-banner-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                .hero-banner-overlay {
                    position: absolute;
                    inset: 0;
                    background-color: rgba(0, 0, 0, 0.5);
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    padding: 20px;
                }

                .hero-banner-title {
                    color: #fff;
                    font-size: 32px;
                    font-weight: bold;
                    text-align: center;
                    margin: 0 0 10px;
                }

                .hero-banner-subtitle {
                    color: #fff;
                    font-size: 18px;
                    text-align: center;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
