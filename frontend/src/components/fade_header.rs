use yew::prelude::*;

use crate::animation::header_opacity;

#[derive(Properties, PartialEq)]
pub struct FadeHeaderProps {
    pub title: String,
    pub scroll_offset: f64,
}

#[function_component(FadeHeader)]
pub fn fade_header(props: &FadeHeaderProps) -> Html {
    let opacity = header_opacity(props.scroll_offset);

    html! {
        <header class="fade-header" style={format!("opacity: {};", opacity)}>
            <span class="fade-header-title">{&props.title}</span>
            <style>
                {r#"
                .fade-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 60px;
                    background-color: rgba(67, 56, 120, 0.9);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 1000;
                    pointer-events: none;
                }

                .fade-header-title {
                    color: #fff;
                    font-size: 20px;
                    font-weight: bold;
                }
                "#}
            </style>
        </header>
    }
}
