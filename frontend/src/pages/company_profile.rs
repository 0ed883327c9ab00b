use std::rc::Rc;

use log::info;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    fade_header::FadeHeader,
    footer::Footer,
    hero::HeroBanner,
    menu_modal::MenuModal,
    service_card::{service_card_views, ServiceCard},
    team_card::{team_card_views, TeamCard},
};
use crate::content::CompanyProfile;
use crate::hooks::use_scroll_offset;
use crate::menu::{MenuAction, MenuState};

#[derive(Properties, PartialEq)]
pub struct CompanyProfilePageProps {
    pub content: Rc<CompanyProfile>,
}

#[function_component(CompanyProfilePage)]
pub fn company_profile_page(props: &CompanyProfilePageProps) -> Html {
    let content = &props.content;
    let scroll_offset = use_scroll_offset();
    let (_, page_height) = use_window_size();
    let rail_offset = use_state_eq(|| 0.0_f64);
    let menu = use_reducer(MenuState::default);

    // Escape stands in for the hardware back button
    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.dispatch(MenuAction::Close);
            }
        });
    }

    let open_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Open);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    let on_rail_scroll = {
        let rail_offset = rail_offset.clone();
        Callback::from(move |e: Event| {
            if let Some(rail) = e.target_dyn_into::<Element>() {
                rail_offset.set(rail.scroll_left() as f64);
            }
        })
    };

    let on_contact = Callback::from(|_: MouseEvent| {
        info!("Contact button pressed");
    });

    let emphasis_driver = content.emphasis_source.driver(scroll_offset, *rail_offset);

    html! {
        <div class="company-profile">
            <FadeHeader title={content.brand.clone()} scroll_offset={scroll_offset} />

            <HeroBanner
                image={content.hero_image.clone()}
                title={content.hero_title.clone()}
                subtitle={content.hero_subtitle.clone()}
                scroll_offset={scroll_offset}
                page_height={page_height}
            />

            <section class="profile-section">
                <h2 class="section-title">{"Our Services"}</h2>
                <div class="card-rail services-rail" onscroll={on_rail_scroll}>
                    {
                        service_card_views(&content.services, emphasis_driver).into_iter().map(|view| html! {
                            <ServiceCard key={view.key} service={view.service} emphasis={view.emphasis} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="about-section">
                <h2 class="section-title">{"About Us"}</h2>
                <p class="about-text">{&content.about_text}</p>
            </section>

            <section class="profile-section">
                <h2 class="section-title">{"Meet Our Team"}</h2>
                <div class="card-rail team-rail">
                    {
                        team_card_views(&content.team).into_iter().map(|view| html! {
                            <TeamCard key={view.key} member={view.member} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="contact-section">
                <h2 class="contact-title">{&content.contact_title}</h2>
                <button class="contact-button" onclick={on_contact}>{&content.contact_button}</button>
            </section>

            <Footer
                brand={content.brand.clone()}
                tagline={content.tagline.clone()}
                contact={content.contact.clone()}
                socials={content.socials.clone()}
                copyright={content.copyright.clone()}
            />

            <button class="menu-button" onclick={open_menu}>{"≡"}</button>

            <MenuModal
                open={menu.is_open()}
                items={content.menu_items.clone()}
                on_close={close_menu}
            />

            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                }

                .company-profile {
                    min-height: 100vh;
                    background-color: #fff;
                }

                .menu-button {
                    position: fixed;
                    top: 10px;
                    right: 20px;
                    z-index: 1001;
                    background-color: rgba(0, 0, 0, 0.3);
                    border: none;
                    border-radius: 20px;
                    width: 40px;
                    height: 40px;
                    color: #fff;
                    font-size: 24px;
                    cursor: pointer;
                }

                .profile-section {
                    padding: 40px 0 40px 20px;
                }

                .section-title {
                    font-size: 24px;
                    font-weight: bold;
                    color: #333;
                    margin: 0 0 20px;
                }

                .card-rail {
                    display: flex;
                    overflow-x: auto;
                    padding-right: 20px;
                    scrollbar-width: none;
                    -webkit-overflow-scrolling: touch;
                }

                .card-rail::-webkit-scrollbar {
                    display: none;
                }

                .service-card {
                    flex: 0 0 70vw;
                    background-color: #433878;
                    border-radius: 10px;
                    padding: 20px;
                    margin-right: 15px;
                    box-sizing: border-box;
                    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.25);
                }

                .service-card-icon {
                    font-size: 40px;
                    display: block;
                    margin-bottom: 10px;
                }

                .service-card-title {
                    color: #fff;
                    font-size: 18px;
                    font-weight: bold;
                    margin: 0 0 5px;
                }

                .service-card-description {
                    color: #fff;
                    font-size: 14px;
                    margin: 0;
                }

                .about-section {
                    padding: 40px 20px;
                    background-color: #f0f0f0;
                }

                .about-text {
                    font-size: 16px;
                    line-height: 24px;
                    color: #333;
                    margin: 0;
                }

                .team-card {
                    flex: 0 0 180px;
                    height: 240px;
                    margin-right: 15px;
                    border-radius: 10px;
                    overflow: hidden;
                    background-color: #fff;
                    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.25);
                }

                .team-card-image {
                    width: 100%;
                    height: 70%;
                    object-fit: cover;
                    display: block;
                }

                .team-card-info {
                    padding: 10px;
                }

                .team-card-name {
                    font-size: 16px;
                    font-weight: bold;
                    color: #333;
                    margin: 0;
                }

                .team-card-role {
                    font-size: 14px;
                    color: #666;
                    margin: 0;
                }

                .contact-section {
                    background-color: #433878;
                    padding: 40px 20px;
                    text-align: center;
                }

                .contact-title {
                    color: #fff;
                    font-size: 24px;
                    font-weight: bold;
                    margin: 0 0 20px;
                }

                .contact-button {
                    background-color: #fff;
                    color: #433878;
                    font-size: 18px;
                    font-weight: bold;
                    padding: 15px 30px;
                    border: none;
                    border-radius: 25px;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
