use yew::prelude::*;

use crate::content::{ContactDetails, SocialLink};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: String,
    pub tagline: String,
    pub contact: ContactDetails,
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let contact = &props.contact;

    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-section">
                    <h3 class="footer-title">{&props.brand}</h3>
                    <p class="footer-text">{&props.tagline}</p>
                </div>
                <div class="footer-section">
                    <h4 class="footer-subtitle">{"Contact Us"}</h4>
                    <p class="footer-text"><i class="fa fa-phone"></i>{" "}{&contact.phone}</p>
                    <p class="footer-text"><i class="fa fa-envelope"></i>{" "}{&contact.email}</p>
                    <p class="footer-text"><i class="fa fa-map-marker"></i>{" "}{&contact.address}</p>
                </div>
            </div>
            <div class="footer-socials">
                {
                    props.socials.iter().enumerate().map(|(index, social)| html! {
                        <button key={index} class="footer-social-button" title={social.name.clone()}>
                            <i class={classes!("fa", format!("fa-{}", social.icon))}></i>
                        </button>
                    }).collect::<Html>()
                }
            </div>
            <p class="footer-copyright">{&props.copyright}</p>
            <style>
                {r#"
                .footer {
                    background-color: #1E201E;
                    padding: 40px 20px;
                }

                .footer-content {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 20px;
                    margin-bottom: 20px;
                }

                .footer-section {
                    flex: 1;
                    min-width: 200px;
                }

                .footer-title {
                    color: #ECF0F1;
                    font-size: 20px;
                    font-weight: bold;
                    margin: 0 0 10px;
                }

                .footer-subtitle {
                    color: #ECF0F1;
                    font-size: 16px;
                    font-weight: bold;
                    margin: 0 0 10px;
                }

                .footer-text {
                    color: #BDC3C7;
                    font-size: 14px;
                    margin: 0 0 5px;
                }

                .footer-socials {
                    display: flex;
                    justify-content: center;
                    gap: 15px;
                    margin-bottom: 20px;
                }

                .footer-social-button {
                    background-color: #433878;
                    color: #ECF0F1;
                    width: 40px;
                    height: 40px;
                    border: none;
                    border-radius: 20px;
                    font-size: 20px;
                    cursor: pointer;
                }

                .footer-copyright {
                    color: #7F8C8D;
                    font-size: 12px;
                    text-align: center;
                    margin: 0;
                }
                "#}
            </style>
        </footer>
    }
}
