use std::rc::Rc;

use yew::prelude::*;
use log::info;

mod config;
mod animation;
mod assets;
mod content;
mod hooks;
mod menu;
mod components {
    pub mod asset_image;
    pub mod fade_header;
    pub mod footer;
    pub mod hero;
    pub mod menu_modal;
    pub mod service_card;
    pub mod team_card;
}
mod pages {
    pub mod company_profile;
}

use content::CompanyProfile;
use pages::company_profile::CompanyProfilePage;


#[function_component]
fn App() -> Html {
    let content = use_memo(|_| CompanyProfile::load(), ());

    html! {
        <CompanyProfilePage content={Rc::clone(&content)} />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
