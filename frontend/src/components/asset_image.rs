use log::warn;
use yew::prelude::*;

use crate::assets::{AssetRef, PLACEHOLDER_IMAGE};

#[derive(Properties, PartialEq)]
pub struct AssetImageProps {
    pub src: AssetRef,
    #[prop_or_default]
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` that swaps to a neutral placeholder when the asset can't be loaded.
#[function_component(AssetImage)]
pub fn asset_image(props: &AssetImageProps) -> Html {
    let failed = use_state(|| false);

    {
        let failed = failed.clone();
        use_effect_with_deps(move |_| {
            failed.set(false);
            || ()
        }, props.src.clone());
    }

    let onerror = {
        let failed = failed.clone();
        let path = props.src.path().to_string();
        Callback::from(move |_: Event| {
            if !*failed {
                warn!("Asset {:?} failed to load, showing placeholder", path);
                failed.set(true);
            }
        })
    };

    let src = if *failed {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        props.src.url()
    };

    html! {
        <img
            src={src}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading="lazy"
            onerror={onerror}
        />
    }
}
