use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MenuModalProps {
    pub open: bool,
    pub items: Vec<String>,
    pub on_close: Callback<()>,
}

/// Full screen menu overlay. Always mounted; visibility is a CSS fade so the
/// show/hide transition comes from the browser.
#[function_component(MenuModal)]
pub fn menu_modal(props: &MenuModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div
            class={classes!("menu-modal", props.open.then(|| "visible"))}
            aria-hidden={(!props.open).to_string()}
        >
            <button class="menu-close-button" onclick={close}>{"✕"}</button>
            <nav class="menu-items">
                {
                    props.items.iter().enumerate().map(|(index, item)| html! {
                        <button key={index} class="menu-item-button">{item}</button>
                    }).collect::<Html>()
                }
            </nav>
            <style>
                {r#"
                .menu-modal {
                    position: fixed;
                    inset: 0;
                    background-color: rgba(67, 56, 120, 0.95);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 1002;
                    opacity: 0;
                    visibility: hidden;
                    pointer-events: none;
                    transition: opacity 0.3s ease, visibility 0.3s ease;
                }

                .menu-modal.visible {
                    opacity: 1;
                    visibility: visible;
                    pointer-events: auto;
                }

                .menu-close-button {
                    position: absolute;
                    top: 40px;
                    right: 20px;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 30px;
                    cursor: pointer;
                }

                .menu-items {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .menu-item-button {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 24px;
                    padding: 15px;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
