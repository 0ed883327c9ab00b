use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Vertical scroll offset of the page, updated on every window scroll event.
/// Negative values are kept so overscroll bounce still drives the parallax.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let offset = use_state_eq(window_scroll_y);

    {
        let offset = offset.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = Closure::wrap(Box::new(move || {
                    offset.set(window_scroll_y());
                }) as Box<dyn FnMut()>);

                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("Could not attach scroll listener");
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    *offset
}
