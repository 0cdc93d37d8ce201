use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::dom;
use crate::timing;

const HOVER_SETTLE_MS: u32 = 300;
pub(crate) const DESKTOP_BREAKPOINT_PX: f64 = 1200.0;

pub(crate) fn is_desktop_viewport(width_px: f64) -> bool {
    width_px > DESKTOP_BREAKPOINT_PX
}

pub(crate) fn init(document: &Document) {
    for link in dom::query_all(document, ".nav-link") {
        let Ok(Some(label)) = link.query_selector(".nav-label") else {
            continue;
        };
        let target = link.clone();
        let mut apply = timing::debounce(HOVER_SETTLE_MS, move |_event: web_sys::Event| {
            let Some(width) = dom::window()
                .and_then(|window| window.inner_width().ok())
                .and_then(|value| value.as_f64())
            else {
                return;
            };
            if !is_desktop_viewport(width) {
                return;
            }
            let text = label.text_content().unwrap_or_default();
            let _ = target.set_attribute("title", &text);
        });
        let closure =
            Closure::wrap(Box::new(move |event: web_sys::Event| apply(event)) as Box<dyn FnMut(_)>);
        let _ =
            link.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltips_only_apply_above_the_desktop_breakpoint() {
        assert!(!is_desktop_viewport(1199.0));
        assert!(!is_desktop_viewport(DESKTOP_BREAKPOINT_PX));
        assert!(is_desktop_viewport(1201.0));
    }
}
