use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

const REVEAL_SELECTOR: &str = ".service-card, .testimonial-card, .portfolio-item, .hero-card";
const REVEAL_CLASS: &str = "fade-in-up";
const VISIBILITY_THRESHOLD: f64 = 0.1;
const BOTTOM_MARGIN: &str = "0px 0px -50px 0px";

pub(crate) fn supported() -> bool {
    let Some(window) = dom::window() else {
        return false;
    };
    js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

pub(crate) fn init(document: &Document) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(REVEAL_CLASS);
                // reveal is one-shot
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_root_margin(BOTTOM_MARGIN);
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    for element in dom::query_all(document, REVEAL_SELECTOR) {
        observer.observe(&element);
    }
    callback.forget();
}
