mod contact;
mod dom;
mod navigation;
mod portfolio;
mod reveal;
mod supabase;
mod terminal;
mod timing;
mod tooltips;
mod typewriter;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::Document;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    boot();
}

fn boot() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(document) = dom::document() {
                init_features(&document);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        init_features(&document);
    }
}

fn init_features(document: &Document) {
    typewriter::init(document);
    navigation::init(document);
    portfolio::init(document);
    terminal::init(document);
    tooltips::init(document);
    if reveal::supported() {
        reveal::init(document);
    } else {
        tracing::debug!("scroll reveal skipped: IntersectionObserver unavailable");
    }
    contact::init(document);
    tracing::debug!("interactive features initialized");
}
