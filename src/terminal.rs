use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::dom;

const COMMAND_ECHO: &str = "> command executed";

pub(crate) fn init(document: &Document) {
    for widget in dom::query_all(document, ".terminal-widget") {
        let doc = document.clone();
        let widget_el = widget.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            // a widget without a body is inert
            let Ok(Some(body)) = widget_el.query_selector(".terminal-body") else {
                return;
            };
            let Ok(line) = doc.create_element("div") else {
                return;
            };
            line.set_class_name("terminal-line");
            line.set_text_content(Some(COMMAND_ECHO));
            let _ = body.append_child(&line);
            body.set_scroll_top(body.scroll_height());
        }) as Box<dyn FnMut(_)>);
        let _ = widget.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
