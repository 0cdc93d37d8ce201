use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

pub(crate) const ALL_CATEGORIES: &str = "all";
const ACTIVE_CLASS: &str = "active";
const HIDE_SETTLE_MS: u32 = 300;
const SHOW_SETTLE_MS: u32 = 50;

pub(crate) fn split_by_filter(
    filter: &str,
    categories: &[Option<String>],
) -> (Vec<usize>, Vec<usize>) {
    let mut to_show = Vec::new();
    let mut to_hide = Vec::new();
    for (index, category) in categories.iter().enumerate() {
        if filter == ALL_CATEGORIES || category.as_deref() == Some(filter) {
            to_show.push(index);
        } else {
            to_hide.push(index);
        }
    }
    (to_show, to_hide)
}

pub(crate) fn init(document: &Document) {
    let buttons = dom::query_all(document, ".filter-btn");
    let items = dom::query_all(document, ".portfolio-item");
    if buttons.is_empty() || items.is_empty() {
        return;
    }
    let Ok(Some(container)) = document.query_selector(".portfolio-filters") else {
        return;
    };

    // one delegated listener on the filter bar handles every button
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(clicked) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        if !clicked.matches(".filter-btn").unwrap_or(false) {
            return;
        }
        let Some(filter) = clicked.get_attribute("data-filter") else {
            return;
        };

        for button in &buttons {
            let _ = button.class_list().remove_1(ACTIVE_CLASS);
        }
        let _ = clicked.class_list().add_1(ACTIVE_CLASS);

        let categories: Vec<Option<String>> = items
            .iter()
            .map(|item| item.get_attribute("data-category"))
            .collect();
        let (to_show, to_hide) = split_by_filter(&filter, &categories);
        for index in to_hide {
            fade_out(&items[index]);
        }
        for index in to_show {
            fade_in(&items[index]);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

// opacity first so the CSS transition runs, display once it has settled
fn fade_out(item: &Element) {
    let Some(item) = item.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = item.style().set_property("opacity", "0");
    let item = item.clone();
    Timeout::new(HIDE_SETTLE_MS, move || {
        let _ = item.style().set_property("display", "none");
    })
    .forget();
}

fn fade_in(item: &Element) {
    let Some(item) = item.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = item.style().set_property("display", "block");
    let item = item.clone();
    Timeout::new(SHOW_SETTLE_MS, move || {
        let _ = item.style().set_property("opacity", "1");
    })
    .forget();
}
