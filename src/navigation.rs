use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use crate::timing;

const ACTIVE_CLASS: &str = "active";
const RESIZE_SETTLE_MS: u32 = 250;
const SCROLL_THROTTLE_MS: u32 = 500;

pub(crate) fn current_page_file(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or("")
}

pub(crate) fn is_active_link(href: &str, current_file: &str) -> bool {
    href == current_file || (current_file.is_empty() && href == "index.html")
}

pub(crate) fn init(document: &Document) {
    apply_active_link(document);
    install_resize_refresh();
    install_anchor_scrolling(document);
}

pub(crate) fn apply_active_link(document: &Document) {
    let Some(pathname) = dom::window().and_then(|window| window.location().pathname().ok()) else {
        return;
    };
    let current = current_page_file(&pathname);
    for link in dom::query_all(document, ".nav-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        let classes = link.class_list();
        if is_active_link(&href, current) {
            let _ = classes.add_1(ACTIVE_CLASS);
        } else {
            let _ = classes.remove_1(ACTIVE_CLASS);
        }
    }
}

fn install_resize_refresh() {
    let Some(window) = dom::window() else {
        return;
    };
    let mut refresh = timing::debounce(RESIZE_SETTLE_MS, |_event: web_sys::Event| {
        if let Some(document) = dom::document() {
            apply_active_link(&document);
        }
    });
    let closure =
        Closure::wrap(Box::new(move |event: web_sys::Event| refresh(event)) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn install_anchor_scrolling(document: &Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let link = anchor.clone();
        let mut scroll = timing::throttle(SCROLL_THROTTLE_MS, move |event: web_sys::Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            scroll_to_top_of(&target);
        });
        let closure =
            Closure::wrap(Box::new(move |event: web_sys::Event| scroll(event)) as Box<dyn FnMut(_)>);
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn scroll_to_top_of(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_the_current_page_link_is_active() {
        let links = ["index.html", "about.html", "contact.html"];
        let current = current_page_file("/about.html");
        let active: Vec<&str> = links
            .iter()
            .copied()
            .filter(|href| is_active_link(href, current))
            .collect();
        assert_eq!(active, vec!["about.html"]);
    }

    #[test]
    fn empty_path_falls_back_to_index() {
        let current = current_page_file("/");
        assert_eq!(current, "");
        assert!(is_active_link("index.html", current));
        assert!(!is_active_link("about.html", current));
    }

    #[test]
    fn matching_is_exact_not_prefix() {
        assert!(!is_active_link("about.html", "about.htm"));
        assert!(!is_active_link("about", "about.html"));
        assert!(!is_active_link("index.html", "blog/index.html"));
    }

    #[test]
    fn nested_paths_keep_only_the_final_segment() {
        assert_eq!(current_page_file("/sub/dir/contact.html"), "contact.html");
    }
}
