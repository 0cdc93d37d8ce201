use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::dom;

const MESSAGE: &str = "ready to handle your next project";
const TYPE_TICK_MS: u32 = 150;
const DELETE_TICK_MS: u32 = 75;
const HOLD_MS: u32 = 2000;
const START_DELAY_MS: u32 = 1000;

pub(crate) struct Typewriter {
    text: &'static str,
    len: usize,
    index: usize,
    deleting: bool,
}

pub(crate) struct Frame {
    pub rendered: String,
    pub delay_ms: u32,
}

impl Typewriter {
    pub(crate) fn new(text: &'static str) -> Self {
        Self {
            text,
            len: text.chars().count(),
            index: 0,
            deleting: false,
        }
    }

    pub(crate) fn tick(&mut self) -> Frame {
        if self.deleting {
            self.index -= 1;
        } else {
            self.index += 1;
        }
        let rendered: String = self.text.chars().take(self.index).collect();
        let mut delay_ms = if self.deleting {
            DELETE_TICK_MS
        } else {
            TYPE_TICK_MS
        };
        if !self.deleting && self.index == self.len {
            delay_ms = HOLD_MS;
            self.deleting = true;
        } else if self.deleting && self.index == 0 {
            self.deleting = false;
        }
        Frame { rendered, delay_ms }
    }
}

pub(crate) fn init(document: &Document) {
    let Some(target) = document.get_element_by_id("terminal-text") else {
        return;
    };

    let cancelled = Rc::new(Cell::new(false));
    let unload_flag = Rc::clone(&cancelled);
    let on_unload = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        unload_flag.set(true);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = dom::window() {
        let _ = window
            .add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());
    }
    on_unload.forget();

    let mut machine = Typewriter::new(MESSAGE);
    spawn_local(async move {
        TimeoutFuture::new(START_DELAY_MS).await;
        loop {
            if cancelled.get() {
                break;
            }
            let frame = machine.tick();
            target.set_text_content(Some(&frame.rendered));
            TimeoutFuture::new(frame.delay_ms).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_growing_then_shrinking_prefixes() {
        let mut machine = Typewriter::new("hi");
        assert_eq!(machine.tick().rendered, "h");
        assert_eq!(machine.tick().rendered, "hi");
        assert_eq!(machine.tick().rendered, "h");
        assert_eq!(machine.tick().rendered, "");
        assert_eq!(machine.tick().rendered, "h");
    }

    #[test]
    fn holds_once_at_full_length_before_deleting() {
        let mut machine = Typewriter::new("abc");
        let delays: Vec<u32> = (0..7).map(|_| machine.tick().delay_ms).collect();
        assert_eq!(
            delays,
            vec![
                TYPE_TICK_MS,
                TYPE_TICK_MS,
                HOLD_MS,
                DELETE_TICK_MS,
                DELETE_TICK_MS,
                DELETE_TICK_MS,
                TYPE_TICK_MS,
            ]
        );
    }

    #[test]
    fn cycle_is_periodic_and_index_stays_bounded() {
        let text = "ready to handle your next project";
        let len = text.chars().count();
        let mut machine = Typewriter::new(text);
        for _ in 0..3 {
            for _ in 0..(2 * len) {
                let frame = machine.tick();
                assert!(machine.index <= len);
                assert_eq!(frame.rendered, text.chars().take(machine.index).collect::<String>());
            }
            assert_eq!(machine.index, 0);
            assert!(!machine.deleting);
        }
    }
}
