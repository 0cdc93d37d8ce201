use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlFormElement, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::supabase;

const SENDING_LABEL: &str = "SENDING...";
const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
const ERROR_MESSAGE: &str = "An error occurred while sending your message. Please try again.";
const FEEDBACK_CLEAR_MS: u32 = 5000;

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub(crate) fn feedback_html(message: &str, success: bool) -> String {
    let status = if success { "success" } else { "error" };
    format!("<div class=\"form-response {status}\">{message}</div>")
}

fn from_form(data: &FormData) -> ContactMessage {
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactMessage {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    }
}

pub(crate) fn init(document: &Document) {
    let Some(form) = document.get_element_by_id("contactForm") else {
        return;
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return;
    };
    let Some(feedback) = document.get_element_by_id("formFeedback") else {
        return;
    };

    let form_handle = form.clone();
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        let Ok(Some(button)) = form.query_selector(".submit-btn") else {
            return;
        };
        let original_label = button.inner_html();
        button.set_inner_html(SENDING_LABEL);
        set_disabled(&button, true);

        let Ok(data) = FormData::new_with_form(&form) else {
            button.set_inner_html(&original_label);
            set_disabled(&button, false);
            return;
        };
        let record = from_form(&data);

        let form = form.clone();
        let feedback = feedback.clone();
        spawn_local(async move {
            match supabase::insert_into(supabase::CONTACT_TABLE, &record).await {
                Ok(()) => {
                    show_feedback(&feedback, SUCCESS_MESSAGE, true);
                    form.reset();
                }
                Err(err) => {
                    tracing::error!("contact form submission failed: {err}");
                    show_feedback(&feedback, ERROR_MESSAGE, false);
                }
            }
            button.set_inner_html(&original_label);
            set_disabled(&button, false);
        });
    }) as Box<dyn FnMut(_)>);
    let _ =
        form_handle.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn show_feedback(feedback: &Element, message: &str, success: bool) {
    feedback.set_inner_html(&feedback_html(message, success));
    if success {
        let feedback = feedback.clone();
        Timeout::new(FEEDBACK_CLEAR_MS, move || feedback.set_inner_html("")).forget();
    }
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    feedback.scroll_into_view_with_scroll_into_view_options(&options);
}

fn set_disabled(button: &Element, disabled: bool) {
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn feedback_block_carries_the_outcome_class() {
        assert_eq!(
            feedback_html("done", true),
            r#"<div class="form-response success">done</div>"#,
        );
        assert_eq!(
            feedback_html("retry", false),
            r#"<div class="form-response error">retry</div>"#,
        );
    }

    #[test]
    fn record_serializes_to_the_table_row_shape() {
        let record = ContactMessage {
            name: "X".to_string(),
            email: "x@y.com".to_string(),
            message: "hi".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "X", "email": "x@y.com", "message": "hi"}),
        );
    }
}
