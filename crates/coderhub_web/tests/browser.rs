#![cfg(target_arch = "wasm32")]

use coderhub_core::{
    ContactForm, FieldName, Notification, NotificationView, PageElement, Severity, TextSink,
};
use coderhub_web::dom::{DomContactForm, DomElement, INVALID_CLASS};
use coderhub_web::notification_view::DomNotificationView;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("browser document")
}

fn div() -> HtmlElement {
    document()
        .create_element("div")
        .expect("create div")
        .unchecked_into()
}

#[wasm_bindgen_test]
fn dom_element_reads_and_writes_text_and_classes() {
    let element = DomElement::new(div());
    element.set_text("150+");
    assert_eq!(element.text(), "150+");

    element.add_class("active");
    assert!(element.has_class("active"));
    element.remove_class("active");
    assert!(!element.has_class("active"));

    element.set_style("display", "none");
    assert_eq!(
        element
            .element()
            .style()
            .get_property_value("display")
            .expect("read style"),
        "none"
    );
}

#[wasm_bindgen_test]
fn contact_form_reads_fields_and_toggles_invalid_class() {
    let document = document();
    let form: HtmlFormElement = document
        .create_element("form")
        .expect("create form")
        .unchecked_into();
    for field in FieldName::ALL {
        let input: HtmlInputElement = document
            .create_element("input")
            .expect("create input")
            .unchecked_into();
        input.set_id(field.element_id());
        if field == FieldName::Consent {
            input.set_type("checkbox");
            input.set_checked(true);
        } else {
            input.set_value(" value ");
        }
        form.append_child(&input).expect("append input");
    }
    document
        .body()
        .expect("body")
        .append_child(&form)
        .expect("append form");

    let bound = DomContactForm::bind(&document, form.clone()).expect("bind form");
    let fields = bound.read_fields();
    assert_eq!(fields.name, " value ");
    assert!(fields.consent);

    bound.set_invalid(FieldName::Email, true);
    let email = document.get_element_by_id("email").expect("email input");
    assert!(email.class_list().contains(INVALID_CLASS));
    bound.set_invalid(FieldName::Email, false);
    assert!(!email.class_list().contains(INVALID_CLASS));

    form.remove();
}

#[wasm_bindgen_test]
fn notification_view_mounts_text_and_detaches() {
    let view = DomNotificationView::new(document());
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let notification = Notification {
        id: 7,
        message: "<b>hola</b>".to_string(),
        severity: Severity::Error,
        created_at_ms: 0.0,
    };

    view.mount(&notification, Rc::new(move || counter.set(counter.get() + 1)));
    let root = document()
        .query_selector(".notification.notification-error")
        .expect("query")
        .expect("mounted notification");
    let span = root.query_selector("span").expect("query").expect("span");
    assert_eq!(span.text_content().as_deref(), Some("<b>hola</b>"));

    let close: HtmlElement = root
        .query_selector(".notification-close")
        .expect("query")
        .expect("close button")
        .unchecked_into();
    close.click();
    assert_eq!(clicks.get(), 1);

    view.detach(7);
    assert!(document()
        .query_selector(".notification")
        .expect("query")
        .is_none());
}
