//! DOM-backed implementations of the element, form and viewport ports.

use crate::error::{BindError, BindResult};
use coderhub_core::{ContactForm, FieldName, FieldSet, PageElement, TextSink, Viewport};
use log::warn;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, Window,
};

/// Class toggled on contact form fields that failed validation.
pub const INVALID_CLASS: &str = "is-invalid";

/// Any page element, seen through the core element and text ports.
#[derive(Debug, Clone)]
pub struct DomElement {
    element: HtmlElement,
}

impl DomElement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Wraps `element` when it is an HTML element.
    pub fn from_element(element: Element) -> Option<Self> {
        element.dyn_into::<HtmlElement>().ok().map(Self::new)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl PageElement for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().add_1(class) {
            warn!("event=dom_class module=web status=error op=add class={class} err={err:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().remove_1(class) {
            warn!("event=dom_class module=web status=error op=remove class={class} err={err:?}");
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(property, value) {
            warn!("event=dom_style module=web status=error property={property} err={err:?}");
        }
    }
}

impl TextSink for DomElement {
    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// The `#contactForm` element and its five field inputs.
pub struct DomContactForm {
    form: HtmlFormElement,
    fields: Vec<(FieldName, Element)>,
}

impl DomContactForm {
    /// Binds the form and every field by element id.
    ///
    /// # Errors
    /// - `MissingElement` when a field input is absent.
    pub fn bind(document: &Document, form: HtmlFormElement) -> BindResult<Self> {
        let fields = FieldName::ALL
            .iter()
            .map(|field| {
                document
                    .get_element_by_id(field.element_id())
                    .map(|element| (*field, element))
                    .ok_or_else(|| BindError::MissingElement(field.element_id().to_string()))
            })
            .collect::<BindResult<Vec<_>>>()?;
        Ok(Self { form, fields })
    }

    fn element(&self, field: FieldName) -> Option<&Element> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, element)| element)
    }

    fn read_value(&self, field: FieldName) -> String {
        self.element(field)
            .and_then(|element| js_sys::Reflect::get(element, &JsValue::from_str("value")).ok())
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }

    fn read_checked(&self, field: FieldName) -> bool {
        self.element(field)
            .and_then(|element| js_sys::Reflect::get(element, &JsValue::from_str("checked")).ok())
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }
}

impl ContactForm for DomContactForm {
    fn read_fields(&self) -> FieldSet {
        FieldSet {
            name: self.read_value(FieldName::Name),
            email: self.read_value(FieldName::Email),
            subject: self.read_value(FieldName::Subject),
            message: self.read_value(FieldName::Message),
            consent: self.read_checked(FieldName::Consent),
        }
    }

    fn set_invalid(&self, field: FieldName, invalid: bool) {
        let Some(element) = self.element(field) else {
            return;
        };
        let classes = element.class_list();
        let result = if invalid {
            classes.add_1(INVALID_CLASS)
        } else {
            classes.remove_1(INVALID_CLASS)
        };
        if let Err(err) = result {
            warn!(
                "event=field_flag module=web status=error field={} err={err:?}",
                field.as_str()
            );
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Window scrolling and section lookup.
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn offset_top(&self, element_id: &str) -> Option<f64> {
        let element = self
            .document
            .get_element_by_id(element_id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
