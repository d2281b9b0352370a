//! Fixed top-right notification box rendered into `document.body`.

use coderhub_core::{CloseAction, Notification, NotificationId, NotificationView};
use log::warn;
use std::cell::RefCell;
use std::collections::BTreeMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlElement};

const ENTER_ANIMATION: &str = "slideInRight 0.3s ease-out";
const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease-out";

struct Mounted {
    element: HtmlElement,
    _on_close: Closure<dyn FnMut()>,
}

pub struct DomNotificationView {
    document: Document,
    mounted: RefCell<BTreeMap<NotificationId, Mounted>>,
}

impl DomNotificationView {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            mounted: RefCell::new(BTreeMap::new()),
        }
    }

    fn build(&self, notification: &Notification, on_close: CloseAction) -> Result<Mounted, JsValue> {
        let severity = notification.severity;
        let root: HtmlElement = self.document.create_element("div")?.unchecked_into();
        root.set_class_name(&format!("notification notification-{}", severity.as_str()));
        let style = root.style();
        for (property, value) in [
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("background", severity.color()),
            ("color", "white"),
            ("padding", "15px 20px"),
            ("border-radius", "10px"),
            ("box-shadow", "0 5px 15px rgba(0,0,0,0.3)"),
            ("z-index", "9999"),
            ("max-width", "400px"),
            ("animation", ENTER_ANIMATION),
        ] {
            style.set_property(property, value)?;
        }

        let content = self.element_with_class("div", "notification-content")?;
        let icon = self.element_with_class("i", &format!("fas fa-{}", severity.icon()))?;
        let message = self.document.create_element("span")?;
        message.set_text_content(Some(&notification.message));
        let close = self.element_with_class("button", "notification-close")?;
        close.set_attribute("type", "button")?;
        let close_icon = self.element_with_class("i", "fas fa-times")?;
        close.append_child(&close_icon)?;

        let on_close = Closure::<dyn FnMut()>::new(move || on_close());
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;

        content.append_child(&icon)?;
        content.append_child(&message)?;
        content.append_child(&close)?;
        root.append_child(&content)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&root)?;

        Ok(Mounted {
            element: root,
            _on_close: on_close,
        })
    }

    fn element_with_class(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }
}

impl NotificationView for DomNotificationView {
    fn mount(&self, notification: &Notification, on_close: CloseAction) {
        match self.build(notification, on_close) {
            Ok(mounted) => {
                self.mounted.borrow_mut().insert(notification.id, mounted);
            }
            Err(err) => warn!(
                "event=notification_mount module=web status=error id={} err={err:?}",
                notification.id
            ),
        }
    }

    fn begin_exit(&self, id: NotificationId) {
        if let Some(mounted) = self.mounted.borrow().get(&id) {
            if let Err(err) = mounted.element.style().set_property("animation", EXIT_ANIMATION) {
                warn!("event=notification_exit module=web status=error id={id} err={err:?}");
            }
        }
    }

    fn detach(&self, id: NotificationId) {
        let removed = self.mounted.borrow_mut().remove(&id);
        if let Some(mounted) = removed {
            mounted.element.remove();
        }
    }
}
