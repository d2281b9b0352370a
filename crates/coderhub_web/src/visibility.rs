//! `IntersectionObserver`-backed visibility port.

use crate::error::BindResult;
use coderhub_core::{VisibilityCallback, VisibilityObserver, VisibilityOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type Registry = Rc<RefCell<Vec<(Element, Rc<RefCell<VisibilityCallback>>)>>>;

/// One intersection observer shared by every target with the same options.
pub struct IntersectionVisibility {
    observer: IntersectionObserver,
    registry: Registry,
    _on_change: Closure<dyn FnMut(js_sys::Array)>,
}

impl IntersectionVisibility {
    pub fn new(options: &VisibilityOptions) -> BindResult<Self> {
        let registry: Registry = Rc::new(RefCell::new(Vec::new()));
        let dispatch = Rc::clone(&registry);
        let on_change = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                let target = entry.target();
                let callback = dispatch
                    .borrow()
                    .iter()
                    .find(|(element, _)| *element == target)
                    .map(|(_, callback)| Rc::clone(callback));
                if let Some(callback) = callback {
                    (*callback.borrow_mut())(entry.is_intersecting());
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            registry,
            _on_change: on_change,
        })
    }

    pub fn observed_count(&self) -> usize {
        self.registry.borrow().len()
    }
}

impl VisibilityObserver for IntersectionVisibility {
    type Target = Element;

    fn observe(&self, target: &Element, callback: VisibilityCallback) {
        let mut registry = self.registry.borrow_mut();
        registry.retain(|(element, _)| element != target);
        registry.push((target.clone(), Rc::new(RefCell::new(callback))));
        self.observer.observe(target);
    }

    fn unobserve(&self, target: &Element) {
        self.registry
            .borrow_mut()
            .retain(|(element, _)| element != target);
        self.observer.unobserve(target);
    }
}

impl Drop for IntersectionVisibility {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
