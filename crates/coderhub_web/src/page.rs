//! Page wiring: binds DOM elements to core services once the document is
//! parsed.
//!
//! # Responsibility
//! - Look up every page section and hand its elements to the matching
//!   service as explicit handles.
//! - Keep observers, listeners and services alive for the page lifetime.
//!
//! # Invariants
//! - Wiring runs once per page.
//! - Absent optional sections are skipped; a contact form missing one of its
//!   field inputs fails wiring.

use crate::dom::{DomContactForm, DomElement, DomViewport};
use crate::error::{BindError, BindResult};
use crate::notification_view::DomNotificationView;
use crate::scheduler::BrowserScheduler;
use crate::visibility::IntersectionVisibility;
use coderhub_core::service::navbar::apply_navbar_style;
use coderhub_core::service::reveal::{watch_reveal, REVEAL_SELECTOR};
use coderhub_core::service::smooth_scroll::follow_link;
use coderhub_core::{
    ContactService, CountUpAnimator, ElementRef, NotificationManager, PageConfig, PortfolioFilter,
    Scheduler, TypingAnimator, Viewport,
};
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, Window};

const CONTACT_FORM_ID: &str = "contactForm";
const FILTER_BUTTON_SELECTOR: &str = ".portfolio-filter button";
const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";
const NAVBAR_SELECTOR: &str = ".navbar";
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const STAT_NUMBER_SELECTOR: &str = ".stat-number";
const HERO_TITLE_SELECTOR: &str = ".hero h1";

/// Long-lived state of a wired page.
pub struct Page {
    notifications: NotificationManager,
    _reveal: Rc<IntersectionVisibility>,
    _count_up: Rc<IntersectionVisibility>,
}

impl Page {
    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Returns whether `init` has completed on this page.
pub fn is_initialized() -> bool {
    PAGE.with(|page| page.borrow().is_some())
}

/// Runs `f` against the wired page, if any.
pub fn with_page<T>(f: impl FnOnce(&Page) -> T) -> Option<T> {
    PAGE.with(|page| page.borrow().as_ref().map(f))
}

/// Wires every page behavior.
///
/// # Errors
/// - `AlreadyInitialized` on a second call.
/// - `MissingWindow`/`MissingDocument` outside a browser page.
/// - `MissingElement` when the contact form lacks a field input.
/// - `Js` when the browser rejects an observer or listener.
pub fn init(config: PageConfig) -> BindResult<()> {
    if is_initialized() {
        return Err(BindError::AlreadyInitialized);
    }
    let window = web_sys::window().ok_or(BindError::MissingWindow)?;
    let document = window.document().ok_or(BindError::MissingDocument)?;
    if document.body().is_none() {
        return Err(BindError::MissingBody);
    }

    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new(window.clone()));
    let notifications = NotificationManager::new(
        Rc::new(DomNotificationView::new(document.clone())),
        Rc::clone(&scheduler),
        (&config.notification).into(),
    );
    let viewport = Rc::new(DomViewport::new(window.clone(), document.clone()));

    install_contact_form(&document, &notifications, &config)?;
    install_portfolio_filter(&document)?;
    let reveal = install_scroll_reveal(&document, &config)?;
    install_navbar(&window, &document, &viewport, &config)?;
    install_smooth_scroll(&document, &viewport, &config)?;
    let count_up = install_count_up(&document, &scheduler, &config)?;
    install_typing(&document, &scheduler, &config)?;

    PAGE.with(|page| {
        *page.borrow_mut() = Some(Page {
            notifications,
            _reveal: reveal,
            _count_up: count_up,
        });
    });
    info!("event=page_init module=web status=ok");
    Ok(())
}

fn install_contact_form(
    document: &Document,
    notifications: &NotificationManager,
    config: &PageConfig,
) -> BindResult<()> {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        debug!("event=contact_form module=web status=skip reason=not_found");
        return Ok(());
    };
    let bound = DomContactForm::bind(document, form.clone())?;
    let service = ContactService::new(
        bound,
        notifications.clone(),
        (&config.notification).into(),
    );
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        service.submit();
    })
}

fn install_portfolio_filter(document: &Document) -> BindResult<()> {
    let buttons = dom_elements(query_all(document, FILTER_BUTTON_SELECTOR)?);
    if buttons.is_empty() {
        debug!("event=portfolio_filter module=web status=skip reason=no_buttons");
        return Ok(());
    }
    let items = dom_elements(query_all(document, PORTFOLIO_ITEM_SELECTOR)?);
    let filter = Rc::new(PortfolioFilter::new(
        element_refs(&buttons),
        element_refs(&items),
    ));
    for (index, button) in buttons.iter().enumerate() {
        let filter = Rc::clone(&filter);
        listen(button.element(), "click", move |_event: Event| {
            filter.select(index);
        })?;
    }
    Ok(())
}

fn install_scroll_reveal(
    document: &Document,
    config: &PageConfig,
) -> BindResult<Rc<IntersectionVisibility>> {
    let observer = Rc::new(IntersectionVisibility::new(&config.reveal.visibility())?);
    for element in query_all(document, REVEAL_SELECTOR)? {
        if let Some(handle) = DomElement::from_element(element.clone()) {
            watch_reveal(&observer, &element, Rc::new(handle));
        }
    }
    debug!(
        "event=scroll_reveal module=web status=ok observed={}",
        observer.observed_count()
    );
    Ok(observer)
}

fn install_navbar(
    window: &Window,
    document: &Document,
    viewport: &Rc<DomViewport>,
    config: &PageConfig,
) -> BindResult<()> {
    let Some(navbar) = document
        .query_selector(NAVBAR_SELECTOR)?
        .and_then(DomElement::from_element)
    else {
        debug!("event=navbar module=web status=skip reason=not_found");
        return Ok(());
    };
    let viewport = Rc::clone(viewport);
    let threshold_px = config.navbar.scroll_threshold_px;
    listen(window, "scroll", move |_event: Event| {
        apply_navbar_style(&navbar, viewport.scroll_y(), threshold_px);
    })
}

fn install_smooth_scroll(
    document: &Document,
    viewport: &Rc<DomViewport>,
    config: &PageConfig,
) -> BindResult<()> {
    let offset_px = config.smooth_scroll.offset_px;
    for link in dom_elements(query_all(document, ANCHOR_SELECTOR)?) {
        let viewport = Rc::clone(viewport);
        let target = link.element().clone();
        listen(&target, "click", move |event: Event| {
            event.prevent_default();
            follow_link(viewport.as_ref(), &link, offset_px);
        })?;
    }
    Ok(())
}

fn install_count_up(
    document: &Document,
    scheduler: &Rc<dyn Scheduler>,
    config: &PageConfig,
) -> BindResult<Rc<IntersectionVisibility>> {
    let observer = Rc::new(IntersectionVisibility::new(&config.count_up.visibility())?);
    let animator = CountUpAnimator::new(Rc::clone(scheduler), config.count_up.duration_ms);
    for element in query_all(document, STAT_NUMBER_SELECTOR)? {
        if let Some(sink) = DomElement::from_element(element.clone()) {
            animator.watch(&observer, element, Rc::new(sink));
        }
    }
    Ok(observer)
}

fn install_typing(
    document: &Document,
    scheduler: &Rc<dyn Scheduler>,
    config: &PageConfig,
) -> BindResult<()> {
    let Some(title) = document
        .query_selector(HERO_TITLE_SELECTOR)?
        .and_then(DomElement::from_element)
    else {
        debug!("event=typing module=web status=skip reason=not_found");
        return Ok(());
    };
    TypingAnimator::new(Rc::clone(scheduler), &config.typing).start_from_sink(Rc::new(title));
    Ok(())
}

fn query_all(document: &Document, selector: &str) -> BindResult<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn dom_elements(elements: Vec<Element>) -> Vec<DomElement> {
    elements
        .into_iter()
        .filter_map(DomElement::from_element)
        .collect()
}

fn element_refs(elements: &[DomElement]) -> Vec<ElementRef> {
    elements
        .iter()
        .map(|element| Rc::new(element.clone()) as ElementRef)
        .collect()
}

/// Attaches a page-lifetime event listener.
fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> BindResult<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
