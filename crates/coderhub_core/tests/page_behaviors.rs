use coderhub_core::service::navbar::{apply_navbar_style, SCROLLED_STYLE, TOP_STYLE};
use coderhub_core::service::portfolio::PortfolioFilter;
use coderhub_core::service::reveal::{watch_reveal, REVEAL_CLASSES};
use coderhub_core::service::smooth_scroll::{follow_link, navigate};
use coderhub_core::testing::{FakeViewport, FakeVisibility, MemoryElement};
use coderhub_core::{ElementRef, PageElement, Viewport};
use std::rc::Rc;

fn button(filter: &str) -> Rc<MemoryElement> {
    Rc::new(MemoryElement::new().with_attribute("data-filter", filter))
}

fn item(category: &str) -> Rc<MemoryElement> {
    Rc::new(MemoryElement::new().with_attribute("data-category", category))
}

fn refs(elements: &[Rc<MemoryElement>]) -> Vec<ElementRef> {
    elements
        .iter()
        .map(|element| Rc::clone(element) as ElementRef)
        .collect()
}

#[test]
fn filter_shows_matching_items_and_moves_active_button() {
    let buttons = vec![button("all"), button("web"), button("mobile")];
    let items = vec![item("web"), item("mobile"), item("web")];
    buttons[0].add_class("active");
    let filter = PortfolioFilter::new(refs(&buttons), refs(&items));

    let outcome = filter.select(1).expect("button 1 exists");

    assert_eq!(outcome.filter, "web");
    assert_eq!((outcome.shown, outcome.hidden), (2, 1));
    assert!(!buttons[0].has_class("active"));
    assert!(buttons[1].has_class("active"));
    assert_eq!(items[0].style("display").as_deref(), Some("block"));
    assert_eq!(items[1].style("display").as_deref(), Some("none"));
    for class in REVEAL_CLASSES {
        assert!(items[2].has_class(class));
        assert!(!items[1].has_class(class));
    }
}

#[test]
fn all_filter_shows_everything() {
    let buttons = vec![button("web"), button("all")];
    let items = vec![item("web"), item("mobile"), Rc::new(MemoryElement::new())];
    let filter = PortfolioFilter::new(refs(&buttons), refs(&items));

    filter.select(0);
    let outcome = filter.select(1).expect("button 1 exists");

    assert_eq!((outcome.shown, outcome.hidden), (3, 0));
    assert_eq!(
        buttons
            .iter()
            .filter(|button| button.has_class("active"))
            .count(),
        1
    );
    assert!(items
        .iter()
        .all(|item| item.style("display").as_deref() == Some("block")));
}

#[test]
fn out_of_range_button_is_ignored() {
    let filter = PortfolioFilter::new(refs(&[button("all")]), Vec::new());
    assert_eq!(filter.select(3), None);
}

#[test]
fn reveal_adds_classes_on_each_visibility_and_keeps_observing() {
    let observer = Rc::new(FakeVisibility::new());
    let card = Rc::new(MemoryElement::new());
    let target = "card-1".to_string();
    watch_reveal(&observer, &target, card.clone());

    observer.set_visible(&target, false);
    assert!(card.classes().is_empty());

    observer.set_visible(&target, true);
    observer.set_visible(&target, true);
    assert_eq!(card.classes(), vec!["animate__animated", "animate__fadeInUp"]);
    assert!(observer.is_observed(&target));
}

#[test]
fn navbar_style_follows_scroll_position() {
    let navbar = MemoryElement::new();
    let viewport = FakeViewport::new();

    viewport.set_scroll_y(250.0);
    assert_eq!(
        apply_navbar_style(&navbar, viewport.scroll_y(), 100.0),
        SCROLLED_STYLE
    );
    assert_eq!(navbar.style("backdrop-filter").as_deref(), Some("blur(15px)"));

    viewport.set_scroll_y(20.0);
    apply_navbar_style(&navbar, viewport.scroll_y(), 100.0);
    assert_eq!(navbar.style("background").as_deref(), Some(TOP_STYLE.background));
}

#[test]
fn anchor_navigation_scrolls_below_fixed_navbar() {
    let viewport = FakeViewport::new().with_section("contacto", 2400.0);

    assert_eq!(navigate(&viewport, "#contacto", 80.0), Some(2320.0));
    assert_eq!(navigate(&viewport, "#missing", 80.0), None);
    assert_eq!(navigate(&viewport, "#", 80.0), None);
    assert_eq!(viewport.scrolls(), vec![2320.0]);
}

#[test]
fn anchor_href_is_read_when_clicked() {
    let viewport = FakeViewport::new()
        .with_section("servicios", 900.0)
        .with_section("contacto", 2400.0);
    let link = MemoryElement::new().with_attribute("href", "#servicios");

    link.set_attribute("href", "#contacto");
    assert_eq!(follow_link(&viewport, &link, 80.0), Some(2320.0));

    link.set_attribute("href", "https://example.com");
    assert_eq!(follow_link(&viewport, &link, 80.0), None);
    assert_eq!(viewport.scrolls(), vec![2320.0]);
}
