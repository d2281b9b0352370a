//! Reveal-on-scroll animation classes.

use crate::port::dom::{ElementRef, PageElement};
use crate::port::visibility::VisibilityObserver;
use std::rc::Rc;

/// Elements animated in when they scroll into view.
pub const REVEAL_SELECTOR: &str = ".card, .stat-item, .team-member, .portfolio-item, .service-icon";
/// Classes that trigger the fade-in-up animation.
pub const REVEAL_CLASSES: [&str; 2] = ["animate__animated", "animate__fadeInUp"];

/// Adds the reveal animation classes to `element`.
pub fn reveal(element: &dyn PageElement) {
    for class in REVEAL_CLASSES {
        element.add_class(class);
    }
}

/// Reveals `element` every time `target` becomes visible.
///
/// The observation is kept after the first reveal; repeated reveals are
/// no-ops because class addition is idempotent.
pub fn watch_reveal<O>(observer: &Rc<O>, target: &O::Target, element: ElementRef)
where
    O: VisibilityObserver,
{
    observer.observe(
        target,
        Box::new(move |visible| {
            if visible {
                reveal(element.as_ref());
            }
        }),
    );
}
