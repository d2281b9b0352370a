//! Smooth in-page anchor navigation.

use crate::port::dom::{PageElement, Viewport};
use log::debug;

/// Scroll destination for an in-page `href`, keeping `offset_px` clear above
/// the target.
///
/// `resolve` maps an element id to its document offset. Returns `None` for
/// hrefs that are not fragments, the bare `#`, and unknown targets.
pub fn scroll_target(
    href: &str,
    offset_px: f64,
    resolve: impl FnOnce(&str) -> Option<f64>,
) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    resolve(id).map(|offset_top| offset_top - offset_px)
}

/// Handles a click on an in-page anchor.
///
/// Returns the scroll destination when a scroll was started.
pub fn navigate(viewport: &dyn Viewport, href: &str, offset_px: f64) -> Option<f64> {
    let Some(top) = scroll_target(href, offset_px, |id| viewport.offset_top(id)) else {
        debug!("event=smooth_scroll module=smooth_scroll status=skip href={}", href);
        return None;
    };
    viewport.smooth_scroll_to(top);
    Some(top)
}

/// Handles a click on `link`, reading its current `href`.
pub fn follow_link(viewport: &dyn Viewport, link: &dyn PageElement, offset_px: f64) -> Option<f64> {
    let href = link.attribute("href").unwrap_or_default();
    navigate(viewport, &href, offset_px)
}

#[cfg(test)]
mod tests {
    use super::scroll_target;

    #[test]
    fn subtracts_navbar_offset() {
        let top = scroll_target("#servicios", 80.0, |id| {
            assert_eq!(id, "servicios");
            Some(1200.0)
        });
        assert_eq!(top, Some(1120.0));
    }

    #[test]
    fn bare_hash_and_external_links_do_nothing() {
        assert_eq!(scroll_target("#", 80.0, |_| Some(0.0)), None);
        assert_eq!(scroll_target("/blog", 80.0, |_| Some(0.0)), None);
        assert_eq!(scroll_target("#missing", 80.0, |_| None), None);
    }
}
