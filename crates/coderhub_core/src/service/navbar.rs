//! Navbar background swap on scroll.

use crate::port::dom::PageElement;

/// Inline style values applied to the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

pub const SCROLLED_STYLE: NavbarStyle = NavbarStyle {
    background: "rgba(15, 15, 15, 0.98)",
    backdrop_filter: "blur(15px)",
};

pub const TOP_STYLE: NavbarStyle = NavbarStyle {
    background: "rgba(15, 15, 15, 0.95)",
    backdrop_filter: "blur(10px)",
};

/// Style for scroll offset `scroll_y`; strictly past `threshold_px` counts
/// as scrolled.
pub fn navbar_style(scroll_y: f64, threshold_px: f64) -> NavbarStyle {
    if scroll_y > threshold_px {
        SCROLLED_STYLE
    } else {
        TOP_STYLE
    }
}

/// Applies the style for `scroll_y` to `navbar`.
pub fn apply_navbar_style(navbar: &dyn PageElement, scroll_y: f64, threshold_px: f64) -> NavbarStyle {
    let style = navbar_style(scroll_y, threshold_px);
    navbar.set_style("background", style.background);
    navbar.set_style("backdrop-filter", style.backdrop_filter);
    style
}

#[cfg(test)]
mod tests {
    use super::{navbar_style, SCROLLED_STYLE, TOP_STYLE};

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(navbar_style(0.0, 100.0), TOP_STYLE);
        assert_eq!(navbar_style(100.0, 100.0), TOP_STYLE);
        assert_eq!(navbar_style(100.5, 100.0), SCROLLED_STYLE);
    }
}
