//! Portfolio category filter.
//!
//! # Responsibility
//! - Mark the clicked filter button as the single active one.
//! - Show items of the selected category and hide the rest.

use crate::port::dom::ElementRef;
use crate::service::reveal::reveal;
use log::debug;

/// Filter value that matches every category.
pub const FILTER_ALL: &str = "all";
/// Button attribute carrying the filter value.
pub const FILTER_ATTRIBUTE: &str = "data-filter";
/// Item attribute carrying the item category.
pub const CATEGORY_ATTRIBUTE: &str = "data-category";
pub const ACTIVE_CLASS: &str = "active";

/// Whether an item with `category` is shown under `filter`.
pub fn filter_matches(filter: &str, category: Option<&str>) -> bool {
    filter == FILTER_ALL || category == Some(filter)
}

/// Visibility of every item under `filter`, in item order.
pub fn plan<'a>(filter: &str, categories: impl IntoIterator<Item = Option<&'a str>>) -> Vec<bool> {
    categories
        .into_iter()
        .map(|category| filter_matches(filter, category))
        .collect()
}

/// Outcome of one filter click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub filter: String,
    pub shown: usize,
    pub hidden: usize,
}

/// Filter buttons and the items they control.
pub struct PortfolioFilter {
    buttons: Vec<ElementRef>,
    items: Vec<ElementRef>,
}

impl PortfolioFilter {
    pub fn new(buttons: Vec<ElementRef>, items: Vec<ElementRef>) -> Self {
        Self { buttons, items }
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Applies the filter of button `index`.
    ///
    /// Returns `None` for an out-of-range index. A button without a filter
    /// value selects nothing but still becomes active, hiding every item.
    pub fn select(&self, index: usize) -> Option<FilterOutcome> {
        let clicked = self.buttons.get(index)?;
        let filter = clicked.attribute(FILTER_ATTRIBUTE).unwrap_or_default();

        for button in &self.buttons {
            button.remove_class(ACTIVE_CLASS);
        }
        clicked.add_class(ACTIVE_CLASS);

        let categories = self
            .items
            .iter()
            .map(|item| item.attribute(CATEGORY_ATTRIBUTE))
            .collect::<Vec<_>>();
        let visibility = plan(&filter, categories.iter().map(Option::as_deref));

        let mut shown = 0;
        for (item, visible) in self.items.iter().zip(visibility) {
            if visible {
                item.set_style("display", "block");
                reveal(item.as_ref());
                shown += 1;
            } else {
                item.set_style("display", "none");
            }
        }

        let outcome = FilterOutcome {
            hidden: self.items.len() - shown,
            shown,
            filter,
        };
        debug!(
            "event=portfolio_filter module=portfolio status=ok filter={} shown={} hidden={}",
            outcome.filter, outcome.shown, outcome.hidden
        );
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_matches, plan};

    #[test]
    fn all_matches_every_category() {
        assert!(filter_matches("all", Some("web")));
        assert!(filter_matches("all", None));
    }

    #[test]
    fn plan_matches_exact_category_only() {
        let visible = plan("web", [Some("web"), Some("mobile"), None, Some("Web")]);
        assert_eq!(visible, vec![true, false, false, false]);
    }
}
