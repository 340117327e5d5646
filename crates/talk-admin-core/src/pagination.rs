//! Page-number window for pagination controls.
//!
//! Computes which page buttons a pagination control shows for a given
//! current page, where elided ranges go, and whether the previous/next
//! controls are active. Knows nothing about rendering beyond a plain
//! text bar used by the command line.

use serde::Serialize;
use std::fmt;

use crate::error::AdminError;
use crate::result::AdminResult;

/// Maximum number of page buttons in the main window.
pub const MAX_VISIBLE_PAGES: i64 = 4;

/// One slot of a rendered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageEntry {
    /// A clickable page button.
    Page(i64),
    /// Non-interactive "…" standing in for elided pages.
    Gap,
}

/// A standalone jump-to-first or jump-to-last button outside the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Boundary {
    pub page: i64,
    /// Whether an ellipsis separates the button from the window.
    pub gap: bool,
}

/// The pages a pagination control shows for one `(current, total)` pair.
///
/// Recomputed on every render; carries no state beyond its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current_page: i64,
    pub total_pages: i64,
    /// Page buttons of the main window, strictly increasing.
    pub visible: Vec<i64>,
    pub leading: Option<Boundary>,
    pub trailing: Option<Boundary>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageWindow {
    /// Compute the window for `current_page` out of `total_pages`.
    ///
    /// Out-of-range input is rejected rather than clamped. With zero pages the
    /// only accepted current page is 1.
    pub fn calculate(current_page: i64, total_pages: i64) -> AdminResult<Self> {
        validate(current_page, total_pages)?;

        let visible = visible_pages(current_page, total_pages);

        let leading = match visible.first() {
            Some(&first) if first > 1 => Some(Boundary {
                page: 1,
                gap: first > 2,
            }),
            _ => None,
        };
        let trailing = match visible.last() {
            Some(&last) if last < total_pages => Some(Boundary {
                page: total_pages,
                gap: last < total_pages - 1,
            }),
            _ => None,
        };

        Ok(Self {
            current_page,
            total_pages,
            visible,
            leading,
            trailing,
            prev_enabled: current_page != 1,
            next_enabled: total_pages > 0 && current_page != total_pages,
        })
    }

    /// Flatten the window into render order: leading boundary, window with
    /// gaps between non-adjacent pages, trailing boundary.
    pub fn entries(&self) -> Vec<PageEntry> {
        let mut entries = Vec::with_capacity(self.visible.len() * 2 + 4);

        if let Some(boundary) = self.leading {
            entries.push(PageEntry::Page(boundary.page));
            if boundary.gap {
                entries.push(PageEntry::Gap);
            }
        }

        let mut previous: Option<i64> = None;
        for &page in &self.visible {
            if let Some(prev) = previous {
                if page - prev > 1 {
                    entries.push(PageEntry::Gap);
                }
            }
            entries.push(PageEntry::Page(page));
            previous = Some(page);
        }

        if let Some(boundary) = self.trailing {
            if boundary.gap {
                entries.push(PageEntry::Gap);
            }
            entries.push(PageEntry::Page(boundary.page));
        }

        entries
    }

    /// Target of the "previous page" control, `None` while it is disabled.
    pub fn prev_target(&self) -> Option<i64> {
        self.prev_enabled.then(|| self.current_page - 1)
    }

    /// Target of the "next page" control, `None` while it is disabled.
    pub fn next_target(&self) -> Option<i64> {
        self.next_enabled.then(|| self.current_page + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        parts.push(if self.prev_enabled { "‹" } else { "-" }.to_string());
        for entry in self.entries() {
            parts.push(match entry {
                PageEntry::Page(page) if page == self.current_page => format!("[{}]", page),
                PageEntry::Page(page) => page.to_string(),
                PageEntry::Gap => "…".to_string(),
            });
        }
        parts.push(if self.next_enabled { "›" } else { "-" }.to_string());
        write!(f, "{}", parts.join(" "))
    }
}

fn validate(current_page: i64, total_pages: i64) -> AdminResult<()> {
    if total_pages < 0 {
        return Err(AdminError::validation(format!(
            "total pages must not be negative (got {})",
            total_pages
        )));
    }
    let upper = total_pages.max(1);
    if current_page < 1 || current_page > upper {
        return Err(AdminError::validation(format!(
            "current page {} is outside 1..={} for {} total pages",
            current_page, upper, total_pages
        )));
    }
    Ok(())
}

fn visible_pages(current_page: i64, total_pages: i64) -> Vec<i64> {
    if total_pages <= MAX_VISIBLE_PAGES {
        (1..=total_pages).collect()
    } else if current_page <= 2 {
        (1..=MAX_VISIBLE_PAGES).collect()
    } else if current_page >= total_pages - 1 {
        (total_pages - MAX_VISIBLE_PAGES + 1..=total_pages).collect()
    } else {
        // One page behind, none ahead, anchored on both ends.
        vec![1, current_page - 1, current_page, total_pages]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageEntry::{Gap, Page};

    #[test]
    fn test_fewer_pages_than_window() {
        let window = PageWindow::calculate(2, 3).unwrap();

        assert_eq!(window.visible, vec![1, 2, 3]);
        assert!(window.leading.is_none());
        assert!(window.trailing.is_none());
        assert_eq!(window.entries(), vec![Page(1), Page(2), Page(3)]);
        assert!(window.prev_enabled);
        assert!(window.next_enabled);
    }

    #[test]
    fn test_first_page_of_many() {
        let window = PageWindow::calculate(1, 10).unwrap();

        assert_eq!(window.visible, vec![1, 2, 3, 4]);
        assert_eq!(window.trailing, Some(Boundary { page: 10, gap: true }));
        assert!(window.leading.is_none());
        assert_eq!(
            window.entries(),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(10)]
        );
        assert!(!window.prev_enabled);
        assert!(window.next_enabled);
    }

    #[test]
    fn test_last_page_of_many() {
        let window = PageWindow::calculate(10, 10).unwrap();

        assert_eq!(window.visible, vec![7, 8, 9, 10]);
        assert_eq!(window.leading, Some(Boundary { page: 1, gap: true }));
        assert!(window.trailing.is_none());
        assert_eq!(
            window.entries(),
            vec![Page(1), Gap, Page(7), Page(8), Page(9), Page(10)]
        );
        assert!(window.prev_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn test_interior_page_is_asymmetric() {
        let window = PageWindow::calculate(5, 10).unwrap();

        assert_eq!(window.visible, vec![1, 4, 5, 10]);
        assert!(!window.visible.contains(&6));
        assert!(window.leading.is_none());
        assert!(window.trailing.is_none());
        assert_eq!(
            window.entries(),
            vec![Page(1), Gap, Page(4), Page(5), Gap, Page(10)]
        );
    }

    #[test]
    fn test_interior_page_next_to_first() {
        let window = PageWindow::calculate(3, 10).unwrap();

        assert_eq!(window.visible, vec![1, 2, 3, 10]);
        assert_eq!(
            window.entries(),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
    }

    #[test]
    fn test_trailing_boundary_without_gap() {
        let window = PageWindow::calculate(2, 5).unwrap();

        assert_eq!(window.visible, vec![1, 2, 3, 4]);
        assert_eq!(window.trailing, Some(Boundary { page: 5, gap: false }));
        assert_eq!(
            window.entries(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_leading_boundary_without_gap() {
        let window = PageWindow::calculate(4, 5).unwrap();

        assert_eq!(window.visible, vec![2, 3, 4, 5]);
        assert_eq!(window.leading, Some(Boundary { page: 1, gap: false }));
    }

    #[test]
    fn test_no_pages() {
        let window = PageWindow::calculate(1, 0).unwrap();

        assert!(window.is_empty());
        assert!(window.entries().is_empty());
        assert!(!window.prev_enabled);
        assert!(!window.next_enabled);
        assert_eq!(window.prev_target(), None);
        assert_eq!(window.next_target(), None);
    }

    #[test]
    fn test_single_page() {
        let window = PageWindow::calculate(1, 1).unwrap();

        assert_eq!(window.visible, vec![1]);
        assert!(!window.prev_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn test_rejects_out_of_range_input() {
        for (current, total) in [(0, 5), (6, 5), (-1, 5), (1, -1), (2, 0)] {
            let err = PageWindow::calculate(current, total).unwrap_err();
            assert!(
                matches!(err, AdminError::Validation(_)),
                "({}, {}) should be rejected, got {:?}",
                current,
                total,
                err
            );
        }
    }

    #[test]
    fn test_navigation_targets() {
        let window = PageWindow::calculate(5, 10).unwrap();
        assert_eq!(window.prev_target(), Some(4));
        assert_eq!(window.next_target(), Some(6));

        let first = PageWindow::calculate(1, 10).unwrap();
        assert_eq!(first.prev_target(), None);
        assert_eq!(first.next_target(), Some(2));
    }

    #[test]
    fn test_display_bar() {
        let window = PageWindow::calculate(5, 10).unwrap();
        assert_eq!(window.to_string(), "‹ 1 … 4 [5] … 10 ›");

        let first = PageWindow::calculate(1, 10).unwrap();
        assert_eq!(first.to_string(), "- [1] 2 3 4 … 10 ›");

        let empty = PageWindow::calculate(1, 0).unwrap();
        assert_eq!(empty.to_string(), "- -");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn state_strategy() -> impl Strategy<Value = (i64, i64)> {
            (0i64..200).prop_flat_map(|total| (1..=total.max(1), Just(total)))
        }

        fn concrete(entries: &[PageEntry]) -> Vec<i64> {
            entries
                .iter()
                .filter_map(|entry| match entry {
                    Page(page) => Some(*page),
                    Gap => None,
                })
                .collect()
        }

        proptest! {
            #[test]
            fn window_never_exceeds_max((current, total) in state_strategy()) {
                let window = PageWindow::calculate(current, total).unwrap();
                prop_assert!(window.visible.len() as i64 <= MAX_VISIBLE_PAGES);
            }

            #[test]
            fn first_and_last_pages_reachable((current, total) in state_strategy()) {
                prop_assume!(total >= 1);
                let pages = concrete(&PageWindow::calculate(current, total).unwrap().entries());
                prop_assert!(pages.contains(&1));
                prop_assert!(pages.contains(&total));
            }

            #[test]
            fn pages_strictly_increasing((current, total) in state_strategy()) {
                let window = PageWindow::calculate(current, total).unwrap();
                prop_assert!(window.visible.windows(2).all(|w| w[0] < w[1]));
                let pages = concrete(&window.entries());
                prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
            }

            #[test]
            fn gap_iff_pages_not_adjacent((current, total) in state_strategy()) {
                let entries = PageWindow::calculate(current, total).unwrap().entries();
                prop_assert!(!entries.windows(2).any(|w| w == [Gap, Gap]));
                prop_assert!(!matches!(entries.first(), Some(Gap)));
                prop_assert!(!matches!(entries.last(), Some(Gap)));

                let mut last_page: Option<i64> = None;
                let mut saw_gap = false;
                for entry in entries {
                    match entry {
                        Gap => saw_gap = true,
                        Page(page) => {
                            if let Some(prev) = last_page {
                                prop_assert_eq!(saw_gap, page - prev > 1);
                            }
                            last_page = Some(page);
                            saw_gap = false;
                        }
                    }
                }
            }

            #[test]
            fn nav_controls_follow_position((current, total) in state_strategy()) {
                let window = PageWindow::calculate(current, total).unwrap();
                prop_assert_eq!(!window.prev_enabled, current == 1);
                prop_assert_eq!(!window.next_enabled, current == total || total == 0);
            }

            #[test]
            fn current_page_is_shown((current, total) in state_strategy()) {
                prop_assume!(total >= 1);
                let pages = concrete(&PageWindow::calculate(current, total).unwrap().entries());
                prop_assert!(pages.contains(&current));
            }
        }
    }
}
