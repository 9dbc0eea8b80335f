//! Page selector window for the transaction feed.

use serde::{Deserialize, Serialize};

/// Buttons shown before ellipses kick in.
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// One entry of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Page buttons for `current` of `total`.
///
/// All pages are listed when `total <= max_visible`. Otherwise the first and
/// last page are always shown, with the current page's neighbourhood between
/// them and ellipses covering the gaps.
///
/// `max_visible` below [`DEFAULT_MAX_VISIBLE`] is raised to it; the
/// ellipsis layouts need at least that many pages.
pub fn compute_page_window(current: u32, total: u32, max_visible: u32) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total <= max_visible.max(DEFAULT_MAX_VISIBLE) {
        return (1..=total).map(Page).collect();
    }

    let current = current.clamp(1, total);
    let mut window = Vec::with_capacity(7);

    if current <= 3 {
        window.extend((1..=4).map(Page));
        window.push(Ellipsis);
        window.push(Page(total));
    } else if current >= total - 2 {
        window.push(Page(1));
        window.push(Ellipsis);
        window.extend((total - 3..=total).map(Page));
    } else {
        window.push(Page(1));
        window.push(Ellipsis);
        window.extend((current - 1..=current + 1).map(Page));
        window.push(Ellipsis);
        window.push(Page(total));
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_first_page() {
        assert_eq!(
            compute_page_window(1, 99, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(99)]
        );
    }

    #[test]
    fn test_last_page() {
        assert_eq!(
            compute_page_window(99, 99, 5),
            vec![Page(1), Ellipsis, Page(96), Page(97), Page(98), Page(99)]
        );
    }

    #[test]
    fn test_middle_page() {
        assert_eq!(
            compute_page_window(50, 99, 5),
            vec![Page(1), Ellipsis, Page(49), Page(50), Page(51), Ellipsis, Page(99)]
        );
    }

    #[test]
    fn test_few_pages() {
        assert_eq!(compute_page_window(3, 3, 5), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(compute_page_window(1, 0, 5), vec![]);
    }

    #[test]
    fn test_leading_transition() {
        assert_eq!(compute_page_window(3, 99, 5)[4], Ellipsis);
        assert_eq!(
            compute_page_window(4, 99, 5),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(99)]
        );
    }

    #[test]
    fn test_trailing_transition() {
        assert_eq!(
            compute_page_window(96, 99, 5),
            vec![Page(1), Ellipsis, Page(95), Page(96), Page(97), Ellipsis, Page(99)]
        );
        assert_eq!(
            compute_page_window(97, 99, 5),
            vec![Page(1), Ellipsis, Page(96), Page(97), Page(98), Page(99)]
        );
    }

    #[test]
    fn test_small_max_visible_is_raised() {
        assert_eq!(
            compute_page_window(1, 4, 3),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
        assert_eq!(compute_page_window(1, 99, 0), compute_page_window(1, 99, 5));
    }

    #[test]
    fn test_pages_in_range_and_unique() {
        for max_visible in 0..=7 {
            for total in 0..=12 {
                for current in 1..=total.max(1) {
                    let pages: Vec<u32> = compute_page_window(current, total, max_visible)
                        .into_iter()
                        .filter_map(|t| match t {
                            Page(n) => Some(n),
                            Ellipsis => None,
                        })
                        .collect();
                    assert!(pages.iter().all(|p| (1..=total).contains(p)), "{pages:?}");
                    assert!(pages.windows(2).all(|w| w[0] < w[1]), "{pages:?}");
                }
            }
        }
    }

    #[test]
    fn test_current_always_present() {
        for current in 1..=99 {
            assert!(compute_page_window(current, 99, 5).contains(&Page(current)));
        }
    }
}
