// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::AlumniId;

/// How many numbered page controls are shown before the pager collapses to a
/// sliding window around the current page.
const FULL_RUN_LIMIT: usize = 5;

/// An empty result set still reports one (empty) page so the pagination
/// controls stay well-formed.
pub fn total_pages(visible_count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    visible_count.div_ceil(page_size).max(1)
}

/// Returns `requested` when it is a valid page, else 1. Never fails; the
/// controller calls this after every mutation to the visible set or the page
/// size, before anything renders.
pub fn clamp_page(requested: usize, visible_count: usize, page_size: usize) -> usize {
    if (1..=total_pages(visible_count, page_size)).contains(&requested) {
        requested
    } else {
        1
    }
}

/// The slice of the visibility list shown on `page`. `page` must already be
/// clamped.
pub fn page_slice(visible: &[AlumniId], page: usize, page_size: usize) -> &[AlumniId] {
    let start = (page - 1).saturating_mul(page_size).min(visible.len());
    let end = start.saturating_add(page_size).min(visible.len());
    &visible[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    Page { number: usize, is_current: bool },
    Ellipsis,
}

/// Descriptor the renderer turns into Previous/Next buttons and numbered
/// page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerControls {
    pub current: usize,
    pub total: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub items: Vec<PagerItem>,
}

/// All pages when there are five or fewer; otherwise a window of up to five
/// pages centered on the current one, with ellipsis markers and explicit
/// first/last controls when the window does not touch the ends.
pub fn pager_controls(current: usize, total: usize) -> PagerControls {
    debug_assert!(total >= 1 && (1..=total).contains(&current));

    let mut items = Vec::new();
    if total <= FULL_RUN_LIMIT {
        for number in 1..=total {
            items.push(PagerItem::Page {
                number,
                is_current: number == current,
            });
        }
    } else {
        let start = current.saturating_sub(2).max(1);
        let end = (current + 2).min(total);
        if start > 1 {
            items.push(PagerItem::Page {
                number: 1,
                is_current: false,
            });
            if start > 2 {
                items.push(PagerItem::Ellipsis);
            }
        }
        for number in start..=end {
            items.push(PagerItem::Page {
                number,
                is_current: number == current,
            });
        }
        if end < total {
            if end < total - 1 {
                items.push(PagerItem::Ellipsis);
            }
            items.push(PagerItem::Page {
                number: total,
                is_current: false,
            });
        }
    }

    PagerControls {
        current,
        total,
        prev_enabled: current > 1,
        next_enabled: current < total,
        items,
    }
}

/// The "Showing A-B of N alumni" line under the table.
pub fn range_label(
    visible_count: usize,
    total_count: usize,
    page: usize,
    page_size: usize,
    filtered: bool,
) -> String {
    if visible_count == 0 {
        return "No alumni to display".to_owned();
    }
    if filtered {
        return format!("Showing {visible_count} of {total_count} alumni (filtered)");
    }
    let start = (page - 1) * page_size + 1;
    let end = (page * page_size).min(visible_count);
    format!("Showing {start}-{end} of {visible_count} alumni")
}

#[cfg(test)]
mod tests {
    use super::{
        PagerItem, clamp_page, page_slice, pager_controls, range_label, total_pages,
    };
    use crate::ids::AlumniId;

    fn numbers(items: &[PagerItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|item| match item {
                PagerItem::Page { number, .. } => Some(*number),
                PagerItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn total_pages_is_never_zero() {
        assert_eq!(total_pages(0, 4), 1);
        assert_eq!(total_pages(1, 4), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(8, 4), 2);
        assert_eq!(total_pages(9, 4), 3);
    }

    #[test]
    fn clamp_returns_one_for_out_of_range_requests() {
        assert_eq!(clamp_page(1, 0, 4), 1);
        assert_eq!(clamp_page(2, 5, 4), 2);
        assert_eq!(clamp_page(3, 5, 4), 1);
        assert_eq!(clamp_page(0, 5, 4), 1);
    }

    #[test]
    fn page_slice_windows_the_visibility_list() {
        let ids: Vec<AlumniId> = (1..=5).map(AlumniId::new).collect();
        assert_eq!(page_slice(&ids, 1, 4), &ids[0..4]);
        assert_eq!(page_slice(&ids, 2, 4), &ids[4..5]);
        assert!(page_slice(&[], 1, 4).is_empty());
    }

    #[test]
    fn short_run_lists_every_page() {
        let pager = pager_controls(2, 5);
        assert_eq!(
            numbers(&pager.items),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        assert!(pager.prev_enabled);
        assert!(pager.next_enabled);
    }

    #[test]
    fn prev_and_next_disable_at_the_ends() {
        let first = pager_controls(1, 3);
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);

        let last = pager_controls(3, 3);
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);

        let only = pager_controls(1, 1);
        assert!(!only.prev_enabled);
        assert!(!only.next_enabled);
    }

    #[test]
    fn long_run_windows_around_the_current_page() {
        let pager = pager_controls(5, 9);
        assert_eq!(
            numbers(&pager.items),
            vec![Some(1), None, Some(3), Some(4), Some(5), Some(6), Some(7), None, Some(9)]
        );
    }

    #[test]
    fn window_touching_an_end_drops_that_ellipsis() {
        let pager = pager_controls(2, 9);
        assert_eq!(
            numbers(&pager.items),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(9)]
        );

        let pager = pager_controls(8, 9);
        assert_eq!(
            numbers(&pager.items),
            vec![Some(1), None, Some(6), Some(7), Some(8), Some(9)]
        );
    }

    #[test]
    fn adjacent_boundary_skips_ellipsis_but_keeps_the_end_page() {
        // start == 2: page 1 is appended without a leading ellipsis.
        let pager = pager_controls(4, 9);
        assert_eq!(
            numbers(&pager.items),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), None, Some(9)]
        );
    }

    #[test]
    fn range_label_covers_all_three_shapes() {
        assert_eq!(range_label(0, 0, 1, 4, false), "No alumni to display");
        assert_eq!(range_label(1, 1, 1, 4, false), "Showing 1-1 of 1 alumni");
        assert_eq!(range_label(5, 5, 2, 4, false), "Showing 5-5 of 5 alumni");
        assert_eq!(
            range_label(1, 2, 1, 4, true),
            "Showing 1 of 2 alumni (filtered)"
        );
    }
}
