// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::OffsetDateTime;

use crate::fields::initials;
use crate::filter::compute_visibility;
use crate::forms::{DraftIssues, RecordDraft, ValidDraft};
use crate::ids::AlumniId;
use crate::model::{AlumniRecord, FilterState, Notice, SelectorFilter, Severity};
use crate::page::{PagerControls, clamp_page, page_slice, pager_controls, range_label, total_pages};
use crate::select::{Selection, SelectionSummary};

/// External presentation collaborator. Rendering is synchronous from the
/// controller's point of view; what the renderer does with the frame is its
/// own business.
pub trait Renderer {
    fn render(&mut self, frame: &ViewFrame);
}

/// External message collaborator. Owns display and dismissal timing.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// The full surface the controller pushes into. Blanket-implemented so any
/// type with both halves qualifies.
pub trait ViewPort: Renderer + Notifier {}

impl<T: Renderer + Notifier> ViewPort for T {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    Validation(DraftIssues),
    /// Update requires exactly one selected row; none are.
    NoSelection,
    /// Update requires exactly one selected row; several are.
    MultipleSelected(usize),
    /// Bulk delete invoked with nothing selected.
    EmptyDelete,
    InvalidPageSize,
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(issues) => issues.fmt(f),
            Self::NoSelection => {
                f.write_str("Please select at least one alumni record to update")
            }
            Self::MultipleSelected(_) => {
                f.write_str("Please select only one alumni record to update")
            }
            Self::EmptyDelete => {
                f.write_str("Please select at least one alumni record to delete")
            }
            Self::InvalidPageSize => f.write_str("Records per page must be at least 1"),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<DraftIssues> for ViewError {
    fn from(issues: DraftIssues) -> Self {
        Self::Validation(issues)
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: AlumniId,
    pub code: String,
    pub initials: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub badge: &'static str,
    pub year: i32,
    pub job_title: String,
    pub company: String,
    pub selected: bool,
}

/// Everything the renderer needs for one paint: the current page's rows, the
/// pagination controls, the range line, and the selection summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFrame {
    pub rows: Vec<RowView>,
    pub pager: PagerControls,
    pub range_label: String,
    pub summary: SelectionSummary,
    pub total_records: usize,
    pub visible_count: usize,
}

/// The tabular view controller. Owns the record store, the filter state, the
/// pagination state, and the selection tracker, and keeps them consistent
/// across every mutation. The visibility list is derived: recomputed from
/// store + filter after each change, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    records: Vec<AlumniRecord>,
    next_seq: i64,
    filter: FilterState,
    page_size: usize,
    current_page: usize,
    selection: Selection,
    visible: Vec<AlumniId>,
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self::with_records(Vec::new(), page_size)
    }

    /// Builds the controller over records loaded by a collaborator. The id
    /// sequence continues past the highest loaded id.
    pub fn with_records(records: Vec<AlumniRecord>, page_size: usize) -> Self {
        let next_seq = records.iter().map(|r| r.id.get()).max().unwrap_or(0) + 1;
        let mut view = Self {
            records,
            next_seq,
            filter: FilterState::default(),
            page_size: page_size.max(1),
            current_page: 1,
            selection: Selection::default(),
            visible: Vec::new(),
        };
        view.refresh();
        view
    }

    // Derived state is rebuilt here after every mutation, before control
    // returns to the caller and before anything renders.
    fn refresh(&mut self) {
        self.visible = compute_visibility(&self.records, &self.filter);
        self.current_page = clamp_page(self.current_page, self.visible.len(), self.page_size);
    }

    pub fn frame(&self) -> ViewFrame {
        let page_ids = page_slice(&self.visible, self.current_page, self.page_size);
        let rows = page_ids
            .iter()
            .filter_map(|id| self.record(*id))
            .map(|record| RowView {
                id: record.id,
                code: record.id.code(),
                initials: initials(&record.name),
                name: record.name.clone(),
                email: record.email.clone(),
                department: record.department.as_str().to_owned(),
                badge: record.department.badge(),
                year: record.year,
                job_title: record.job_title.clone(),
                company: record.company.clone(),
                selected: self.selection.is_selected(record.id),
            })
            .collect();

        ViewFrame {
            rows,
            pager: pager_controls(
                self.current_page,
                total_pages(self.visible.len(), self.page_size),
            ),
            range_label: range_label(
                self.visible.len(),
                self.records.len(),
                self.current_page,
                self.page_size,
                self.filter.is_restricted(),
            ),
            summary: self.selection.summary(page_slice(
                &self.visible,
                self.current_page,
                self.page_size,
            )),
            total_records: self.records.len(),
            visible_count: self.visible.len(),
        }
    }

    fn emit(&self, ui: &mut impl ViewPort) {
        ui.render(&self.frame());
    }

    fn reject(&self, error: ViewError, ui: &mut impl ViewPort) -> ViewError {
        ui.notify(Notice::new(Severity::Error, error.to_string()));
        error
    }

    /// Validates the draft, assigns the next sequential identity, appends,
    /// and re-derives visibility and pagination. Nothing mutates on failure.
    pub fn add_record(
        &mut self,
        draft: &RecordDraft,
        ui: &mut impl ViewPort,
    ) -> Result<AlumniId, ViewError> {
        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(issues) => return Err(self.reject(issues.into(), ui)),
        };

        let id = AlumniId::new(self.next_seq);
        self.next_seq += 1;
        let now = OffsetDateTime::now_utc();
        self.records.push(apply_draft(id, valid, now, now));
        self.refresh();
        self.emit(ui);
        ui.notify(Notice::new(Severity::Success, "Alumni added successfully!"));
        Ok(id)
    }

    /// Overwrites the single selected record in place. The identity never
    /// changes; the record's own selection is cleared; the record may leave
    /// the visible set if the edit no longer matches the active filters.
    pub fn update_selected(
        &mut self,
        draft: &RecordDraft,
        ui: &mut impl ViewPort,
    ) -> Result<AlumniId, ViewError> {
        let id = match self.selection.sole() {
            Some(id) => id,
            None if self.selection.is_empty() => {
                return Err(self.reject(ViewError::NoSelection, ui));
            }
            None => {
                return Err(self.reject(ViewError::MultipleSelected(self.selection.len()), ui));
            }
        };

        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(issues) => return Err(self.reject(issues.into(), ui)),
        };

        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .expect("selected id always exists in the store");
        let created_at = record.created_at;
        *record = apply_draft(id, valid, created_at, OffsetDateTime::now_utc());

        self.selection.deselect(id);
        self.refresh();
        self.emit(ui);
        ui.notify(Notice::new(Severity::Success, "Alumni updated successfully!"));
        Ok(id)
    }

    /// Removes every listed record from the store and the selection in one
    /// step; unknown ids are silently ignored. Pagination is re-clamped
    /// before the frame is emitted, so no intermediate state ever renders.
    pub fn delete_records(
        &mut self,
        ids: &[AlumniId],
        ui: &mut impl ViewPort,
    ) -> Result<usize, ViewError> {
        if ids.is_empty() {
            return Err(self.reject(ViewError::EmptyDelete, ui));
        }

        let before = self.records.len();
        self.records.retain(|record| !ids.contains(&record.id));
        let removed = before - self.records.len();
        for id in ids {
            self.selection.purge(*id);
        }
        self.refresh();
        self.emit(ui);

        if removed > 0 {
            let message = if removed == 1 {
                "Alumni record deleted successfully!"
            } else {
                "Selected alumni records deleted successfully!"
            };
            ui.notify(Notice::new(Severity::Success, message));
        }
        Ok(removed)
    }

    pub fn delete_selected(&mut self, ui: &mut impl ViewPort) -> Result<usize, ViewError> {
        let ids = self.selection.ids();
        self.delete_records(&ids, ui)
    }

    /// Per-row delete affordance.
    pub fn delete_row(&mut self, id: AlumniId, ui: &mut impl ViewPort) -> Result<usize, ViewError> {
        self.delete_records(&[id], ui)
    }

    /// Empties the store and the selection (the "clear all data" action).
    pub fn clear_all_records(&mut self, ui: &mut impl ViewPort) {
        self.records.clear();
        self.selection.clear();
        self.refresh();
        self.emit(ui);
        ui.notify(Notice::new(Severity::Success, "All alumni data cleared!"));
    }

    /// Replaces the store wholesale (restore-from-backup path). Selection is
    /// dropped; the id sequence continues past the highest restored id.
    pub fn replace_records(&mut self, records: Vec<AlumniRecord>, ui: &mut impl ViewPort) {
        self.next_seq = records.iter().map(|r| r.id.get()).max().unwrap_or(0) + 1;
        self.records = records;
        self.selection.clear();
        self.current_page = 1;
        self.refresh();
        self.emit(ui);
    }

    // Filter changes reset to page 1 and leave the selection alone: a record
    // selected while filtered out stays selected and re-appears selected
    // when the filter is relaxed.

    pub fn set_search(&mut self, text: impl Into<String>, ui: &mut impl ViewPort) {
        self.filter.search = text.into();
        self.current_page = 1;
        self.refresh();
        self.emit(ui);
    }

    pub fn set_department_filter(&mut self, selector: SelectorFilter, ui: &mut impl ViewPort) {
        self.filter.department = selector;
        self.current_page = 1;
        self.refresh();
        self.emit(ui);
    }

    pub fn set_year_filter(&mut self, selector: SelectorFilter, ui: &mut impl ViewPort) {
        self.filter.year = selector;
        self.current_page = 1;
        self.refresh();
        self.emit(ui);
    }

    pub fn set_page_size(&mut self, size: usize, ui: &mut impl ViewPort) -> Result<(), ViewError> {
        if size == 0 {
            return Err(self.reject(ViewError::InvalidPageSize, ui));
        }
        self.page_size = size;
        self.current_page = 1;
        self.refresh();
        self.emit(ui);
        Ok(())
    }

    /// Out-of-range requests are a silent no-op: the effective page is
    /// always the clamped value.
    pub fn go_to_page(&mut self, page: usize, ui: &mut impl ViewPort) {
        let total = total_pages(self.visible.len(), self.page_size);
        if (1..=total).contains(&page) {
            self.current_page = page;
        }
        self.refresh();
        self.emit(ui);
    }

    pub fn next_page(&mut self, ui: &mut impl ViewPort) {
        self.go_to_page(self.current_page + 1, ui);
    }

    pub fn prev_page(&mut self, ui: &mut impl ViewPort) {
        self.go_to_page(self.current_page.saturating_sub(1), ui);
    }

    // Selection mutations re-render synchronously so the checkbox column,
    // header tri-state, and delete button never lag the tracker.

    pub fn toggle_row(&mut self, id: AlumniId, ui: &mut impl ViewPort) {
        if self.record(id).is_some() {
            self.selection.toggle(id);
        }
        self.emit(ui);
    }

    /// Header checkbox: select or deselect the current page's rows only.
    pub fn set_all_visible(&mut self, checked: bool, ui: &mut impl ViewPort) {
        let page_ids: Vec<AlumniId> =
            page_slice(&self.visible, self.current_page, self.page_size).to_vec();
        if checked {
            self.selection.select_all(&page_ids);
        } else {
            self.selection.deselect_all(&page_ids);
        }
        self.emit(ui);
    }

    pub fn clear_selection(&mut self, ui: &mut impl ViewPort) {
        self.selection.clear();
        self.emit(ui);
    }

    // Read surface.

    pub fn records(&self) -> &[AlumniRecord] {
        &self.records
    }

    pub fn record(&self, id: AlumniId) -> Option<&AlumniRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn visible_ids(&self) -> &[AlumniId] {
        &self.visible
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_selected(&self, id: AlumniId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selected_ids(&self) -> Vec<AlumniId> {
        self.selection.ids()
    }

    /// Draft pre-filled from the single selected record, for the update form.
    pub fn draft_of_selected(&self) -> Result<RecordDraft, ViewError> {
        match self.selection.sole() {
            Some(id) => {
                let record = self
                    .record(id)
                    .expect("selected id always exists in the store");
                Ok(RecordDraft::from_record(record))
            }
            None if self.selection.is_empty() => Err(ViewError::NoSelection),
            None => Err(ViewError::MultipleSelected(self.selection.len())),
        }
    }

    /// Dropdown options: the fixed departments plus any free-text ones
    /// present in the store.
    pub fn department_options(&self) -> Vec<String> {
        let mut options: Vec<String> = crate::model::Department::FIXED
            .iter()
            .map(|d| d.as_str().to_owned())
            .collect();
        for record in &self.records {
            let label = record.department.as_str();
            if !options.iter().any(|known| known == label) {
                options.push(label.to_owned());
            }
        }
        options
    }

    /// Distinct graduation years present in the store, newest first.
    pub fn year_options(&self) -> Vec<String> {
        let mut years: Vec<i32> = self.records.iter().map(|record| record.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years.into_iter().map(|year| year.to_string()).collect()
    }
}

fn apply_draft(
    id: AlumniId,
    valid: ValidDraft,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
) -> AlumniRecord {
    AlumniRecord {
        id,
        name: valid.name,
        email: valid.email,
        department: valid.department,
        year: valid.year,
        job_title: valid.job_title,
        company: valid.company,
        created_at,
        updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::{Notifier, Renderer, TableView, ViewError, ViewFrame};
    use crate::forms::RecordDraft;
    use crate::ids::AlumniId;
    use crate::model::{Notice, SelectorFilter, Severity};
    use crate::page::total_pages;

    /// Captures everything the controller pushes out, in order.
    #[derive(Default)]
    struct RecordingPort {
        frames: Vec<ViewFrame>,
        notices: Vec<Notice>,
    }

    impl Renderer for RecordingPort {
        fn render(&mut self, frame: &ViewFrame) {
            self.frames.push(frame.clone());
        }
    }

    impl Notifier for RecordingPort {
        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    impl RecordingPort {
        fn last_frame(&self) -> &ViewFrame {
            self.frames.last().expect("at least one frame rendered")
        }
    }

    fn draft(name: &str, email: &str, department: &str, year: &str) -> RecordDraft {
        RecordDraft {
            name: name.to_owned(),
            email: email.to_owned(),
            department: department.to_owned(),
            year: year.to_owned(),
            job_title: String::new(),
            company: String::new(),
        }
    }

    fn seeded(count: usize, page_size: usize) -> (TableView, RecordingPort) {
        let mut view = TableView::new(page_size);
        let mut ui = RecordingPort::default();
        for index in 0..count {
            view.add_record(
                &draft(
                    &format!("Person {}", index + 1),
                    &format!("p{}@alumni.example.edu", index + 1),
                    "Computer Science",
                    "2020",
                ),
                &mut ui,
            )
            .expect("seed record should validate");
        }
        (view, ui)
    }

    #[test]
    fn add_to_empty_store_assigns_first_code_and_renders_one_row() {
        let mut view = TableView::new(4);
        let mut ui = RecordingPort::default();

        let id = view
            .add_record(
                &draft("Ann Lee", "a@x.com", "Computer Science", "2020"),
                &mut ui,
            )
            .expect("add should succeed");

        assert_eq!(id.code(), "001");
        assert_eq!(view.records().len(), 1);
        assert_eq!(view.visible_ids().len(), 1);

        let frame = ui.last_frame();
        assert_eq!(frame.rows.len(), 1);
        assert_eq!(frame.rows[0].code, "001");
        assert_eq!(frame.rows[0].initials, "AL");
        assert_eq!(frame.range_label, "Showing 1-1 of 1 alumni");
        assert_eq!(
            ui.notices.last().map(|n| n.severity),
            Some(Severity::Success)
        );
    }

    #[test]
    fn five_records_page_four_paginate_and_clamp() {
        let (mut view, mut ui) = seeded(5, 4);
        assert_eq!(total_pages(view.visible_ids().len(), view.page_size()), 2);

        let frame = ui.last_frame();
        assert_eq!(frame.rows.len(), 4);
        assert_eq!(frame.rows[0].code, "001");

        view.go_to_page(2, &mut ui);
        let frame = ui.last_frame();
        assert_eq!(frame.rows.len(), 1);
        assert_eq!(frame.rows[0].code, "005");

        // Out-of-range request is a silent no-op on the effective page.
        view.go_to_page(99, &mut ui);
        assert_eq!(view.current_page(), 2);
        assert_eq!(ui.last_frame().rows[0].code, "005");
    }

    #[test]
    fn search_resets_page_and_preserves_hidden_selection() {
        let mut view = TableView::new(4);
        let mut ui = RecordingPort::default();
        let lee = view
            .add_record(
                &draft("Ann Lee", "a@x.com", "Computer Science", "2020"),
                &mut ui,
            )
            .expect("add");
        let diaz = view
            .add_record(
                &draft("Bo Diaz", "b@x.com", "Data Science", "2019"),
                &mut ui,
            )
            .expect("add");

        view.toggle_row(diaz, &mut ui);
        view.go_to_page(1, &mut ui);

        view.set_search("lee", &mut ui);
        assert_eq!(view.visible_ids(), &[lee]);
        assert_eq!(view.current_page(), 1);

        // The hidden record stays selected but is excluded from the summary.
        assert!(view.is_selected(diaz));
        let frame = ui.last_frame();
        assert_eq!(frame.summary.checked_count, 0);
        assert_eq!(frame.summary.selected_total, 1);

        // Relaxing the filter brings it back, still selected.
        view.set_search("", &mut ui);
        let frame = ui.last_frame();
        assert_eq!(frame.summary.checked_count, 1);
    }

    #[test]
    fn update_preconditions_are_distinct_and_mutate_nothing() {
        let (mut view, mut ui) = seeded(3, 4);
        let before = view.records().to_vec();

        let err = view
            .update_selected(&draft("X", "x@x.com", "Data Science", "2001"), &mut ui)
            .expect_err("no selection should fail");
        assert_eq!(err, ViewError::NoSelection);

        view.toggle_row(AlumniId::new(1), &mut ui);
        view.toggle_row(AlumniId::new(2), &mut ui);
        let err = view
            .update_selected(&draft("X", "x@x.com", "Data Science", "2001"), &mut ui)
            .expect_err("multi selection should fail");
        assert_eq!(err, ViewError::MultipleSelected(2));

        assert_eq!(view.records(), &before[..]);
    }

    #[test]
    fn invalid_draft_names_missing_fields_and_leaves_store_unchanged() {
        let mut view = TableView::new(4);
        let mut ui = RecordingPort::default();

        let err = view
            .add_record(&draft("Bo", "not-an-email", "", ""), &mut ui)
            .expect_err("invalid draft should fail");
        let ViewError::Validation(issues) = err else {
            panic!("expected validation error");
        };
        assert_eq!(issues.missing, vec!["department", "year"]);
        assert!(issues.invalid_email);
        assert!(view.records().is_empty());

        let notice = ui.notices.last().expect("error notice");
        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.message.contains("department, year"));
    }

    #[test]
    fn deleting_selected_records_purges_selection_in_the_same_operation() {
        let (mut view, mut ui) = seeded(3, 4);
        view.toggle_row(AlumniId::new(2), &mut ui);

        let removed = view.delete_selected(&mut ui).expect("delete should succeed");
        assert_eq!(removed, 1);
        assert_eq!(view.records().len(), 2);
        assert!(view.selected_ids().is_empty());

        // The frame emitted by the delete already reflects both removals.
        let frame = ui.last_frame();
        assert_eq!(frame.summary.checked_count, 0);
        assert_eq!(frame.summary.selected_total, 0);
        assert!(frame.rows.iter().all(|row| row.code != "002"));
    }

    #[test]
    fn delete_ignores_unknown_ids_and_rejects_empty_sets() {
        let (mut view, mut ui) = seeded(2, 4);

        let err = view.delete_records(&[], &mut ui).expect_err("empty set");
        assert_eq!(err, ViewError::EmptyDelete);

        let removed = view
            .delete_records(&[AlumniId::new(99)], &mut ui)
            .expect("unknown ids are ignored");
        assert_eq!(removed, 0);
        assert_eq!(view.records().len(), 2);
    }

    #[test]
    fn update_can_hide_a_record_without_deleting_it() {
        let (mut view, mut ui) = seeded(2, 4);
        view.set_department_filter(
            SelectorFilter::Exact("Computer Science".to_owned()),
            &mut ui,
        );
        assert_eq!(view.visible_ids().len(), 2);

        view.toggle_row(AlumniId::new(1), &mut ui);
        view.update_selected(
            &draft("Person 1", "p1@alumni.example.edu", "Civil Engineering", "2020"),
            &mut ui,
        )
        .expect("update should succeed");

        // Gone from the visible set, still in the store, no longer selected.
        assert_eq!(view.visible_ids(), &[AlumniId::new(2)]);
        assert_eq!(view.records().len(), 2);
        assert!(!view.is_selected(AlumniId::new(1)));
    }

    #[test]
    fn page_stays_in_range_after_any_mutation() {
        let (mut view, mut ui) = seeded(9, 4);
        view.go_to_page(3, &mut ui);
        assert_eq!(view.current_page(), 3);

        // Shrinking the visible set below page 3 resets to page 1.
        let ids: Vec<AlumniId> = (5..=9).map(AlumniId::new).collect();
        view.delete_records(&ids, &mut ui).expect("delete");
        assert_eq!(view.current_page(), 1);
        let total = total_pages(view.visible_ids().len(), view.page_size());
        assert!(view.current_page() <= total);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let (mut view, mut ui) = seeded(6, 4);
        view.go_to_page(2, &mut ui);

        view.set_page_size(10, &mut ui).expect("valid page size");
        assert_eq!(view.current_page(), 1);
        assert_eq!(ui.last_frame().rows.len(), 6);

        let err = view.set_page_size(0, &mut ui).expect_err("zero page size");
        assert_eq!(err, ViewError::InvalidPageSize);
        assert_eq!(view.page_size(), 10);
    }

    #[test]
    fn select_all_applies_to_the_current_page_only() {
        let (mut view, mut ui) = seeded(5, 4);
        view.set_all_visible(true, &mut ui);
        assert_eq!(view.selected_ids().len(), 4);

        view.go_to_page(2, &mut ui);
        let frame = ui.last_frame();
        // Page 2's single row is unselected; the header checkbox follows the
        // visible page, not the store.
        assert!(!frame.summary.is_all_checked);
        assert_eq!(frame.summary.checked_count, 0);
        assert_eq!(frame.summary.selected_total, 4);

        view.set_all_visible(true, &mut ui);
        assert_eq!(view.selected_ids().len(), 5);

        view.set_all_visible(false, &mut ui);
        assert_eq!(view.selected_ids().len(), 4);
    }

    #[test]
    fn selection_toggle_rerenders_synchronously() {
        let (mut view, mut ui) = seeded(2, 4);
        let frames_before = ui.frames.len();

        view.toggle_row(AlumniId::new(1), &mut ui);
        assert_eq!(ui.frames.len(), frames_before + 1);
        let frame = ui.last_frame();
        assert!(frame.rows[0].selected);
        assert!(frame.summary.is_indeterminate);
        assert_eq!(frame.summary.delete_label, "Delete (1)");
    }

    #[test]
    fn draft_of_selected_prefills_the_update_form() {
        let (mut view, mut ui) = seeded(2, 4);
        assert_eq!(view.draft_of_selected(), Err(ViewError::NoSelection));

        view.toggle_row(AlumniId::new(2), &mut ui);
        let draft = view.draft_of_selected().expect("one row selected");
        assert_eq!(draft.name, "Person 2");
        assert_eq!(draft.year, "2020");
    }

    #[test]
    fn clear_all_records_empties_store_and_selection() {
        let (mut view, mut ui) = seeded(3, 4);
        view.set_all_visible(true, &mut ui);

        view.clear_all_records(&mut ui);
        assert!(view.records().is_empty());
        assert!(view.selected_ids().is_empty());
        assert_eq!(ui.last_frame().range_label, "No alumni to display");

        // Identity is never reused, even after a wipe.
        let id = view
            .add_record(
                &draft("New Person", "n@x.com", "Data Science", "2021"),
                &mut ui,
            )
            .expect("add after clear");
        assert_eq!(id, AlumniId::new(4));
    }

    #[test]
    fn filtered_range_label_reports_match_count() {
        let (mut view, mut ui) = seeded(3, 4);
        view.set_search("person 1", &mut ui);
        assert_eq!(
            ui.last_frame().range_label,
            "Showing 1 of 3 alumni (filtered)"
        );

        view.set_search("no such person", &mut ui);
        assert_eq!(ui.last_frame().range_label, "No alumni to display");
    }

    #[test]
    fn year_and_department_options_reflect_the_store() {
        let mut view = TableView::new(4);
        let mut ui = RecordingPort::default();
        view.add_record(
            &draft("Ann Lee", "a@x.com", "Computer Science", "2020"),
            &mut ui,
        )
        .expect("add");
        view.add_record(
            &draft("Bo Diaz", "b@x.com", "Naval Architecture", "2018"),
            &mut ui,
        )
        .expect("add");

        let departments = view.department_options();
        assert!(departments.contains(&"Naval Architecture".to_owned()));
        assert_eq!(view.year_options(), vec!["2020", "2018"]);
    }
}
