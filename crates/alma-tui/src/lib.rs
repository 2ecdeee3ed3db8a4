// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use alma_app::{
    AlumniId, AlumniRecord, Notice, Notifier, PagerControls, PagerItem, RecordDraft, Renderer,
    SelectorFilter, Severity, TableView, ViewFrame,
};

const NOTICE_DISMISS_SECS: u64 = 5;
const FORM_FIELD_COUNT: usize = 6;

/// Persistence and file-export collaborator behind the controller. All calls
/// are fire-and-forget from the controller's perspective: failures surface
/// as notices and never touch the in-memory state.
pub trait AppRuntime {
    fn persist_insert(&mut self, record: &AlumniRecord) -> Result<()>;
    fn persist_update(&mut self, record: &AlumniRecord) -> Result<()>;
    fn persist_delete(&mut self, ids: &[AlumniId]) -> Result<usize>;
    fn persist_clear(&mut self) -> Result<()>;
    fn save_page_size(&mut self, size: usize) -> Result<()>;
    /// Writes the CSV export and returns the path written.
    fn export_csv(&mut self, records: &[AlumniRecord]) -> Result<PathBuf>;
    /// Writes the JSON backup and returns the path written.
    fn write_backup(&mut self, records: &[AlumniRecord]) -> Result<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearNotice { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormMode {
    Add,
    Update,
}

impl FormMode {
    const fn title(self) -> &'static str {
        match self {
            Self::Add => "add alumni",
            Self::Update => "update alumni",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormUiState {
    mode: FormMode,
    draft: RecordDraft,
    focus: usize,
}

impl FormUiState {
    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.draft.name,
            1 => &mut self.draft.email,
            2 => &mut self.draft.department,
            3 => &mut self.draft.year,
            4 => &mut self.draft.job_title,
            _ => &mut self.draft.company,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmAction {
    DeleteSelected,
    DeleteRow(AlumniId),
    ClearAll,
}

impl ConfirmAction {
    fn prompt(self, selected: usize) -> String {
        match self {
            Self::DeleteSelected => format!(
                "Are you sure you want to delete {selected} alumni record(s)? [y/n]"
            ),
            Self::DeleteRow(_) => {
                "Are you sure you want to delete this alumni record? [y/n]".to_owned()
            }
            Self::ClearAll => {
                "Are you sure you want to clear all alumni data? This action cannot be undone. [y/n]"
                    .to_owned()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Overlay {
    #[default]
    None,
    Form(FormUiState),
    Settings {
        input: String,
    },
    Confirm(ConfirmAction),
    Help,
}

/// Everything the draw pass reads. The frame inside is whatever the
/// controller last pushed through its Renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewData {
    frame: ViewFrame,
    cursor: usize,
    search_focus: bool,
    overlay: Overlay,
    notice: Option<Notice>,
    notice_token: u64,
    department_index: Option<usize>,
    year_index: Option<usize>,
}

impl ViewData {
    fn new(frame: ViewFrame) -> Self {
        Self {
            frame,
            cursor: 0,
            search_focus: false,
            overlay: Overlay::None,
            notice: None,
            notice_token: 0,
            department_index: None,
            year_index: None,
        }
    }

    fn clamp_cursor(&mut self) {
        let last = self.frame.rows.len().saturating_sub(1);
        if self.cursor > last {
            self.cursor = last;
        }
    }

    fn cursor_id(&self) -> Option<AlumniId> {
        self.frame.rows.get(self.cursor).map(|row| row.id)
    }
}

/// Adapter the controller renders and notifies into. Frames land in the
/// shared view data; notices get a fresh token and a timed clear.
struct UiBridge<'a> {
    view_data: &'a mut ViewData,
    internal_tx: &'a Sender<InternalEvent>,
}

impl Renderer for UiBridge<'_> {
    fn render(&mut self, frame: &ViewFrame) {
        self.view_data.frame = frame.clone();
        self.view_data.clamp_cursor();
    }
}

impl Notifier for UiBridge<'_> {
    fn notify(&mut self, notice: Notice) {
        self.view_data.notice = Some(notice);
        self.view_data.notice_token = self.view_data.notice_token.saturating_add(1);
        schedule_notice_clear(self.internal_tx, self.view_data.notice_token);
    }
}

fn schedule_notice_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(NOTICE_DISMISS_SECS));
        let _ = sender.send(InternalEvent::ClearNotice { token });
    });
}

fn emit_notice(
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    severity: Severity,
    message: impl Into<String>,
) {
    let mut bridge = UiBridge {
        view_data: &mut *view_data,
        internal_tx,
    };
    bridge.notify(Notice::new(severity, message));
}

pub fn run_app<R: AppRuntime>(view: &mut TableView, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(view.frame());
    let (internal_tx, internal_rx) = mpsc::channel();

    let mut result = Ok(());
    loop {
        process_internal_events(&mut view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(view, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(view_data: &mut ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearNotice { token } if token == view_data.notice_token => {
                view_data.notice = None;
            }
            InternalEvent::ClearNotice { .. } => {}
        }
    }
}

/// Returns true when the app should quit.
fn handle_key_event<R: AppRuntime>(
    view: &mut TableView,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match std::mem::take(&mut view_data.overlay) {
        Overlay::Help => {
            if !matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                view_data.overlay = Overlay::Help;
            }
            false
        }
        Overlay::Form(form) => {
            handle_form_key(view, runtime, view_data, internal_tx, form, key);
            false
        }
        Overlay::Settings { input } => {
            handle_settings_key(view, runtime, view_data, internal_tx, input, key);
            false
        }
        Overlay::Confirm(action) => {
            handle_confirm_key(view, runtime, view_data, internal_tx, action, key);
            false
        }
        Overlay::None => {
            if view_data.search_focus {
                handle_search_key(view, view_data, internal_tx, key);
                false
            } else {
                handle_table_key(view, runtime, view_data, internal_tx, key)
            }
        }
    }
}

fn handle_search_key(
    view: &mut TableView,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let mut bridge = UiBridge {
        view_data: &mut *view_data,
        internal_tx,
    };
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            bridge.view_data.search_focus = false;
        }
        KeyCode::Backspace => {
            let mut text = view.filter().search.clone();
            text.pop();
            view.set_search(text, &mut bridge);
        }
        KeyCode::Char(ch) => {
            let mut text = view.filter().search.clone();
            text.push(ch);
            view.set_search(text, &mut bridge);
        }
        _ => {}
    }
}

fn handle_form_key<R: AppRuntime>(
    view: &mut TableView,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mut form: FormUiState,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {}
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % FORM_FIELD_COUNT;
            view_data.overlay = Overlay::Form(form);
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = (form.focus + FORM_FIELD_COUNT - 1) % FORM_FIELD_COUNT;
            view_data.overlay = Overlay::Form(form);
        }
        KeyCode::Backspace => {
            form.field_mut().pop();
            view_data.overlay = Overlay::Form(form);
        }
        KeyCode::Char(ch) => {
            form.field_mut().push(ch);
            view_data.overlay = Overlay::Form(form);
        }
        KeyCode::Enter => {
            let mut bridge = UiBridge {
                view_data: &mut *view_data,
                internal_tx,
            };
            let outcome = match form.mode {
                FormMode::Add => view.add_record(&form.draft, &mut bridge),
                FormMode::Update => view.update_selected(&form.draft, &mut bridge),
            };
            match outcome {
                Ok(id) => {
                    let record = view
                        .record(id)
                        .expect("record exists after add/update")
                        .clone();
                    let persisted = match form.mode {
                        FormMode::Add => runtime.persist_insert(&record),
                        FormMode::Update => runtime.persist_update(&record),
                    };
                    if let Err(error) = persisted {
                        emit_notice(
                            view_data,
                            internal_tx,
                            Severity::Error,
                            format!("save failed: {error:#}"),
                        );
                    }
                }
                Err(_) => {
                    // Validation notice already emitted; keep the form open
                    // so the fields can be corrected.
                    view_data.overlay = Overlay::Form(form);
                }
            }
        }
        _ => {
            view_data.overlay = Overlay::Form(form);
        }
    }
}

fn handle_settings_key<R: AppRuntime>(
    view: &mut TableView,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mut input: String,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {}
        KeyCode::Backspace => {
            input.pop();
            view_data.overlay = Overlay::Settings { input };
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            input.push(ch);
            view_data.overlay = Overlay::Settings { input };
        }
        KeyCode::Enter => {
            let parsed = input.trim().parse::<usize>().unwrap_or(0);
            let mut bridge = UiBridge {
                view_data: &mut *view_data,
                internal_tx,
            };
            match view.set_page_size(parsed, &mut bridge) {
                Ok(()) => {
                    if let Err(error) = runtime.save_page_size(parsed) {
                        emit_notice(
                            view_data,
                            internal_tx,
                            Severity::Error,
                            format!("save failed: {error:#}"),
                        );
                    } else {
                        emit_notice(
                            view_data,
                            internal_tx,
                            Severity::Success,
                            "Settings saved successfully!",
                        );
                    }
                }
                Err(_) => {
                    view_data.overlay = Overlay::Settings { input };
                }
            }
        }
        _ => {
            view_data.overlay = Overlay::Settings { input };
        }
    }
}

fn handle_confirm_key<R: AppRuntime>(
    view: &mut TableView,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    action: ConfirmAction,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let mut bridge = UiBridge {
                view_data: &mut *view_data,
                internal_tx,
            };
            let persisted = match action {
                ConfirmAction::DeleteSelected => {
                    let ids = view.selected_ids();
                    match view.delete_selected(&mut bridge) {
                        Ok(_) => runtime.persist_delete(&ids).map(|_| ()),
                        Err(_) => Ok(()),
                    }
                }
                ConfirmAction::DeleteRow(id) => match view.delete_row(id, &mut bridge) {
                    Ok(_) => runtime.persist_delete(&[id]).map(|_| ()),
                    Err(_) => Ok(()),
                },
                ConfirmAction::ClearAll => {
                    view.clear_all_records(&mut bridge);
                    runtime.persist_clear()
                }
            };
            if let Err(error) = persisted {
                emit_notice(
                    view_data,
                    internal_tx,
                    Severity::Error,
                    format!("save failed: {error:#}"),
                );
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
        _ => {
            view_data.overlay = Overlay::Confirm(action);
        }
    }
}

fn handle_table_key<R: AppRuntime>(
    view: &mut TableView,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let mut bridge = UiBridge {
        view_data: &mut *view_data,
        internal_tx,
    };
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => {
            bridge.view_data.overlay = Overlay::Help;
        }
        (KeyCode::Esc, _) => {
            bridge.view_data.notice = None;
        }
        (KeyCode::Char('/'), _) => {
            bridge.view_data.search_focus = true;
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            let last = bridge.view_data.frame.rows.len().saturating_sub(1);
            if bridge.view_data.cursor < last {
                bridge.view_data.cursor += 1;
            }
        }
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            bridge.view_data.cursor = bridge.view_data.cursor.saturating_sub(1);
        }
        (KeyCode::Char(' '), _) => {
            if let Some(id) = bridge.view_data.cursor_id() {
                view.toggle_row(id, &mut bridge);
            }
        }
        (KeyCode::Char('v'), _) => {
            let all_checked = bridge.view_data.frame.summary.is_all_checked;
            view.set_all_visible(!all_checked, &mut bridge);
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            view.clear_selection(&mut bridge);
        }
        (KeyCode::Right | KeyCode::Char('n'), _) => {
            view.next_page(&mut bridge);
        }
        (KeyCode::Left | KeyCode::Char('p'), _) => {
            view.prev_page(&mut bridge);
        }
        (KeyCode::Char('a'), _) => {
            bridge.view_data.overlay = Overlay::Form(FormUiState {
                mode: FormMode::Add,
                draft: RecordDraft::blank(),
                focus: 0,
            });
        }
        (KeyCode::Char('u'), _) => match view.draft_of_selected() {
            Ok(draft) => {
                bridge.view_data.overlay = Overlay::Form(FormUiState {
                    mode: FormMode::Update,
                    draft,
                    focus: 0,
                });
            }
            Err(error) => {
                bridge.notify(Notice::new(Severity::Error, error.to_string()));
            }
        },
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            if bridge.view_data.frame.summary.delete_enabled {
                bridge.view_data.overlay = Overlay::Confirm(ConfirmAction::DeleteSelected);
            } else {
                bridge.notify(Notice::new(
                    Severity::Error,
                    "Please select at least one alumni record to delete",
                ));
            }
        }
        (KeyCode::Char('x'), _) => {
            if let Some(id) = bridge.view_data.cursor_id() {
                bridge.view_data.overlay = Overlay::Confirm(ConfirmAction::DeleteRow(id));
            }
        }
        (KeyCode::Char('D'), _) => {
            bridge.view_data.overlay = Overlay::Confirm(ConfirmAction::ClearAll);
        }
        (KeyCode::Char('f'), _) => {
            cycle_department_filter(view, bridge.view_data, internal_tx);
        }
        (KeyCode::Char('y'), _) => {
            cycle_year_filter(view, bridge.view_data, internal_tx);
        }
        (KeyCode::Char('s'), _) => {
            bridge.view_data.overlay = Overlay::Settings {
                input: view.page_size().to_string(),
            };
        }
        (KeyCode::Char('e'), _) => match runtime.export_csv(view.records()) {
            Ok(path) => emit_notice(
                view_data,
                internal_tx,
                Severity::Success,
                format!("CSV export completed: {}", path.display()),
            ),
            Err(error) => emit_notice(
                view_data,
                internal_tx,
                Severity::Error,
                format!("CSV export failed: {error:#}"),
            ),
        },
        (KeyCode::Char('b'), _) => match runtime.write_backup(view.records()) {
            Ok(path) => emit_notice(
                view_data,
                internal_tx,
                Severity::Success,
                format!("Backup created successfully: {}", path.display()),
            ),
            Err(error) => emit_notice(
                view_data,
                internal_tx,
                Severity::Error,
                format!("Backup failed: {error:#}"),
            ),
        },
        _ => {}
    }
    false
}

/// Steps department filter through All -> each known department -> All.
fn cycle_department_filter(
    view: &mut TableView,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let options = view.department_options();
    let next = match view_data.department_index {
        None if options.is_empty() => None,
        None => Some(0),
        Some(index) if index + 1 < options.len() => Some(index + 1),
        Some(_) => None,
    };
    view_data.department_index = next;
    let selector = match next {
        Some(index) => SelectorFilter::Exact(options[index].clone()),
        None => SelectorFilter::All,
    };
    let mut bridge = UiBridge {
        view_data: &mut *view_data,
        internal_tx,
    };
    view.set_department_filter(selector, &mut bridge);
}

fn cycle_year_filter(
    view: &mut TableView,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let options = view.year_options();
    let next = match view_data.year_index {
        None if options.is_empty() => None,
        None => Some(0),
        Some(index) if index + 1 < options.len() => Some(index + 1),
        Some(_) => None,
    };
    view_data.year_index = next;
    let selector = match next {
        Some(index) => SelectorFilter::Exact(options[index].clone()),
        None => SelectorFilter::All,
    };
    let mut bridge = UiBridge {
        view_data: &mut *view_data,
        internal_tx,
    };
    view.set_year_filter(selector, &mut bridge);
}

fn render(frame: &mut ratatui::Frame<'_>, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(view_data))
        .block(Block::default().title("alma").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    render_table(frame, layout[1], view_data);

    let pagination = Paragraph::new(pagination_line(&view_data.frame.pager))
        .block(Block::default().borders(Borders::ALL).title(
            view_data.frame.range_label.clone(),
        ));
    frame.render_widget(pagination, layout[2]);

    let status = Paragraph::new(status_text(view_data))
        .style(notice_style(view_data.notice.as_ref().map(|n| n.severity)))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[3]);

    match &view_data.overlay {
        Overlay::None => {}
        Overlay::Form(form) => {
            let area = centered_rect(60, 60, frame.area());
            frame.render_widget(Clear, area);
            let widget = Paragraph::new(form_overlay_text(form)).block(
                Block::default()
                    .title(form.mode.title())
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
            frame.render_widget(widget, area);
        }
        Overlay::Settings { input } => {
            let area = centered_rect(44, 24, frame.area());
            frame.render_widget(Clear, area);
            let widget = Paragraph::new(format!(
                "records per page: {input}_\n\nenter to save, esc to cancel"
            ))
            .block(Block::default().title("settings").borders(Borders::ALL));
            frame.render_widget(widget, area);
        }
        Overlay::Confirm(action) => {
            let area = centered_rect(56, 20, frame.area());
            frame.render_widget(Clear, area);
            let widget = Paragraph::new(action.prompt(view_data.frame.summary.selected_total))
                .block(Block::default().title("confirm").borders(Borders::ALL));
            frame.render_widget(widget, area);
        }
        Overlay::Help => {
            let area = centered_rect(70, 70, frame.area());
            frame.render_widget(Clear, area);
            let widget = Paragraph::new(help_overlay_text())
                .block(Block::default().title("help").borders(Borders::ALL));
            frame.render_widget(widget, area);
        }
    }
}

fn render_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let summary = &view_data.frame.summary;
    let header_mark = if summary.is_all_checked {
        "[x]"
    } else if summary.is_indeterminate {
        "[-]"
    } else {
        "[ ]"
    };

    let header = Row::new(vec![
        Cell::from(header_mark),
        Cell::from("id"),
        Cell::from("name"),
        Cell::from("email"),
        Cell::from("department"),
        Cell::from("year"),
        Cell::from("job title"),
        Cell::from("company"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view_data.frame.rows.iter().enumerate().map(|(index, row)| {
        let mark = if row.selected { "[x]" } else { "[ ]" };
        let mut style = Style::default();
        if row.selected {
            style = style.fg(Color::Yellow);
        }
        if index == view_data.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Row::new(vec![
            Cell::from(mark),
            Cell::from(row.code.clone()),
            Cell::from(format!("{} {}", row.initials, row.name)),
            Cell::from(row.email.clone()),
            Cell::from(format!("[{}] {}", row.badge, row.department)),
            Cell::from(row.year.to_string()),
            Cell::from(placeholder_dash(&row.job_title)),
            Cell::from(placeholder_dash(&row.company)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(16),
        Constraint::Min(20),
        Constraint::Min(16),
        Constraint::Length(5),
        Constraint::Min(12),
        Constraint::Min(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("alumni"));
    frame.render_widget(table, area);

    if view_data.frame.rows.is_empty() {
        let inner = centered_rect(40, 20, area);
        let empty = Paragraph::new("No results found.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
    }
}

fn placeholder_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_owned()
    } else {
        value.to_owned()
    }
}

fn header_text(view_data: &ViewData) -> String {
    format!(
        "search: {} | {}",
        if view_data.search_focus { "editing" } else { "press /" },
        view_data.frame.summary.delete_label,
    )
}

fn status_text(view_data: &ViewData) -> String {
    match &view_data.notice {
        Some(notice) => format!("[{}] {}", notice.severity.as_str(), notice.message),
        None => "a add · u update · d delete · space select · / search · f/y filters · s settings · e export · b backup · ? help · q quit".to_owned(),
    }
}

fn notice_style(severity: Option<Severity>) -> Style {
    match severity {
        Some(Severity::Success) => Style::default().fg(Color::Green),
        Some(Severity::Error) => Style::default().fg(Color::Red),
        Some(Severity::Info) => Style::default().fg(Color::Yellow),
        None => Style::default().fg(Color::DarkGray),
    }
}

/// Text form of the pager descriptor: `Previous | 1 [2] 3 ... 9 | Next`.
/// Disabled ends are dimmed.
fn pagination_line(pager: &PagerControls) -> Line<'static> {
    let mut spans = Vec::new();
    let dim = Style::default().fg(Color::DarkGray);

    spans.push(if pager.prev_enabled {
        Span::raw("Previous")
    } else {
        Span::styled("Previous", dim)
    });
    spans.push(Span::raw(" | "));

    for (index, item) in pager.items.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        match item {
            PagerItem::Page { number, is_current } => {
                if *is_current {
                    spans.push(Span::styled(
                        format!("[{number}]"),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                } else {
                    spans.push(Span::raw(number.to_string()));
                }
            }
            PagerItem::Ellipsis => spans.push(Span::styled("...", dim)),
        }
    }

    spans.push(Span::raw(" | "));
    spans.push(if pager.next_enabled {
        Span::raw("Next")
    } else {
        Span::styled("Next", dim)
    });

    Line::from(spans)
}

fn form_overlay_text(form: &FormUiState) -> String {
    let fields = [
        ("name", &form.draft.name),
        ("email", &form.draft.email),
        ("department", &form.draft.department),
        ("year", &form.draft.year),
        ("job title", &form.draft.job_title),
        ("company", &form.draft.company),
    ];
    let mut out = String::new();
    for (index, (label, value)) in fields.iter().enumerate() {
        let marker = if index == form.focus { ">" } else { " " };
        out.push_str(&format!("{marker} {label:<10} {value}\n"));
    }
    out.push_str("\ntab/arrows move, enter to save, esc to cancel");
    out
}

fn help_overlay_text() -> String {
    [
        "j/k, arrows   move the row cursor",
        "space         toggle row selection",
        "v             select/deselect the visible page",
        "c             clear selection",
        "left/right    previous/next page",
        "/             edit search (enter/esc to leave)",
        "f             cycle department filter",
        "y             cycle year filter",
        "a             add alumni",
        "u             update the selected alumni",
        "d             delete selected (with confirm)",
        "x             delete the row under the cursor",
        "D             clear all records",
        "s             settings (records per page)",
        "e             export CSV",
        "b             write JSON backup",
        "esc           dismiss the status message",
        "q / ctrl-q    quit",
    ]
    .join("\n")
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
