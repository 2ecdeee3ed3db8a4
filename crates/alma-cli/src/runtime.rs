// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use alma_app::{AlumniId, AlumniRecord};
use alma_db::Store;
use anyhow::{Context, Result};
use std::path::PathBuf;
use time::OffsetDateTime;
use time::macros::format_description;

/// Write-through persistence behind the controller. The controller stays
/// authoritative; a failed write surfaces as a notice, never as lost state.
pub struct DbRuntime<'a> {
    store: &'a Store,
    export_dir: PathBuf,
}

impl<'a> DbRuntime<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self::with_export_dir(store, PathBuf::from("."))
    }

    pub fn with_export_dir(store: &'a Store, export_dir: PathBuf) -> Self {
        Self { store, export_dir }
    }
}

impl alma_tui::AppRuntime for DbRuntime<'_> {
    fn persist_insert(&mut self, record: &AlumniRecord) -> Result<()> {
        self.store.insert_record(record)
    }

    fn persist_update(&mut self, record: &AlumniRecord) -> Result<()> {
        self.store.update_record(record)
    }

    fn persist_delete(&mut self, ids: &[AlumniId]) -> Result<usize> {
        self.store.delete_records(ids)
    }

    fn persist_clear(&mut self) -> Result<()> {
        self.store.clear_records()
    }

    fn save_page_size(&mut self, size: usize) -> Result<()> {
        self.store.save_page_size(size)
    }

    fn export_csv(&mut self, records: &[AlumniRecord]) -> Result<PathBuf> {
        let path = self.export_dir.join("alumni_data.csv");
        alma_db::write_csv(&path, records)?;
        Ok(path)
    }

    fn write_backup(&mut self, records: &[AlumniRecord]) -> Result<PathBuf> {
        let stamp = OffsetDateTime::now_utc()
            .format(&format_description!("[year]-[month]-[day]"))
            .context("format backup date")?;
        let path = self.export_dir.join(format!("alumni_backup_{stamp}.json"));
        alma_db::write_backup(&path, records)?;
        Ok(path)
    }
}
