// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use alma_app::{AlumniId, AlumniRecord, DEFAULT_PAGE_SIZE, Department, SettingKey};
use anyhow::{Context, Result, anyhow, bail};
use rusqlite::{Connection, OptionalExtension, params};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub const APP_NAME: &str = "alma";

const CSV_HEADER: &str = "ID,Name,Email,Department,Year,Job Title,Company";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    (
        "alumni",
        &[
            "id",
            "name",
            "email",
            "department",
            "grad_year",
            "job_title",
            "company",
            "created_at",
            "updated_at",
        ],
    ),
    ("settings", &["key", "value", "updated_at"]),
];

const DEMO_ALUMNI: [(&str, &str, &str, i32, &str, &str); 6] = [
    (
        "Ann Lee",
        "ann.lee@alumni.example.edu",
        "Computer Science",
        2020,
        "Software Engineer",
        "Summit Labs",
    ),
    (
        "Bo Diaz",
        "bo.diaz@alumni.example.edu",
        "Electrical Engineering",
        2019,
        "Hardware Engineer",
        "Cobalt Systems",
    ),
    (
        "Casey Ward",
        "casey.ward@alumni.example.edu",
        "Mechanical Engineering",
        2021,
        "Design Engineer",
        "Granite Works",
    ),
    (
        "Drew Young",
        "drew.young@alumni.example.edu",
        "Civil Engineering",
        2018,
        "Site Engineer",
        "Harbor Group",
    ),
    (
        "Elliot Reed",
        "elliot.reed@alumni.example.edu",
        "Data Science",
        2022,
        "Data Analyst",
        "Beacon Analytics",
    ),
    ("Morgan Hill", "morgan.hill@alumni.example.edu", "Computer Science", 2020, "", ""),
];

/// SQLite persistence collaborator. The controller owns the authoritative
/// in-memory state; this store is the write-through mirror behind it plus
/// the settings table.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let printable = path.to_string_lossy().to_string();
        validate_db_path(&printable)?;
        let conn = Connection::open(path)
            .with_context(|| format!("open database at {}", path.display()))?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn raw_connection(&self) -> &Connection {
        &self.conn
    }

    pub fn bootstrap(&self) -> Result<()> {
        if has_user_tables(&self.conn)? {
            validate_schema(&self.conn)?;
        } else {
            self.conn
                .execute_batch(include_str!("sql/schema.sql"))
                .context("create schema")?;
        }
        Ok(())
    }

    pub fn load_records(&self) -> Result<Vec<AlumniRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT
                  id, name, email, department, grad_year,
                  job_title, company, created_at, updated_at
                FROM alumni
                ORDER BY id ASC
                ",
            )
            .context("prepare alumni query")?;

        let rows = stmt
            .query_map([], |row| {
                let department_raw: String = row.get(3)?;
                let created_at_raw: String = row.get(7)?;
                let updated_at_raw: String = row.get(8)?;

                Ok(AlumniRecord {
                    id: AlumniId::new(row.get(0)?),
                    name: row.get(1)?,
                    email: row.get(2)?,
                    department: Department::parse(&department_raw),
                    year: row.get(4)?,
                    job_title: row.get(5)?,
                    company: row.get(6)?,
                    created_at: parse_datetime(&created_at_raw).map_err(to_sql_error)?,
                    updated_at: parse_datetime(&updated_at_raw).map_err(to_sql_error)?,
                })
            })
            .context("query alumni")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect alumni")
    }

    /// Identities are assigned by the controller, so inserts carry an
    /// explicit id instead of relying on the rowid sequence.
    pub fn insert_record(&self, record: &AlumniRecord) -> Result<()> {
        self.conn
            .execute(
                "
                INSERT INTO alumni (
                  id, name, email, department, grad_year,
                  job_title, company, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ",
                params![
                    record.id.get(),
                    record.name,
                    record.email,
                    record.department.as_str(),
                    record.year,
                    record.job_title,
                    record.company,
                    format_datetime(record.created_at)?,
                    format_datetime(record.updated_at)?,
                ],
            )
            .with_context(|| format!("insert alumni record {}", record.id))?;
        Ok(())
    }

    pub fn update_record(&self, record: &AlumniRecord) -> Result<()> {
        let rows_affected = self
            .conn
            .execute(
                "
                UPDATE alumni
                SET
                  name = ?,
                  email = ?,
                  department = ?,
                  grad_year = ?,
                  job_title = ?,
                  company = ?,
                  updated_at = ?
                WHERE id = ?
                ",
                params![
                    record.name,
                    record.email,
                    record.department.as_str(),
                    record.year,
                    record.job_title,
                    record.company,
                    format_datetime(record.updated_at)?,
                    record.id.get(),
                ],
            )
            .context("update alumni record")?;
        if rows_affected == 0 {
            bail!("alumni record {} not found", record.id);
        }
        Ok(())
    }

    /// Unknown ids are ignored, matching the controller's delete contract.
    pub fn delete_records(&self, ids: &[AlumniId]) -> Result<usize> {
        let mut removed = 0usize;
        for id in ids {
            removed += self
                .conn
                .execute("DELETE FROM alumni WHERE id = ?", params![id.get()])
                .with_context(|| format!("delete alumni record {id}"))?;
        }
        Ok(removed)
    }

    pub fn clear_records(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM alumni", [])
            .context("clear alumni records")?;
        Ok(())
    }

    /// Restore path: replaces the table contents wholesale, ids preserved.
    pub fn replace_all(&self, records: &[AlumniRecord]) -> Result<()> {
        self.clear_records()?;
        for record in records {
            self.insert_record(record)?;
        }
        Ok(())
    }

    pub fn seed_demo_data(&self) -> Result<()> {
        let now = now_rfc3339()?;
        for (index, (name, email, department, year, job_title, company)) in
            DEMO_ALUMNI.iter().enumerate()
        {
            self.conn
                .execute(
                    "
                    INSERT INTO alumni (
                      id, name, email, department, grad_year,
                      job_title, company, created_at, updated_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                    ",
                    params![
                        index as i64 + 1,
                        name,
                        email,
                        department,
                        year,
                        job_title,
                        company,
                        now,
                        now,
                    ],
                )
                .with_context(|| format!("seed demo alumni {name}"))?;
        }
        Ok(())
    }

    fn get_setting_raw(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("read setting {key}"))
    }

    fn put_setting_raw(&self, key: &str, value: &str) -> Result<()> {
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT INTO settings (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at
                ",
                params![key, value, now],
            )
            .with_context(|| format!("upsert setting {key}"))?;
        Ok(())
    }

    /// The persisted page size, or `None` when the setting is absent or
    /// malformed. A bad row in the settings table must never keep the app
    /// from starting.
    pub fn page_size_override(&self) -> Result<Option<usize>> {
        let raw = self.get_setting_raw(SettingKey::TablePageSize.as_str())?;
        Ok(raw
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|size| *size >= 1))
    }

    pub fn load_page_size(&self) -> Result<usize> {
        Ok(self.page_size_override()?.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    pub fn save_page_size(&self, size: usize) -> Result<()> {
        if size == 0 {
            bail!("page size must be positive");
        }
        self.put_setting_raw(SettingKey::TablePageSize.as_str(), &size.to_string())
    }
}

/// CSV of every record, header first. Text fields are quoted with doubled
/// inner quotes.
pub fn export_csv(records: &[AlumniRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            record.id.code(),
            csv_quote(&record.name),
            csv_quote(&record.email),
            csv_quote(record.department.as_str()),
            record.year,
            csv_quote(&record.job_title),
            csv_quote(&record.company),
        ));
    }
    out
}

pub fn write_csv(path: &Path, records: &[AlumniRecord]) -> Result<()> {
    fs::write(path, export_csv(records))
        .with_context(|| format!("write CSV export {}", path.display()))
}

fn csv_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// JSON backup: `{ generated_at, records: [...] }` with RFC 3339 timestamps.
pub fn backup_json(records: &[AlumniRecord]) -> Result<String> {
    let entries = records
        .iter()
        .map(|record| {
            Ok(serde_json::json!({
                "id": record.id.get(),
                "name": record.name,
                "email": record.email,
                "department": record.department.as_str(),
                "year": record.year,
                "job_title": record.job_title,
                "company": record.company,
                "created_at": format_datetime(record.created_at)?,
                "updated_at": format_datetime(record.updated_at)?,
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    let backup = serde_json::json!({
        "generated_at": now_rfc3339()?,
        "records": entries,
    });
    serde_json::to_string_pretty(&backup).context("serialize backup")
}

pub fn write_backup(path: &Path, records: &[AlumniRecord]) -> Result<()> {
    let json = backup_json(records)?;
    fs::write(path, json).with_context(|| format!("write backup {}", path.display()))
}

/// Parses a backup produced by [`backup_json`]. Every record is validated
/// before any of them are accepted.
pub fn parse_backup(raw: &str) -> Result<Vec<AlumniRecord>> {
    let value: serde_json::Value = serde_json::from_str(raw).context("parse backup JSON")?;
    let entries = value
        .get("records")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| anyhow!("backup is missing the `records` array"))?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        records.push(parse_backup_entry(entry).with_context(|| format!("backup record {index}"))?);
    }

    let mut seen = std::collections::BTreeSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            bail!("backup contains duplicate record id {}", record.id);
        }
    }
    Ok(records)
}

pub fn read_backup(path: &Path) -> Result<Vec<AlumniRecord>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read backup {}", path.display()))?;
    parse_backup(&raw)
}

fn parse_backup_entry(entry: &serde_json::Value) -> Result<AlumniRecord> {
    let id = entry
        .get("id")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| anyhow!("missing numeric `id`"))?;
    if id <= 0 {
        bail!("record id must be positive, got {id}");
    }

    let text = |key: &str| -> Result<String> {
        entry
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("missing text field `{key}`"))
    };
    let optional_text = |key: &str| -> String {
        entry
            .get(key)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };

    let year = entry
        .get("year")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| anyhow!("missing numeric `year`"))?;
    let year = i32::try_from(year).map_err(|_| anyhow!("year {year} out of range"))?;

    let email = text("email")?;
    alma_app::parse_email(&email).map_err(|_| anyhow!("invalid email {email:?}"))?;

    let created_at = match entry.get("created_at").and_then(serde_json::Value::as_str) {
        Some(raw) => parse_datetime(raw)?,
        None => OffsetDateTime::now_utc(),
    };
    let updated_at = match entry.get("updated_at").and_then(serde_json::Value::as_str) {
        Some(raw) => parse_datetime(raw)?,
        None => created_at,
    };

    Ok(AlumniRecord {
        id: AlumniId::new(id),
        name: text("name")?,
        email,
        department: Department::parse(&text("department")?),
        year,
        job_title: optional_text("job_title"),
        company: optional_text("company"),
        created_at,
        updated_at,
    })
}

pub fn default_db_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("ALMA_DB_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set ALMA_DB_PATH to a writable database path")
    })?;

    let app_dir = data_root.join(APP_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("create data directory {}", app_dir.display()))?;
    Ok(app_dir.join("alma.db"))
}

pub fn validate_db_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("database path must not be empty");
    }
    if path == ":memory:" {
        return Ok(());
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "database path {path:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    if path.starts_with("file:") {
        bail!("database path {path:?} uses file: URI syntax; pass a plain filesystem path");
    }

    if path.contains('?') {
        bail!(
            "database path {path:?} contains '?'; remove query parameters and use a plain file path"
        );
    }

    Ok(())
}

fn has_user_tables(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
            [],
            |row| row.get(0),
        )
        .context("count user tables")?;
    Ok(count > 0)
}

fn validate_schema(conn: &Connection) -> Result<()> {
    for (table, required_columns) in REQUIRED_SCHEMA {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .with_context(|| format!("inspect table `{table}`"))?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .with_context(|| format!("list columns of `{table}`"))?
            .collect::<rusqlite::Result<Vec<String>>>()
            .with_context(|| format!("collect columns of `{table}`"))?;

        if columns.is_empty() {
            bail!("required table `{table}` is missing");
        }

        let missing: Vec<&str> = required_columns
            .iter()
            .filter(|column| !columns.iter().any(|have| have == *column))
            .copied()
            .collect();
        if !missing.is_empty() {
            bail!(
                "table `{table}` is missing required columns: {}",
                missing.join(", ")
            );
        }
    }
    Ok(())
}

fn configure_connection(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .context("configure sqlite pragmas")
}

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format current timestamp")
}

fn format_datetime(value: OffsetDateTime) -> Result<String> {
    value.format(&Rfc3339).context("format timestamp")
}

fn parse_datetime(raw: &str) -> Result<OffsetDateTime> {
    if let Ok(value) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(value);
    }

    if let Ok(value) = PrimitiveDateTime::parse(
        raw,
        &format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ) {
        return Ok(value.assume_utc());
    }

    if let Ok(value) = PrimitiveDateTime::parse(
        raw,
        &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Ok(value.assume_utc());
    }

    bail!("unsupported datetime format {raw:?}")
}

fn to_sql_error(error: anyhow::Error) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            error.to_string(),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::{csv_quote, export_csv, parse_datetime};
    use alma_testkit::AlumniFaker;

    #[test]
    fn csv_quote_doubles_inner_quotes() {
        assert_eq!(csv_quote("plain"), "\"plain\"");
        assert_eq!(csv_quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_export_starts_with_the_header_row() {
        let mut faker = AlumniFaker::new(5);
        let records = faker.records(2);
        let csv = export_csv(&records);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Name,Email,Department,Year,Job Title,Company")
        );
        assert_eq!(lines.count(), 2);
        assert!(csv.contains("001"));
    }

    #[test]
    fn datetime_parser_accepts_sqlite_and_rfc3339_shapes() {
        assert!(parse_datetime("2026-02-19T12:34:56Z").is_ok());
        assert!(parse_datetime("2026-02-19 12:34:56").is_ok());
        assert!(parse_datetime("2026-02-19T12:34:56").is_ok());
        assert!(parse_datetime("not a date").is_err());
    }
}
