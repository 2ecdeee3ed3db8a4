// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::fields::{parse_email, parse_year};
use crate::model::{AlumniRecord, Department};

/// Flat string fields as they arrive from the add/update form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: String,
    pub job_title: String,
    pub company: String,
}

impl RecordDraft {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Pre-fills the update form from an existing record.
    pub fn from_record(record: &AlumniRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            department: record.department.as_str().to_owned(),
            year: record.year.to_string(),
            job_title: record.job_title.clone(),
            company: record.company.clone(),
        }
    }

    /// Checks required fields and field shapes without mutating anything.
    /// All problems are collected into one report so the notice can name
    /// every missing field at once.
    pub fn validate(&self) -> Result<ValidDraft, DraftIssues> {
        let mut issues = DraftIssues::default();

        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("department", &self.department),
            ("year", &self.year),
        ] {
            if value.trim().is_empty() {
                issues.missing.push(label);
            }
        }

        let email = match parse_email(&self.email) {
            Ok(email) => email,
            Err(_) => {
                if !self.email.trim().is_empty() {
                    issues.invalid_email = true;
                }
                String::new()
            }
        };

        let year = match parse_year(&self.year) {
            Ok(year) => year,
            Err(_) => {
                if !self.year.trim().is_empty() {
                    issues.invalid_year = true;
                }
                0
            }
        };

        if !issues.is_clean() {
            return Err(issues);
        }

        Ok(ValidDraft {
            name: self.name.trim().to_owned(),
            email,
            department: Department::parse(&self.department),
            year,
            job_title: self.job_title.trim().to_owned(),
            company: self.company.trim().to_owned(),
        })
    }
}

/// Typed field values after a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub email: String,
    pub department: Department,
    pub year: i32,
    pub job_title: String,
    pub company: String,
}

/// Everything wrong with one submitted draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftIssues {
    pub missing: Vec<&'static str>,
    pub invalid_email: bool,
    pub invalid_year: bool,
}

impl DraftIssues {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && !self.invalid_email && !self.invalid_year
    }
}

impl std::fmt::Display for DraftIssues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!(
                "Please fill in all required fields: {}",
                self.missing.join(", ")
            ));
        }
        if self.invalid_email {
            parts.push("Please enter a valid email address".to_owned());
        }
        if self.invalid_year {
            parts.push("Please enter a valid graduation year".to_owned());
        }
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for DraftIssues {}
