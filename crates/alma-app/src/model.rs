// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ids::AlumniId;

/// Page size used when neither the settings table nor the config file has
/// an opinion.
pub const DEFAULT_PAGE_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    ComputerScience,
    ElectricalEngineering,
    MechanicalEngineering,
    CivilEngineering,
    DataScience,
    Other(String),
}

impl Department {
    pub const FIXED: [Self; 5] = [
        Self::ComputerScience,
        Self::ElectricalEngineering,
        Self::MechanicalEngineering,
        Self::CivilEngineering,
        Self::DataScience,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::ElectricalEngineering => "Electrical Engineering",
            Self::MechanicalEngineering => "Mechanical Engineering",
            Self::CivilEngineering => "Civil Engineering",
            Self::DataScience => "Data Science",
            Self::Other(name) => name,
        }
    }

    /// Never fails: anything outside the fixed set becomes free text.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        for fixed in Self::FIXED {
            if fixed.as_str().eq_ignore_ascii_case(trimmed) {
                return fixed;
            }
        }
        Self::Other(trimmed.to_owned())
    }

    /// Short badge code for the department column.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::ComputerScience | Self::DataScience => "cs",
            Self::ElectricalEngineering => "ee",
            Self::MechanicalEngineering => "me",
            Self::CivilEngineering => "ce",
            Self::Other(_) => "cs",
        }
    }
}

/// One alumni entry. `job_title` and `company` are optional; an empty string
/// means unset and renders as `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniRecord {
    pub id: AlumniId,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub year: i32,
    pub job_title: String,
    pub company: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A column selector: either unrestricted or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectorFilter {
    #[default]
    All,
    Exact(String),
}

impl SelectorFilter {
    /// `""` and `"all"` (any case) mean no restriction.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Exact(trimmed.to_owned())
        }
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            Self::All => all_label,
            Self::Exact(value) => value,
        }
    }
}

/// Combined filter state. Always fully defined; defaults mean "show all".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    pub department: SelectorFilter,
    pub year: SelectorFilter,
}

impl FilterState {
    /// True when any filter would exclude rows.
    pub fn is_restricted(&self) -> bool {
        !self.search.trim().is_empty() || !self.department.is_all() || !self.year.is_all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// What the controller hands the Notifier. Display timing (auto-dismiss,
/// manual close) belongs to the notifier, not the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingKey {
    TablePageSize,
}

impl SettingKey {
    pub const ALL: [Self; 1] = [Self::TablePageSize];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TablePageSize => "table.page_size",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "table.page_size" => Some(Self::TablePageSize),
            _ => None,
        }
    }
}
