// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Graduation years outside this range are treated as typos.
pub const MIN_GRADUATION_YEAR: i32 = 1900;
pub const MAX_GRADUATION_YEAR: i32 = 2100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    InvalidEmail,
    InvalidYear,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail => f.write_str("invalid email address"),
            Self::InvalidYear => f.write_str("invalid graduation year"),
        }
    }
}

impl std::error::Error for FieldError {}

pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Accepts the basic `local@domain.tld` shape: no whitespace, exactly one
/// `@`, non-empty local part, and a dotted domain with non-empty labels.
pub fn parse_email(input: &str) -> FieldResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidEmail);
    }

    let mut parts = trimmed.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(FieldError::InvalidEmail),
    };
    if local.is_empty() || domain.is_empty() {
        return Err(FieldError::InvalidEmail);
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(trimmed.to_owned())
}

pub fn parse_year(input: &str) -> FieldResult<i32> {
    let year: i32 = input.trim().parse().map_err(|_| FieldError::InvalidYear)?;
    if !(MIN_GRADUATION_YEAR..=MAX_GRADUATION_YEAR).contains(&year) {
        return Err(FieldError::InvalidYear);
    }
    Ok(year)
}

/// Uppercase initials for the avatar column: first letter of each word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
