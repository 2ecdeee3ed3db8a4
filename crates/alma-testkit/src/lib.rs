// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use alma_app::{AlumniId, AlumniRecord, Department, RecordDraft};
use anyhow::{Context, Result};
use std::path::PathBuf;
use time::{Date, Month, OffsetDateTime, Time};

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

const JOB_TITLES: [&str; 10] = [
    "Software Engineer",
    "Data Analyst",
    "Project Manager",
    "Site Engineer",
    "Research Assistant",
    "Product Designer",
    "Systems Architect",
    "QA Engineer",
    "Field Engineer",
    "Consultant",
];

const COMPANY_PREFIXES: [&str; 10] = [
    "Summit", "Apex", "Bright", "Heritage", "Northwind", "Cobalt", "Orchard", "Granite",
    "Harbor", "Beacon",
];
const COMPANY_SUFFIXES: [&str; 6] = ["Labs", "Systems", "Works", "Group", "Dynamics", "Analytics"];

const EMAIL_DOMAINS: [&str; 5] = [
    "alumni.example.edu",
    "example-mail.com",
    "gradnet.org",
    "mailhub.io",
    "postbox.net",
];

const GRADUATION_YEAR_MIN: i32 = 1995;
const GRADUATION_YEAR_MAX: i32 = 2025;

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Deterministic alumni fixture generator. Same seed, same records.
#[derive(Debug, Clone)]
pub struct AlumniFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl AlumniFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.int_n(pool.len())]
    }

    fn department(&mut self) -> Department {
        let index = self.rng.int_n(Department::FIXED.len());
        Department::FIXED[index].clone()
    }

    fn year(&mut self) -> i32 {
        let span = (GRADUATION_YEAR_MAX - GRADUATION_YEAR_MIN + 1) as usize;
        GRADUATION_YEAR_MIN + self.rng.int_n(span) as i32
    }

    /// A submitted-form shape, for exercising the validation path.
    pub fn draft(&mut self) -> RecordDraft {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let domain = self.pick(&EMAIL_DOMAINS);
        let with_job = self.rng.bool();

        RecordDraft {
            name: format!("{first} {last}"),
            email: format!(
                "{}.{}@{domain}",
                first.to_ascii_lowercase(),
                last.to_ascii_lowercase()
            ),
            department: self.department().as_str().to_owned(),
            year: self.year().to_string(),
            job_title: if with_job {
                self.pick(&JOB_TITLES).to_owned()
            } else {
                String::new()
            },
            company: if with_job {
                format!(
                    "{} {}",
                    self.pick(&COMPANY_PREFIXES),
                    self.pick(&COMPANY_SUFFIXES)
                )
            } else {
                String::new()
            },
        }
    }

    /// A fully-formed record with the given identity, timestamped at the
    /// fixture instant.
    pub fn record(&mut self, id: i64) -> AlumniRecord {
        let draft = self.draft();
        let stamp = fixture_instant();
        AlumniRecord {
            id: AlumniId::new(id),
            name: draft.name,
            email: draft.email,
            department: Department::parse(&draft.department),
            year: draft.year.parse().expect("faker year is numeric"),
            job_title: draft.job_title,
            company: draft.company,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    /// Records with ids `1..=count`.
    pub fn records(&mut self, count: usize) -> Vec<AlumniRecord> {
        (1..=count as i64).map(|id| self.record(id)).collect()
    }
}

pub fn temp_db_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let db_path = dir.path().join("alma.db");
    Ok((dir, db_path))
}

pub fn fixture_datetime() -> &'static str {
    "2026-02-19T12:34:56Z"
}

fn fixture_instant() -> OffsetDateTime {
    let date = Date::from_calendar_date(2026, Month::February, 19).expect("valid fixture date");
    let time = Time::from_hms(12, 34, 56).expect("valid fixture time");
    date.with_time(time).assume_utc()
}

#[cfg(test)]
mod tests {
    use super::AlumniFaker;

    #[test]
    fn same_seed_generates_identical_records() {
        let mut first = AlumniFaker::new(7);
        let mut second = AlumniFaker::new(7);
        assert_eq!(first.records(5), second.records(5));
    }

    #[test]
    fn zero_seed_is_normalized() {
        assert_eq!(AlumniFaker::new(0).seed(), 1);
    }

    #[test]
    fn generated_drafts_pass_validation() {
        let mut faker = AlumniFaker::new(3);
        for _ in 0..20 {
            let draft = faker.draft();
            assert!(draft.validate().is_ok(), "{draft:?}");
        }
    }

    #[test]
    fn records_use_sequential_ids() {
        let mut faker = AlumniFaker::new(11);
        let records = faker.records(3);
        let ids: Vec<i64> = records.iter().map(|record| record.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
