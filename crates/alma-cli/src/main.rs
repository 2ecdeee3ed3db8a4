// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use alma_app::TableView;
use alma_db::Store;
use anyhow::{Context, Result};
use config::Config;
use runtime::DbRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `alma --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let db_path = if options.demo {
        PathBuf::from(":memory:")
    } else {
        config.db_path()?
    };
    if options.print_db_path {
        println!("{}", db_path.display());
        return Ok(());
    }

    let store = Store::open(&db_path).with_context(|| {
        format!(
            "open database {} -- if this path is wrong, set [storage].db_path or ALMA_DB_PATH",
            db_path.display()
        )
    })?;
    store.bootstrap()?;
    if options.demo {
        store.seed_demo_data()?;
    }

    if let Some(path) = &options.export_csv {
        let records = store.load_records()?;
        alma_db::write_csv(path, &records)?;
        println!("exported {} records to {}", records.len(), path.display());
        return Ok(());
    }

    if let Some(path) = &options.backup {
        let records = store.load_records()?;
        alma_db::write_backup(path, &records)?;
        println!("backed up {} records to {}", records.len(), path.display());
        return Ok(());
    }

    if let Some(path) = &options.restore {
        let records = alma_db::read_backup(path)?;
        store.replace_all(&records)?;
        println!("restored {} records from {}", records.len(), path.display());
        return Ok(());
    }

    if options.check_only {
        return Ok(());
    }

    // Settings table wins over the config file, which wins over the default.
    let page_size = store
        .page_size_override()?
        .unwrap_or_else(|| config.page_size());

    let mut view = TableView::with_records(store.load_records()?, page_size);
    let mut runtime = DbRuntime::new(&store);
    alma_tui::run_app(&mut view, &mut runtime)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_db_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    export_csv: Option<PathBuf>,
    backup: Option<PathBuf>,
    restore: Option<PathBuf>,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_db_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        export_csv: None,
        backup: None,
        restore: None,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-path" => {
                options.print_db_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--export-csv" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--export-csv requires a file path"))?;
                options.export_csv = Some(PathBuf::from(value.as_ref()));
            }
            "--backup" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--backup requires a file path"))?;
                options.backup = Some(PathBuf::from(value.as_ref()));
            }
            "--restore" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--restore requires a file path"))?;
                options.restore = Some(PathBuf::from(value.as_ref()));
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("alma");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-path             Print resolved database path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Launch with seeded demo data (in-memory)");
    println!("  --check                  Validate config + DB + startup dependencies");
    println!("  --export-csv <path>      Export all records as CSV and exit");
    println!("  --backup <path>          Write a JSON backup and exit");
    println!("  --restore <path>         Replace all records from a JSON backup and exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args};
    use anyhow::Result;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/alma-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                print_config_path: false,
                print_db_path: false,
                demo: false,
                print_example: false,
                check_only: false,
                export_csv: None,
                backup: None,
                restore: None,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_values() {
        for flag in ["--config", "--export-csv", "--backup", "--restore"] {
            let error = parse_cli_args(vec![flag], default_options_path())
                .expect_err("missing value should fail");
            assert!(error.to_string().contains("requires a file path"));
        }
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec!["--print-config-path", "--print-example-config", "--check"],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(!options.print_db_path);
        assert!(!options.demo);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_archive_paths() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--export-csv",
                "/tmp/out.csv",
                "--backup",
                "/tmp/backup.json",
                "--restore",
                "/tmp/restore.json",
            ],
            default_options_path(),
        )?;
        assert_eq!(options.export_csv, Some(PathBuf::from("/tmp/out.csv")));
        assert_eq!(options.backup, Some(PathBuf::from("/tmp/backup.json")));
        assert_eq!(options.restore, Some(PathBuf::from("/tmp/restore.json")));
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_demo_and_db_path_print_flags() -> Result<()> {
        let options = parse_cli_args(vec!["--demo", "--print-path"], default_options_path())?;
        assert!(!options.print_config_path);
        assert!(options.print_db_path);
        assert!(options.demo);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }
}
