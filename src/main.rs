// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus CLI entrypoint.
//!
//! By default this opens the interactive TUI on an empty workspace. `--demo`
//! seeds the built-in family-group structure; `--import <payload.json>`
//! builds the baseline from a CRM export.

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program}\n  {program} --demo\n  {program} --import <payload.json>\n\n--demo opens a built-in demo structure and cannot be combined with --import.\n--import builds the baseline graph from a CRM JSON export."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    import: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--import" => {
                if options.import.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.import = Some(path);
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.import.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "proteus".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let workspace = if options.demo {
            proteus::tui::demo_workspace()
        } else if let Some(path) = options.import {
            let raw = std::fs::read_to_string(&path)?;
            let payload = proteus::import::parse_payload(&raw)?;
            let graph = proteus::import::import_graph(&payload)?;
            proteus::model::Workspace::new(graph)
        } else {
            proteus::model::Workspace::new(proteus::model::Graph::new())
        };

        proteus::tui::run(workspace)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("proteus: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo);
        assert!(options.import.is_none());
    }

    #[test]
    fn parses_import_path() {
        let options = parse_options(["--import".to_owned(), "clients.json".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.import.as_deref(), Some("clients.json"));
        assert!(!options.demo);
    }

    #[test]
    fn rejects_demo_with_import() {
        parse_options(
            ["--demo".to_owned(), "--import".to_owned(), "clients.json".to_owned()].into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
        parse_options(["positional".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(["--demo".to_owned(), "--demo".to_owned()].into_iter()).unwrap_err();
        parse_options(
            [
                "--import".to_owned(),
                "a.json".to_owned(),
                "--import".to_owned(),
                "b.json".to_owned(),
            ]
            .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_missing_import_value() {
        parse_options(["--import".to_owned()].into_iter()).unwrap_err();
    }
}
