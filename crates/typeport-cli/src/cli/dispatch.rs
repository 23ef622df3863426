//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - classpath splitting (`-p a:b -p c` gives three roots)

use std::path::PathBuf;

use clap::ArgMatches;
use typeport_compiler::WriteMode;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::search::SearchArgs;
use crate::commands::translate::TranslateArgs;

pub struct TranslateParams {
    pub classpath: Vec<PathBuf>,
    pub input: Option<String>,
    pub output: Option<PathBuf>,
    pub source_root: Option<String>,
    pub import_root: Option<PathBuf>,
    pub import_prefix: String,
    pub overwrite: bool,
    pub indent: u8,
    pub bare_enums: bool,
    pub color: ColorChoice,
}

impl TranslateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            classpath: parse_classpath(m),
            input: m.get_one::<String>("input").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            source_root: m.get_one::<String>("source_root").cloned(),
            import_root: m.get_one::<PathBuf>("import_root").cloned(),
            import_prefix: m
                .get_one::<String>("import_prefix")
                .cloned()
                .unwrap_or_default(),
            overwrite: m.get_flag("overwrite"),
            indent: m.get_one::<u8>("indent").copied().unwrap_or(2),
            bare_enums: m.get_flag("bare_enums"),
            color: parse_color(m),
        }
    }
}

impl From<TranslateParams> for TranslateArgs {
    fn from(p: TranslateParams) -> Self {
        // Files never carry escape codes.
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            classpath: p.classpath,
            input: p.input,
            output: p.output,
            source_root: p.source_root,
            import_root: p.import_root,
            import_prefix: p.import_prefix,
            mode: if p.overwrite {
                WriteMode::Overwrite
            } else {
                WriteMode::Append
            },
            indent: usize::from(p.indent),
            bare_enums: p.bare_enums,
            color,
        }
    }
}

pub struct SearchParams {
    pub classpath: Vec<PathBuf>,
    pub query: String,
}

impl SearchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            classpath: parse_classpath(m),
            query: m.get_one::<String>("query").cloned().unwrap_or_default(),
        }
    }
}

impl From<SearchParams> for SearchArgs {
    fn from(p: SearchParams) -> Self {
        Self {
            classpath: p.classpath,
            query: p.query,
        }
    }
}

pub struct DumpParams {
    pub classpath: Vec<PathBuf>,
    pub input: String,
    pub output: Option<PathBuf>,
    pub source_root: Option<String>,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            classpath: parse_classpath(m),
            input: m.get_one::<String>("input").cloned().unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            source_root: m.get_one::<String>("source_root").cloned(),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            classpath: p.classpath,
            input: p.input,
            output: p.output,
            source_root: p.source_root,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Every `-p` value split on `:`; empty segments are dropped.
fn parse_classpath(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<String>("classpath")
        .into_iter()
        .flatten()
        .flat_map(|value| value.split(':'))
        .filter(|segment| !segment.is_empty())
        .map(PathBuf::from)
        .collect()
}
