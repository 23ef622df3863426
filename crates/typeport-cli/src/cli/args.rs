//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Classpath roots (-p/--classpath), repeatable and `:`-separated.
pub fn classpath_arg() -> Arg {
    Arg::new("classpath")
        .short('p')
        .long("classpath")
        .value_name("PATHS")
        .required(true)
        .action(ArgAction::Append)
        .help("Java source roots, separated by ':' (repeatable)")
}

/// Seed type name query (-i/--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("NAME")
        .help("Qualified name (or part of it) of the type to translate")
}

/// Name query (positional).
pub fn query_arg() -> Arg {
    Arg::new("query")
        .value_name("QUERY")
        .required(true)
        .help("Part of a qualified name")
}

/// Destination root (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write grouped .ts files under DIR instead of printing")
}

/// Source-root marker (--source-root).
pub fn source_root_arg() -> Arg {
    Arg::new("source_root")
        .long("source-root")
        .value_name("MARKER")
        .help("Path segment after which a file's directory is mirrored (e.g. src/main/java)")
}

/// Import root (--import-root).
pub fn import_root_arg() -> Arg {
    Arg::new("import_root")
        .long("import-root")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory import paths are computed relative to")
}

/// Module specifier prefix (--import-prefix).
pub fn import_prefix_arg() -> Arg {
    Arg::new("import_prefix")
        .long("import-prefix")
        .value_name("PREFIX")
        .default_value("@")
        .help("Prefix of generated import paths")
}

/// Replace existing files (--overwrite).
pub fn overwrite_arg() -> Arg {
    Arg::new("overwrite")
        .long("overwrite")
        .action(ArgAction::SetTrue)
        .help("Replace existing files instead of appending")
}

/// Indentation width (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("2")
        .value_parser(value_parser!(u8).range(0..=8))
        .help("Spaces per indentation level")
}

/// Bare enum members (--bare-enums).
pub fn bare_enums_arg() -> Arg {
    Arg::new("bare_enums")
        .long("bare-enums")
        .action(ArgAction::SetTrue)
        .help("Emit enum members without a value as bare names")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}
