//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Command definitions are consistent (clap debug asserts)
//! 2. Required arguments are enforced before anything runs
//! 3. Params extraction and conversion into command args

use std::path::PathBuf;

use clap::error::ErrorKind;
use typeport_compiler::WriteMode;

use super::*;
use crate::cli::commands::{dump_command, search_command, translate_command};
use crate::commands::translate::TranslateArgs;

#[test]
fn cli_definition_is_valid() {
    build_cli().debug_assert();
}

#[test]
fn classpath_values_are_split_on_colons() {
    let m = translate_command()
        .try_get_matches_from(["translate", "-p", "a/src:b/src", "--classpath", "c:", "-i", "User"])
        .unwrap();
    let params = TranslateParams::from_matches(&m);

    assert_eq!(
        params.classpath,
        [
            PathBuf::from("a/src"),
            PathBuf::from("b/src"),
            PathBuf::from("c"),
        ]
    );
    assert_eq!(params.input.as_deref(), Some("User"));
}

#[test]
fn classpath_is_required() {
    for cmd in [translate_command(), dump_command()] {
        let name = cmd.get_name().to_owned();
        let err = cmd
            .try_get_matches_from([name.as_str(), "-i", "User"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument, "{name}");
    }

    let err = search_command()
        .try_get_matches_from(["search", "User"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn dump_requires_input_and_search_requires_query() {
    let err = dump_command()
        .try_get_matches_from(["dump", "-p", "src"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

    let err = search_command()
        .try_get_matches_from(["search", "-p", "src"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn translate_defaults() {
    let m = translate_command()
        .try_get_matches_from(["translate", "-p", "src"])
        .unwrap();
    let params = TranslateParams::from_matches(&m);

    assert_eq!(params.input, None);
    assert_eq!(params.output, None);
    assert_eq!(params.import_prefix, "@");
    assert_eq!(params.indent, 2);
    assert_eq!(params.color, ColorChoice::Auto);
    assert!(!params.overwrite);
    assert!(!params.bare_enums);

    let args: TranslateArgs = params.into();
    assert_eq!(args.mode, WriteMode::Append);
    assert_eq!(args.indent, 2);
}

#[test]
fn translate_output_options() {
    let m = translate_command()
        .try_get_matches_from([
            "translate",
            "-p",
            "server/src/main/java",
            "-i",
            "com.acme.User",
            "-o",
            "web/src/app/models",
            "--source-root",
            "src/main/java",
            "--import-root",
            "web/src/app",
            "--import-prefix",
            "~/",
            "--overwrite",
            "--indent",
            "4",
            "--bare-enums",
            "--color",
            "always",
        ])
        .unwrap();
    let args: TranslateArgs = TranslateParams::from_matches(&m).into();

    assert_eq!(args.output, Some(PathBuf::from("web/src/app/models")));
    assert_eq!(args.source_root.as_deref(), Some("src/main/java"));
    assert_eq!(args.import_root, Some(PathBuf::from("web/src/app")));
    assert_eq!(args.import_prefix, "~/");
    assert_eq!(args.mode, WriteMode::Overwrite);
    assert_eq!(args.indent, 4);
    assert!(args.bare_enums);
    // Written files are never colored.
    assert!(!args.color);
}

#[test]
fn color_always_applies_to_console_output() {
    let m = translate_command()
        .try_get_matches_from(["translate", "-p", "src", "--color", "always"])
        .unwrap();
    let args: TranslateArgs = TranslateParams::from_matches(&m).into();
    assert!(args.color);

    let m = translate_command()
        .try_get_matches_from(["translate", "-p", "src", "--color", "never"])
        .unwrap();
    assert_eq!(TranslateParams::from_matches(&m).color, ColorChoice::Never);
}

#[test]
fn indent_is_bounded() {
    let err = translate_command()
        .try_get_matches_from(["translate", "-p", "src", "--indent", "9"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn verbosity_is_counted() {
    let m = build_cli()
        .try_get_matches_from(["typeport", "search", "-p", "src", "User", "-vv"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();

    assert_eq!(name, "search");
    assert_eq!(sub.get_count("verbose"), 2);

    let params = SearchParams::from_matches(sub);
    assert_eq!(params.query, "User");
    assert_eq!(params.classpath, [PathBuf::from("src")]);
}

#[test]
fn dump_params() {
    let m = dump_command()
        .try_get_matches_from(["dump", "-p", "src", "-i", "Order", "-o", "out"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.input, "Order");
    assert_eq!(params.output, Some(PathBuf::from("out")));
    assert_eq!(params.source_root, None);
}
