//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeport")
        .about("Translate Java data types into TypeScript declarations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(translate_command())
        .subcommand(search_command())
        .subcommand(dump_command())
}

/// Translate the type closure of a seed declaration.
pub fn translate_command() -> Command {
    Command::new("translate")
        .about("Translate a type and everything it references")
        .override_usage(
            "\
  typeport translate -p <PATHS> [-i <NAME>] [-o <DIR>]",
        )
        .after_help(
            r#"EXAMPLES:
  typeport translate -p server/src/main/java                      # interactive, print
  typeport translate -p src/main/java -i com.acme.User            # print one closure
  typeport translate -p a/src:b/src -i User -o web/src/app/models \
      --source-root src/main/java --import-root web/src/app       # write .ts files"#,
        )
        .arg(classpath_arg())
        .arg(input_arg())
        .arg(output_arg())
        .arg(source_root_arg())
        .arg(import_root_arg())
        .arg(import_prefix_arg())
        .arg(overwrite_arg())
        .arg(indent_arg())
        .arg(bare_enums_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// List declarations matching a name query.
pub fn search_command() -> Command {
    Command::new("search")
        .about("List classes and enums whose qualified name contains QUERY")
        .override_usage(
            "\
  typeport search -p <PATHS> <QUERY>",
        )
        .after_help(
            r#"EXAMPLES:
  typeport search -p src/main/java User       # com.acme.User, com.acme.UserRole, ..."#,
        )
        .arg(classpath_arg())
        .arg(query_arg())
        .arg(verbose_arg())
}

/// Dump translated types as JSON.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print the translated closure of a type as JSON")
        .override_usage(
            "\
  typeport dump -p <PATHS> -i <NAME> [-o <DIR>]",
        )
        .after_help(
            r#"EXAMPLES:
  typeport dump -p src/main/java -i com.acme.User
  typeport dump -p src/main/java -i User -o out --source-root src/main/java"#,
        )
        .arg(classpath_arg())
        .arg(input_arg().required(true))
        .arg(output_arg())
        .arg(source_root_arg())
        .arg(verbose_arg())
}
