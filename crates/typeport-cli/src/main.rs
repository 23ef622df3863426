mod cli;
mod commands;

use tracing::Level;

use cli::{DumpParams, SearchParams, TranslateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    if let Some((_, m)) = matches.subcommand() {
        init_logging(m.get_count("verbose"));
    }

    match matches.subcommand() {
        Some(("translate", m)) => {
            let params = TranslateParams::from_matches(m);
            commands::translate::run(params.into());
        }
        Some(("search", m)) => {
            let params = SearchParams::from_matches(m);
            commands::search::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr; stdout carries declarations only.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
