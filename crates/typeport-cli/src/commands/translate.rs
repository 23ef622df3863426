use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::info;
use typeport_compiler::typegen::typescript::{Config, EnumFallback};
use typeport_compiler::{Linker, Registry, Translator, WriteMode, seed};
use typeport_core::Model;

use super::model_loader::load_model;
use super::prompt::Prompt;
use super::{Error, fail, output_layout};

pub struct TranslateArgs {
    pub classpath: Vec<PathBuf>,
    pub input: Option<String>,
    pub output: Option<PathBuf>,
    pub source_root: Option<String>,
    pub import_root: Option<PathBuf>,
    pub import_prefix: String,
    pub mode: WriteMode,
    pub indent: usize,
    pub bare_enums: bool,
    pub color: bool,
}

pub fn run(args: TranslateArgs) {
    let model = match load_model(&args.classpath) {
        Ok(model) => model,
        Err(e) => fail(e),
    };

    let result = match args.input.as_deref() {
        Some(query) => batch(&args, &model, query, &mut io::stdout().lock()),
        None => {
            let mut prompt = Prompt::new(io::stdin().lock(), io::stderr());
            interactive(&args, &model, &mut prompt, &mut io::stdout())
        }
    };

    if let Err(e) = result {
        fail(e);
    }
}

/// Translate the single declaration `query` resolves to.
pub fn batch(
    args: &TranslateArgs,
    model: &Model,
    query: &str,
    out: &mut impl Write,
) -> Result<(), Error> {
    let seed = seed::select(model, query)?;
    let registry = translator(args, model).run(seed);
    emit(args, &registry, out)
}

/// Prompt for seeds until input runs out. Every run starts from an empty
/// registry.
pub fn interactive<R: BufRead, W: Write>(
    args: &TranslateArgs,
    model: &Model,
    prompt: &mut Prompt<R, W>,
    out: &mut impl Write,
) -> Result<(), Error> {
    let translator = translator(args, model);
    let mut registry = Registry::new();

    while let Some(seed) = prompt.next_seed(model)? {
        registry.reset();
        translator.translate(Some(seed), &mut registry);
        emit(args, &registry, out)?;
    }
    Ok(())
}

/// Print a finished run to `out`, or write it under the output directory.
fn emit(args: &TranslateArgs, registry: &Registry, out: &mut impl Write) -> Result<(), Error> {
    let mut linker = Linker::new(registry, config(args));
    if let Some(root) = &args.import_root {
        linker = linker.import_root(root);
    }

    if args.output.is_none() {
        writeln!(out, "{}", linker.render_all())?;
        return Ok(());
    }

    let written = linker.write(args.mode)?;
    info!(files = written.len(), "translation written");
    Ok(())
}

fn translator<'m>(args: &TranslateArgs, model: &'m Model) -> Translator<'m> {
    let layout = output_layout(args.output.as_deref(), args.source_root.as_deref());
    Translator::new(model, layout)
}

fn config(args: &TranslateArgs) -> Config {
    let fallback = if args.bare_enums {
        EnumFallback::Bare
    } else {
        EnumFallback::QuotedName
    };
    Config::new()
        .indent(&" ".repeat(args.indent))
        .enum_fallback(fallback)
        .import_prefix(&args.import_prefix)
        .colored(args.color)
}
