use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use typeport_compiler::{TranslatedType, Translator, seed};
use typeport_core::{Model, SourceModel};

use super::model_loader::load_model;
use super::{Error, fail, output_layout};

pub struct DumpArgs {
    pub classpath: Vec<PathBuf>,
    pub input: String,
    pub output: Option<PathBuf>,
    pub source_root: Option<String>,
}

#[derive(Serialize)]
struct Dump<'r> {
    seed: &'r str,
    types: Vec<&'r TranslatedType>,
}

pub fn run(args: DumpArgs) {
    let model = match load_model(&args.classpath) {
        Ok(model) => model,
        Err(e) => fail(e),
    };

    if let Err(e) = dump(&args, &model, &mut io::stdout().lock()) {
        fail(e);
    }
}

/// Pretty JSON of the translated closure, in finalization order.
pub fn dump(args: &DumpArgs, model: &Model, out: &mut impl Write) -> Result<(), Error> {
    let seed = seed::select(model, &args.input)?;
    let layout = output_layout(args.output.as_deref(), args.source_root.as_deref());
    let registry = Translator::new(model, layout).run(seed);

    let report = Dump {
        seed: &model.decl(seed).qualified_name,
        types: registry.translated().collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
