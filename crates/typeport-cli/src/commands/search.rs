use std::io::{self, Write};
use std::path::PathBuf;

use typeport_core::{Model, SourceModel};

use super::model_loader::load_model;
use super::{Error, fail};

pub struct SearchArgs {
    pub classpath: Vec<PathBuf>,
    pub query: String,
}

pub fn run(args: SearchArgs) {
    let model = match load_model(&args.classpath) {
        Ok(model) => model,
        Err(e) => fail(e),
    };

    if let Err(e) = list(&model, &args.query, &mut io::stdout().lock()) {
        fail(e);
    }
}

/// One `qualified name  kind  file` line per match, names padded to align.
pub fn list(model: &Model, query: &str, out: &mut impl Write) -> Result<(), Error> {
    let matches: Vec<_> = model
        .search(query.trim())
        .into_iter()
        .map(|id| model.decl(id))
        .collect();

    let width = matches
        .iter()
        .map(|decl| decl.qualified_name.len())
        .max()
        .unwrap_or(0);

    for decl in matches {
        writeln!(
            out,
            "{:<width$}  {:<5}  {}",
            decl.qualified_name,
            decl.kind.label(),
            decl.location.file.display()
        )?;
    }
    Ok(())
}
