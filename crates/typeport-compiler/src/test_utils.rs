//! Test utilities: Java fixtures in, translations out.

use typeport_core::{Model, SourceLocation, SourceModel};
use typeport_java::JavaModelBuilder;

use crate::output::{Linker, OutputLayout};
use crate::registry::Registry;
use crate::translate::Translator;
use crate::typegen::typescript::Config;

/// Classpath root of in-memory fixtures.
pub const ROOT: &str = "/work/src/main/java";

/// Model of `(path under ROOT, source)` pairs.
pub fn java_model(files: &[(&str, &str)]) -> Model {
    files
        .iter()
        .fold(JavaModelBuilder::new(), |builder, (path, text)| {
            builder.source(
                SourceLocation::new(ROOT, format!("{ROOT}/{path}")),
                *text,
            )
        })
        .build()
        .expect("fixture model builds")
}

/// Translate the closure of `seed` (an exact qualified name).
pub fn translate(model: &Model, seed: &str, layout: Option<OutputLayout>) -> Registry {
    let id = model
        .lookup(seed)
        .unwrap_or_else(|| panic!("fixture has no declaration '{seed}'"));
    Translator::new(model, layout).run(id)
}

/// Console rendering of the closure of `seed` with `config`.
pub fn render_with(files: &[(&str, &str)], seed: &str, config: Config) -> String {
    let model = java_model(files);
    let registry = translate(&model, seed, None);
    Linker::new(&registry, config).render_all()
}

/// Console rendering of the closure of `seed` with the default config.
pub fn render(files: &[(&str, &str)], seed: &str) -> String {
    render_with(files, seed, Config::new())
}
