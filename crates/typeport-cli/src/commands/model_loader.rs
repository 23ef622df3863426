use std::path::PathBuf;

use typeport_core::Model;
use typeport_java::JavaModelBuilder;

use super::Error;

/// Parse every Java source under `classpath` into one model.
pub fn load_model(classpath: &[PathBuf]) -> Result<Model, Error> {
    if classpath.is_empty() {
        return Err(Error::EmptyClasspath);
    }

    let model = JavaModelBuilder::new()
        .roots(classpath.iter().cloned())
        .build()?;
    Ok(model)
}
