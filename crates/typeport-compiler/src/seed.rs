//! Seed lookup by name query.

use typeport_core::{DeclId, SourceModel};

/// Errors from resolving a seed query in batch mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("nothing found for: {0}")]
    NotFound(String),

    #[error("{} declarations match '{query}': {}", candidates.len(), candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

/// Classes and enums matching `query`. A declaration whose qualified name
/// equals the query exactly is the only candidate.
pub fn candidates(model: &dyn SourceModel, query: &str) -> Vec<DeclId> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let matches = model.search(query);
    match matches
        .iter()
        .find(|id| model.decl(**id).qualified_name == query)
    {
        Some(exact) => vec![*exact],
        None => matches,
    }
}

/// Resolve `query` to exactly one declaration.
pub fn select(model: &dyn SourceModel, query: &str) -> Result<DeclId, SeedError> {
    match candidates(model, query).as_slice() {
        [] => Err(SeedError::NotFound(query.to_owned())),
        [id] => Ok(*id),
        many => Err(SeedError::Ambiguous {
            query: query.to_owned(),
            candidates: many
                .iter()
                .map(|id| model.decl(*id).qualified_name.clone())
                .collect(),
        }),
    }
}
