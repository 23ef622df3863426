//! Visited registry and translated type values.
//!
//! A `Registry` belongs to exactly one translation run. Every qualified name
//! moves through UNSEEN -> IN_PROGRESS -> DONE; seeing the in-progress marker
//! again is what stops cyclic references from re-entering the walk.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::invariants;

/// A translated declaration. Identity is the qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranslatedType {
    Interface(TranslatedInterface),
    Enum(TranslatedEnum),
}

impl TranslatedType {
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(t) => &t.name,
            Self::Enum(t) => &t.name,
        }
    }

    pub fn qualified_name(&self) -> &str {
        match self {
            Self::Interface(t) => &t.qualified_name,
            Self::Enum(t) => &t.qualified_name,
        }
    }

    /// Destination file, when an output layout was configured for the run.
    pub fn output_path(&self) -> Option<&Path> {
        match self {
            Self::Interface(t) => t.output_path.as_deref(),
            Self::Enum(t) => t.output_path.as_deref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranslatedInterface {
    pub name: String,
    pub qualified_name: String,
    pub output_path: Option<PathBuf>,
    /// Simple name of the superclass.
    pub extends: Option<String>,
    pub fields: Vec<Field>,
    /// Qualified names of referenced source declarations, for import linking.
    pub imports: IndexSet<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    /// Target type expression.
    pub ty: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranslatedEnum {
    pub name: String,
    pub qualified_name: String,
    pub output_path: Option<PathBuf>,
    pub values: Vec<EnumValue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub name: String,
    /// Literal source text; `None` renders a fallback derived from the name.
    pub value: Option<String>,
}

/// Registry entry for a qualified name that has been seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    InProgress,
    /// `None` for declaration kinds that produce no output.
    Done(Option<TranslatedType>),
}

/// Run-scoped memo of translations keyed by qualified name.
#[derive(Debug, Default)]
pub struct Registry {
    slots: IndexMap<String, Slot>,
    /// Qualified names with output, in finalization order.
    finished: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, qualified_name: &str) -> Option<&Slot> {
        self.slots.get(qualified_name)
    }

    /// True once a name is in progress or done.
    pub fn is_known(&self, qualified_name: &str) -> bool {
        self.slots.contains_key(qualified_name)
    }

    /// Mark a name as in progress. Returns false if it was already known.
    pub fn begin(&mut self, qualified_name: &str) -> bool {
        if self.is_known(qualified_name) {
            return false;
        }
        self.slots.insert(qualified_name.to_owned(), Slot::InProgress);
        true
    }

    /// Store the result for a name previously passed to `begin`.
    pub fn finish(&mut self, qualified_name: &str, translated: Option<TranslatedType>) {
        let Some(slot) = self.slots.get_mut(qualified_name) else {
            invariants::not_in_progress(qualified_name);
        };
        if *slot != Slot::InProgress {
            invariants::not_in_progress(qualified_name);
        }
        if translated.is_some() {
            self.finished.push(qualified_name.to_owned());
        }
        *slot = Slot::Done(translated);
    }

    /// Finalized translation for a name, if it produced output.
    pub fn get(&self, qualified_name: &str) -> Option<&TranslatedType> {
        match self.slots.get(qualified_name)? {
            Slot::Done(translated) => translated.as_ref(),
            Slot::InProgress => None,
        }
    }

    /// Every translation with output, in finalization order.
    pub fn translated(&self) -> impl Iterator<Item = &TranslatedType> {
        self.finished.iter().filter_map(|name| self.get(name))
    }

    pub fn reset(&mut self) {
        self.slots.clear();
        self.finished.clear();
    }

    /// Number of known names, including skipped and in-progress ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
