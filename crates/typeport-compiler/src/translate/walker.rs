//! Closure walker: translates a seed and everything reachable from it.

use std::path::PathBuf;

use indexmap::IndexSet;
use tracing::{debug, trace};

use typeport_core::{
    ClassDecl, DeclId, DeclKind, EnumDecl, Expr, LiteralKind, SourceModel, TypeDecl, TypeRef,
    Visibility,
};

use crate::output::OutputLayout;
use crate::registry::{
    EnumValue, Field, Registry, TranslatedEnum, TranslatedInterface, TranslatedType,
};

use super::map_type;

/// Walks the type closure of a seed declaration.
///
/// The walk is depth-first over superclass and field edges. Superclasses are
/// visited before fields, fields in declaration order.
pub struct Translator<'m> {
    model: &'m dyn SourceModel,
    layout: Option<OutputLayout>,
}

impl<'m> Translator<'m> {
    pub fn new(model: &'m dyn SourceModel, layout: Option<OutputLayout>) -> Self {
        Self { model, layout }
    }

    /// Translate `seed` into a fresh registry.
    pub fn run(&self, seed: DeclId) -> Registry {
        let mut registry = Registry::new();
        self.translate(Some(seed), &mut registry);
        registry
    }

    /// Translate `seed` and its closure into `registry`.
    ///
    /// Does nothing when `seed` is `None` or its qualified name is already
    /// known, finalized or in progress.
    pub fn translate(&self, seed: Option<DeclId>, registry: &mut Registry) {
        let Some(id) = seed else {
            return;
        };
        let decl = self.model.decl(id);
        if !registry.begin(&decl.qualified_name) {
            trace!(name = %decl.qualified_name, "already visited");
            return;
        }

        debug!(name = %decl.qualified_name, kind = decl.kind.label(), "translating");
        let translated = match &decl.kind {
            DeclKind::Class(class) => {
                Some(TranslatedType::Interface(self.class(decl, class, registry)))
            }
            DeclKind::Enum(decl_enum) => {
                Some(TranslatedType::Enum(self.enumeration(decl, decl_enum)))
            }
            DeclKind::Interface | DeclKind::Annotation | DeclKind::Record => None,
        };
        registry.finish(&decl.qualified_name, translated);
    }

    fn class(
        &self,
        decl: &TypeDecl,
        class: &ClassDecl,
        registry: &mut Registry,
    ) -> TranslatedInterface {
        let mut imports = IndexSet::new();

        let extends = class.superclass.as_ref().map(|superclass| {
            self.reference(superclass.declaration(), &mut imports, registry);
            simple_name(superclass)
        });

        let mut fields = Vec::with_capacity(class.fields.len());
        for field in &class.fields {
            if field.visibility == Visibility::Private {
                continue;
            }
            let ty = &field.ty;
            self.reference(ty.declaration(), &mut imports, registry);
            for arg in ty.args() {
                let declaration = arg.bound().and_then(TypeRef::declaration);
                self.reference(declaration, &mut imports, registry);
            }
            if ty.is_array() {
                self.reference(ty.innermost().declaration(), &mut imports, registry);
            }
            fields.push(Field {
                name: field.name.clone(),
                ty: map_type(ty),
            });
        }

        TranslatedInterface {
            name: decl.simple_name.clone(),
            qualified_name: decl.qualified_name.clone(),
            output_path: self.output_path(decl),
            extends,
            fields,
            imports,
        }
    }

    /// Record a referenced declaration as an import candidate and translate it.
    fn reference(
        &self,
        id: Option<DeclId>,
        imports: &mut IndexSet<String>,
        registry: &mut Registry,
    ) {
        let Some(id) = id else {
            return;
        };
        imports.insert(self.model.decl(id).qualified_name.clone());
        self.translate(Some(id), registry);
    }

    fn enumeration(&self, decl: &TypeDecl, decl_enum: &EnumDecl) -> TranslatedEnum {
        let values = decl_enum
            .constants
            .iter()
            .map(|constant| EnumValue {
                name: constant.name.clone(),
                value: constant
                    .arguments
                    .as_deref()
                    .and_then(<[Expr]>::first)
                    .and_then(literal_value),
            })
            .collect();

        TranslatedEnum {
            name: decl.simple_name.clone(),
            qualified_name: decl.qualified_name.clone(),
            output_path: self.output_path(decl),
            values,
        }
    }

    fn output_path(&self, decl: &TypeDecl) -> Option<PathBuf> {
        self.layout
            .as_ref()
            .map(|layout| layout.output_path(&decl.location))
    }
}

/// First-argument heuristic: any literal except a boolean.
fn literal_value(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Literal(literal) if literal.kind != LiteralKind::Boolean => {
            Some(literal.text.clone())
        }
        _ => None,
    }
}

fn simple_name(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(named) => named.simple_name.clone(),
        other => map_type(other),
    }
}
