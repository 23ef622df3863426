//! Name resolution: turns per-file syntax into a `Model`.
//!
//! Runs in two passes. The first assigns a `DeclId` and qualified name to
//! every declaration (nested ones included) so that the second pass can
//! resolve references in any direction, including cycles.

use std::collections::HashMap;

use typeport_core::{
    ClassDecl, DeclId, DeclKind, EnumDecl, FieldDecl, Model, NamedRef, SourceLocation, TypeDecl,
    TypeRef, simple_name_of,
};

use crate::syntax::{FileSyntax, ImportSyntax, KindSyntax, TypeExpr, TypeSyntax};

/// Implicitly imported `java.lang` names that matter for type mapping.
const JAVA_LANG: &[&str] = &[
    "Boolean",
    "Byte",
    "Character",
    "Class",
    "Double",
    "Enum",
    "Float",
    "Integer",
    "Long",
    "Number",
    "Object",
    "Short",
    "String",
    "Void",
];

/// `java.util` names recognized behind `import java.util.*;`.
const JAVA_UTIL: &[&str] = &[
    "ArrayList",
    "Collection",
    "Date",
    "HashMap",
    "HashSet",
    "LinkedHashMap",
    "LinkedHashSet",
    "LinkedList",
    "List",
    "Map",
    "Optional",
    "Set",
    "SortedMap",
    "SortedSet",
    "TreeMap",
    "TreeSet",
    "UUID",
];

pub(crate) struct ParsedFile {
    pub location: SourceLocation,
    pub syntax: FileSyntax,
}

/// Declaration waiting for its references to be resolved.
struct Pending<'a> {
    qualified_name: String,
    file: usize,
    /// Qualified names of the declaration itself and its enclosing types, outermost first.
    scope: Vec<String>,
    syntax: &'a TypeSyntax,
}

pub(crate) fn build_model(files: &[ParsedFile]) -> Model {
    let mut pending = Vec::new();
    for (index, file) in files.iter().enumerate() {
        for ty in &file.syntax.types {
            let qualified_name = qualify(file.syntax.package.as_deref(), &ty.name);
            collect(ty, qualified_name, index, &[], &mut pending);
        }
    }

    let mut index = HashMap::with_capacity(pending.len());
    for (i, decl) in pending.iter().enumerate() {
        index.insert(decl.qualified_name.clone(), DeclId::from_raw(i as u32));
    }

    let resolver = Resolver { files, index };
    Model::from_decls(pending.iter().map(|decl| resolver.declaration(decl)))
}

fn collect<'a>(
    syntax: &'a TypeSyntax,
    qualified_name: String,
    file: usize,
    outer: &[String],
    out: &mut Vec<Pending<'a>>,
) {
    let mut scope = outer.to_vec();
    scope.push(qualified_name.clone());
    out.push(Pending {
        qualified_name: qualified_name.clone(),
        file,
        scope: scope.clone(),
        syntax,
    });
    for nested in &syntax.nested {
        let nested_name = format!("{qualified_name}.{}", nested.name);
        collect(nested, nested_name, file, &scope, out);
    }
}

fn qualify(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}.{name}"),
        _ => name.to_owned(),
    }
}

struct Resolver<'a> {
    files: &'a [ParsedFile],
    index: HashMap<String, DeclId>,
}

impl Resolver<'_> {
    fn declaration(&self, pending: &Pending<'_>) -> TypeDecl {
        let syntax = pending.syntax;
        let kind = match &syntax.kind {
            KindSyntax::Class { superclass, fields } => DeclKind::Class(ClassDecl {
                superclass: superclass.as_ref().map(|ty| self.type_ref(ty, pending)),
                fields: fields
                    .iter()
                    .map(|field| FieldDecl {
                        name: field.name.clone(),
                        ty: self.type_ref(&field.ty, pending),
                        visibility: field.visibility,
                    })
                    .collect(),
            }),
            KindSyntax::Enum { constants } => DeclKind::Enum(EnumDecl {
                constants: constants.clone(),
            }),
            KindSyntax::Interface => DeclKind::Interface,
            KindSyntax::Annotation => DeclKind::Annotation,
            KindSyntax::Record => DeclKind::Record,
        };

        TypeDecl {
            qualified_name: pending.qualified_name.clone(),
            simple_name: syntax.name.clone(),
            location: self.files[pending.file].location.clone(),
            kind,
        }
    }

    fn type_ref(&self, ty: &TypeExpr, pending: &Pending<'_>) -> TypeRef {
        match ty {
            TypeExpr::Primitive(keyword) => TypeRef::builtin(keyword),
            TypeExpr::Array(element) => TypeRef::array_of(self.type_ref(element, pending)),
            TypeExpr::Wildcard(bound) => TypeRef::Wildcard(
                bound
                    .as_ref()
                    .map(|bound| Box::new(self.type_ref(bound, pending))),
            ),
            TypeExpr::Named { segments, args } => {
                let qualified_name = self.resolve_segments(segments, pending);
                TypeRef::Named(NamedRef {
                    simple_name: simple_name_of(&qualified_name).to_owned(),
                    decl: self.index.get(&qualified_name).copied(),
                    args: args.iter().map(|arg| self.type_ref(arg, pending)).collect(),
                    qualified_name,
                })
            }
        }
    }

    fn resolve_segments(&self, segments: &[String], pending: &Pending<'_>) -> String {
        let Some((first, rest)) = segments.split_first() else {
            return String::new();
        };
        if rest.is_empty() {
            return self
                .resolve_simple(first, pending)
                .unwrap_or_else(|| first.clone());
        }

        // `Outer.Inner` resolves through `Outer`; anything else is taken as written.
        match self.resolve_simple(first, pending) {
            Some(head) => format!("{head}.{}", rest.join(".")),
            None => segments.join("."),
        }
    }

    fn resolve_simple(&self, name: &str, pending: &Pending<'_>) -> Option<String> {
        let file = &self.files[pending.file].syntax;

        for enclosing in pending.scope.iter().rev() {
            if simple_name_of(enclosing) == name {
                return Some(enclosing.clone());
            }
            let member = format!("{enclosing}.{name}");
            if self.index.contains_key(&member) {
                return Some(member);
            }
        }

        for import in &file.imports {
            if let ImportSyntax::Single(path) = import
                && simple_name_of(path) == name
            {
                return Some(path.clone());
            }
        }

        let same_package = qualify(file.package.as_deref(), name);
        if self.index.contains_key(&same_package) {
            return Some(same_package);
        }

        for import in &file.imports {
            if let ImportSyntax::OnDemand(package) = import {
                let candidate = qualify(Some(package), name);
                if self.index.contains_key(&candidate)
                    || (package == "java.util" && JAVA_UTIL.contains(&name))
                {
                    return Some(candidate);
                }
            }
        }

        if JAVA_LANG.contains(&name) {
            return Some(format!("java.lang.{name}"));
        }

        None
    }
}
