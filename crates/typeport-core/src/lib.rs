#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for typeport's source model.
//!
//! Two layers:
//! - **Reference layer**: `TypeRef` trees as they appear on fields and supertypes
//! - **Declaration layer**: `TypeDecl` arena addressed by `DeclId`
//!
//! The `SourceModel` trait is the contract a source-language frontend fulfils.
//! `Model` is the arena-backed implementation every frontend produces.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

pub mod colors;
pub mod utils;


pub use colors::Colors;

// ============================================================================
// Handles
// ============================================================================

/// Handle to a declaration stored in a `SourceModel`.
///
/// Handles are only meaningful for the model that issued them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct DeclId(u32);

impl DeclId {
    /// Create a DeclId from a raw index. Frontends that pre-assign ids use this.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

// ============================================================================
// Reference Layer
// ============================================================================

/// A type as written at a use site (field type, superclass, type argument).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef {
    /// Simple or parameterized reference: `int`, `String`, `Map<K, V>`.
    Named(NamedRef),
    /// `T[]`; nested arrays nest this variant.
    Array(Box<TypeRef>),
    /// `?`, `? extends T`, `? super T` in a type-argument position.
    Wildcard(Option<Box<TypeRef>>),
}

/// Simple or parameterized type reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedRef {
    pub qualified_name: String,
    pub simple_name: String,
    pub args: Vec<TypeRef>,
    /// Set only when the referenced type is declared in the source tree.
    pub decl: Option<DeclId>,
}

impl TypeRef {
    /// Reference to a type with no source declaration (primitives, JDK types).
    pub fn builtin(qualified_name: &str) -> Self {
        Self::Named(NamedRef {
            qualified_name: qualified_name.to_owned(),
            simple_name: simple_name_of(qualified_name).to_owned(),
            args: Vec::new(),
            decl: None,
        })
    }

    /// Reference to a declaration in the source tree.
    pub fn declared(qualified_name: &str, decl: DeclId) -> Self {
        Self::Named(NamedRef {
            qualified_name: qualified_name.to_owned(),
            simple_name: simple_name_of(qualified_name).to_owned(),
            args: Vec::new(),
            decl: Some(decl),
        })
    }

    /// Attach type arguments to a named reference. Other shapes are returned unchanged.
    pub fn with_args(self, args: Vec<TypeRef>) -> Self {
        match self {
            Self::Named(named) => Self::Named(NamedRef { args, ..named }),
            other => other,
        }
    }

    pub fn array_of(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Source declaration of a named reference. Arrays and wildcards have none.
    pub fn declaration(&self) -> Option<DeclId> {
        match self {
            Self::Named(named) => named.decl,
            Self::Array(_) | Self::Wildcard(_) => None,
        }
    }

    /// Type arguments of a named reference; empty for other shapes.
    pub fn args(&self) -> &[TypeRef] {
        match self {
            Self::Named(named) => &named.args,
            Self::Array(_) | Self::Wildcard(_) => &[],
        }
    }

    /// Type a type argument stands for: the bound of a wildcard, the
    /// reference itself for other shapes. `None` for an unbounded `?`.
    pub fn bound(&self) -> Option<&TypeRef> {
        match self {
            Self::Wildcard(bound) => bound.as_deref(),
            other => Some(other),
        }
    }

    /// Innermost element type of an array (the reference itself otherwise).
    pub fn innermost(&self) -> &TypeRef {
        match self {
            Self::Array(element) => element.innermost(),
            other => other,
        }
    }
}

/// Last dotted segment of a qualified name.
pub fn simple_name_of(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map_or(qualified_name, |(_, simple)| simple)
}

// ============================================================================
// Declaration Layer
// ============================================================================

/// A type declaration found in the source tree.
#[derive(Clone, Debug)]
pub struct TypeDecl {
    pub qualified_name: String,
    pub simple_name: String,
    pub location: SourceLocation,
    pub kind: DeclKind,
}

/// Declaration kinds. Only classes and enums carry data shape.
#[derive(Clone, Debug)]
pub enum DeclKind {
    Class(ClassDecl),
    Enum(EnumDecl),
    Interface,
    Annotation,
    Record,
}

impl DeclKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Class(_) => "class",
            Self::Enum(_) => "enum",
            Self::Interface => "interface",
            Self::Annotation => "annotation",
            Self::Record => "record",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ClassDecl {
    pub superclass: Option<TypeRef>,
    /// Fields declared directly on this class, in declaration order.
    pub fields: Vec<FieldDecl>,
}

#[derive(Clone, Debug)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeRef,
    pub visibility: Visibility,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    #[default]
    Package,
    Private,
}

#[derive(Clone, Debug, Default)]
pub struct EnumDecl {
    pub constants: Vec<EnumConstant>,
}

#[derive(Clone, Debug)]
pub struct EnumConstant {
    pub name: String,
    /// Constructor arguments; `None` when the constant has no argument list.
    pub arguments: Option<Vec<Expr>>,
}

/// Constructor argument expression, as far as the model needs to see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),
    /// Anything that is not a literal, kept as source text.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    /// Source form; string literals keep their quotes.
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    Boolean,
    Integer,
    Float,
    Char,
    String,
    Null,
}

/// Where a declaration lives on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// Classpath root the file was discovered under.
    pub root: PathBuf,
    pub file: PathBuf,
}

impl SourceLocation {
    pub fn new(root: impl Into<PathBuf>, file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file: file.into(),
        }
    }

    /// File name without its extension.
    pub fn file_stem(&self) -> &str {
        self.file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Directory containing the file.
    pub fn directory(&self) -> &Path {
        self.file.parent().unwrap_or(Path::new(""))
    }
}

// ============================================================================
// SourceModel Trait
// ============================================================================

/// Read access to a parsed source tree.
///
/// This is the contract between a language frontend and the translator:
/// declarations by handle, lookup by exact qualified name, and substring search
/// for seed selection.
pub trait SourceModel {
    fn decl(&self, id: DeclId) -> &TypeDecl;
    fn lookup(&self, qualified_name: &str) -> Option<DeclId>;

    /// Classes and enums whose qualified name contains `query`, in model order.
    fn search(&self, query: &str) -> Vec<DeclId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Arena Model
// ============================================================================

/// Arena-backed `SourceModel`.
#[derive(Clone, Debug, Default)]
pub struct Model {
    decls: Vec<TypeDecl>,
    by_name: IndexMap<String, DeclId>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model whose ids follow the order of `decls`.
    pub fn from_decls(decls: impl IntoIterator<Item = TypeDecl>) -> Self {
        let mut model = Self::new();
        for decl in decls {
            model.push(decl);
        }
        model
    }

    /// Append a declaration. A later declaration with the same qualified name
    /// shadows the earlier one for `lookup`.
    pub fn push(&mut self, decl: TypeDecl) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.by_name.insert(decl.qualified_name.clone(), id);
        self.decls.push(decl);
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &TypeDecl)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(i, decl)| (DeclId(i as u32), decl))
    }
}

impl SourceModel for Model {
    fn decl(&self, id: DeclId) -> &TypeDecl {
        &self.decls[id.index()]
    }

    fn lookup(&self, qualified_name: &str) -> Option<DeclId> {
        self.by_name.get(qualified_name).copied()
    }

    fn search(&self, query: &str) -> Vec<DeclId> {
        self.iter()
            .filter(|(_, decl)| matches!(decl.kind, DeclKind::Class(_) | DeclKind::Enum(_)))
            .filter(|(_, decl)| decl.qualified_name.contains(query))
            .map(|(id, _)| id)
            .collect()
    }

    fn len(&self) -> usize {
        self.decls.len()
    }
}
