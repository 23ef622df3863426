//! Per-file syntax extraction from the tree-sitter Java CST.
//!
//! Produces unresolved declarations: type expressions still carry the names
//! as written. Resolution against the whole source tree happens in `resolve`.

use arborium_tree_sitter as tree_sitter;
use tree_sitter::{Node, Tree};

use typeport_core::{EnumConstant, Expr, Literal, LiteralKind, Visibility};

#[derive(Debug, Default)]
pub(crate) struct FileSyntax {
    pub package: Option<String>,
    pub imports: Vec<ImportSyntax>,
    pub types: Vec<TypeSyntax>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImportSyntax {
    /// `import a.b.C;`
    Single(String),
    /// `import a.b.*;`
    OnDemand(String),
}

#[derive(Debug)]
pub(crate) struct TypeSyntax {
    pub name: String,
    pub kind: KindSyntax,
    pub nested: Vec<TypeSyntax>,
}

#[derive(Debug)]
pub(crate) enum KindSyntax {
    Class {
        superclass: Option<TypeExpr>,
        fields: Vec<FieldSyntax>,
    },
    Enum {
        constants: Vec<EnumConstant>,
    },
    Interface,
    Annotation,
    Record,
}

#[derive(Debug)]
pub(crate) struct FieldSyntax {
    pub name: String,
    pub ty: TypeExpr,
    pub visibility: Visibility,
}

/// A type as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TypeExpr {
    /// `int`, `boolean`, `void`, ...
    Primitive(String),
    /// Dotted name segments plus the type arguments of the last generic segment.
    Named {
        segments: Vec<String>,
        args: Vec<TypeExpr>,
    },
    Array(Box<TypeExpr>),
    Wildcard(Option<Box<TypeExpr>>),
}

impl TypeExpr {
    fn wrap_array(self, dimensions: usize) -> Self {
        (0..dimensions).fold(self, |ty, _| TypeExpr::Array(Box::new(ty)))
    }
}

pub(crate) fn extract(tree: &Tree, source: &str) -> FileSyntax {
    Extractor {
        source: source.as_bytes(),
    }
    .file(tree.root_node())
}

struct Extractor<'s> {
    source: &'s [u8],
}

impl<'s> Extractor<'s> {
    fn text(&self, node: Node) -> &'s str {
        node.utf8_text(self.source).unwrap_or_default()
    }

    /// Node text with whitespace removed, for dotted names that may span lines.
    fn name_text(&self, node: Node) -> String {
        self.text(node)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    fn field_text(&self, node: Node, field: &str) -> Option<String> {
        node.child_by_field_name(field)
            .map(|child| self.text(child).to_owned())
    }

    fn file(&self, root: Node) -> FileSyntax {
        let mut file = FileSyntax::default();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_declaration" => {
                    file.package = find_named(child, &["scoped_identifier", "identifier"])
                        .map(|name| self.name_text(name));
                }
                "import_declaration" => {
                    if let Some(import) = self.import(child) {
                        file.imports.push(import);
                    }
                }
                _ => {
                    if let Some(decl) = self.type_decl(child) {
                        file.types.push(decl);
                    }
                }
            }
        }
        file
    }

    fn import(&self, node: Node) -> Option<ImportSyntax> {
        if has_token(node, "static") {
            return None;
        }
        let name = self.name_text(find_named(node, &["scoped_identifier", "identifier"])?);
        if has_token(node, "asterisk") {
            Some(ImportSyntax::OnDemand(name))
        } else {
            Some(ImportSyntax::Single(name))
        }
    }

    fn type_decl(&self, node: Node) -> Option<TypeSyntax> {
        let (kind, members) = match node.kind() {
            "class_declaration" => {
                let superclass = node
                    .child_by_field_name("superclass")
                    .and_then(last_type_child)
                    .map(|ty| self.type_expr(ty));
                let body = node.child_by_field_name("body");
                let fields = body.map(|b| self.fields(b)).unwrap_or_default();
                (KindSyntax::Class { superclass, fields }, body)
            }
            "enum_declaration" => {
                let body = node.child_by_field_name("body");
                let constants = body.map(|b| self.enum_constants(b)).unwrap_or_default();
                let members = body.and_then(|b| find_named(b, &["enum_body_declarations"]));
                (KindSyntax::Enum { constants }, members)
            }
            "interface_declaration" => (KindSyntax::Interface, node.child_by_field_name("body")),
            "annotation_type_declaration" => {
                (KindSyntax::Annotation, node.child_by_field_name("body"))
            }
            "record_declaration" => (KindSyntax::Record, node.child_by_field_name("body")),
            _ => return None,
        };

        let name = self.field_text(node, "name")?;
        let nested = members.map(|m| self.nested_types(m)).unwrap_or_default();
        Some(TypeSyntax { name, kind, nested })
    }

    fn nested_types(&self, body: Node) -> Vec<TypeSyntax> {
        let mut cursor = body.walk();
        let nested = body
            .named_children(&mut cursor)
            .filter_map(|child| self.type_decl(child))
            .collect();
        nested
    }

    fn fields(&self, body: Node) -> Vec<FieldSyntax> {
        let mut fields = Vec::new();
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if member.kind() != "field_declaration" {
                continue;
            }
            let Some(ty) = member.child_by_field_name("type") else {
                continue;
            };
            let ty = self.type_expr(ty);
            let visibility = find_named(member, &["modifiers"])
                .map(visibility_of)
                .unwrap_or_default();

            let mut declarators = member.walk();
            for declarator in member.children_by_field_name("declarator", &mut declarators) {
                let Some(name) = self.field_text(declarator, "name") else {
                    continue;
                };
                let dimensions = declarator
                    .child_by_field_name("dimensions")
                    .map(count_dimensions)
                    .unwrap_or(0);
                fields.push(FieldSyntax {
                    name,
                    ty: ty.clone().wrap_array(dimensions),
                    visibility,
                });
            }
        }
        fields
    }

    fn enum_constants(&self, body: Node) -> Vec<EnumConstant> {
        let mut cursor = body.walk();
        let constants = body
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "enum_constant")
            .filter_map(|constant| {
                let name = self.field_text(constant, "name")?;
                let arguments = constant
                    .child_by_field_name("arguments")
                    .map(|args| self.arguments(args));
                Some(EnumConstant { name, arguments })
            })
            .collect();
        constants
    }

    fn arguments(&self, list: Node) -> Vec<Expr> {
        let mut cursor = list.walk();
        let args = list
            .named_children(&mut cursor)
            .filter(|arg| !arg.is_extra())
            .map(|arg| self.expr(arg))
            .collect();
        args
    }

    fn expr(&self, node: Node) -> Expr {
        let kind = match node.kind() {
            "decimal_integer_literal"
            | "hex_integer_literal"
            | "octal_integer_literal"
            | "binary_integer_literal" => LiteralKind::Integer,
            "decimal_floating_point_literal" | "hex_floating_point_literal" => LiteralKind::Float,
            "true" | "false" => LiteralKind::Boolean,
            "character_literal" => LiteralKind::Char,
            "string_literal" | "text_block" => LiteralKind::String,
            "null_literal" => LiteralKind::Null,
            _ => return Expr::Other(self.text(node).to_owned()),
        };
        Expr::Literal(Literal {
            kind,
            text: self.text(node).to_owned(),
        })
    }

    fn type_expr(&self, node: Node) -> TypeExpr {
        match node.kind() {
            "integral_type" | "floating_point_type" | "boolean_type" | "void_type" => {
                TypeExpr::Primitive(self.text(node).trim().to_owned())
            }
            "type_identifier" | "identifier" => TypeExpr::Named {
                segments: vec![self.text(node).to_owned()],
                args: Vec::new(),
            },
            "scoped_type_identifier" | "generic_type" => {
                let mut segments = Vec::new();
                let mut args = Vec::new();
                self.collect_segments(node, &mut segments, &mut args);
                TypeExpr::Named { segments, args }
            }
            "array_type" => {
                let dimensions = node
                    .child_by_field_name("dimensions")
                    .map(count_dimensions)
                    .unwrap_or(1);
                match node.child_by_field_name("element") {
                    Some(element) => self.type_expr(element).wrap_array(dimensions),
                    None => TypeExpr::Primitive(self.text(node).to_owned()),
                }
            }
            "annotated_type" => match last_type_child(node) {
                Some(inner) => self.type_expr(inner),
                None => TypeExpr::Primitive(self.text(node).to_owned()),
            },
            "wildcard" => TypeExpr::Wildcard(
                last_type_child(node).map(|bound| Box::new(self.type_expr(bound))),
            ),
            _ => TypeExpr::Named {
                segments: vec![self.name_text(node)],
                args: Vec::new(),
            },
        }
    }

    /// Flatten `a.b.C<X>.D` into segments; keeps the arguments of the last
    /// generic segment seen.
    fn collect_segments(&self, node: Node, segments: &mut Vec<String>, args: &mut Vec<TypeExpr>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "type_identifier" | "identifier" => segments.push(self.text(child).to_owned()),
                "scoped_type_identifier" | "generic_type" => {
                    self.collect_segments(child, segments, args)
                }
                "type_arguments" => {
                    let mut inner = child.walk();
                    *args = child
                        .named_children(&mut inner)
                        .filter(|arg| is_type_node(*arg))
                        .map(|arg| self.type_expr(arg))
                        .collect();
                }
                _ => {}
            }
        }
    }
}

fn visibility_of(modifiers: Node) -> Visibility {
    let mut cursor = modifiers.walk();
    for token in modifiers.children(&mut cursor) {
        match token.kind() {
            "private" => return Visibility::Private,
            "protected" => return Visibility::Protected,
            "public" => return Visibility::Public,
            _ => {}
        }
    }
    Visibility::Package
}

fn count_dimensions(dimensions: Node) -> usize {
    let mut cursor = dimensions.walk();
    let count = dimensions
        .children(&mut cursor)
        .filter(|token| token.kind() == "[")
        .count();
    count
}

fn find_named<'t>(node: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()));
    found
}

fn has_token(node: Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == kind);
    found
}

fn is_type_node(node: Node) -> bool {
    !node.is_extra()
        && !matches!(
            node.kind(),
            "marker_annotation" | "annotation" | "super" | "dimensions"
        )
}

/// Last child that denotes a type, skipping annotations and bound keywords.
fn last_type_child(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let last = node
        .named_children(&mut cursor)
        .filter(|child| is_type_node(*child))
        .last();
    last
}
