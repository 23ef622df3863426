use std::fs;

use indoc::indoc;

use typeport_core::{
    DeclKind, EnumConstant, Expr, FieldDecl, LiteralKind, Model, SourceModel, TypeRef, Visibility,
};

use crate::{Error, JavaModelBuilder, parse_source};

fn fields<'m>(model: &'m Model, class: &str) -> &'m [FieldDecl] {
    let id = model.lookup(class).expect("class is declared");
    match &model.decl(id).kind {
        DeclKind::Class(class) => &class.fields,
        other => panic!("expected class, got {}", other.label()),
    }
}

fn constants<'m>(model: &'m Model, name: &str) -> &'m [EnumConstant] {
    let id = model.lookup(name).expect("enum is declared");
    match &model.decl(id).kind {
        DeclKind::Enum(decl) => &decl.constants,
        other => panic!("expected enum, got {}", other.label()),
    }
}

fn named(ty: &TypeRef) -> &str {
    match ty {
        TypeRef::Named(named) => &named.simple_name,
        other => panic!("expected named ref, got {other:?}"),
    }
}

#[test]
fn field_visibility_and_declarators() {
    let model = parse_source(
        "Point.java",
        indoc! {"
            package geo;

            public class Point {
                public int x, y;
                protected double weight;
                String label;
                private long secret;
                static final int ORIGIN = 0;
            }
        "},
    )
    .unwrap();

    let fields = fields(&model, "geo.Point");
    let summary: Vec<_> = fields
        .iter()
        .map(|f| (f.name.as_str(), named(&f.ty), f.visibility))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("x", "int", Visibility::Public),
            ("y", "int", Visibility::Public),
            ("weight", "double", Visibility::Protected),
            ("label", "String", Visibility::Package),
            ("secret", "long", Visibility::Private),
            ("ORIGIN", "int", Visibility::Package),
        ]
    );
}

#[test]
fn array_dimensions_on_type_and_declarator() {
    let model = parse_source(
        "Grid.java",
        indoc! {"
            class Grid {
                int[] row;
                int cells[][];
                String[][] names;
            }
        "},
    )
    .unwrap();

    let fields = fields(&model, "Grid");
    let depth = |ty: &TypeRef| {
        let mut depth = 0;
        let mut current = ty;
        while let TypeRef::Array(element) = current {
            depth += 1;
            current = element;
        }
        (depth, named(current).to_owned())
    };
    assert_eq!(depth(&fields[0].ty), (1, "int".to_owned()));
    assert_eq!(depth(&fields[1].ty), (2, "int".to_owned()));
    assert_eq!(depth(&fields[2].ty), (2, "String".to_owned()));
}

#[test]
fn generic_arguments_and_wildcards() {
    let model = parse_source(
        "Box.java",
        indoc! {"
            import java.util.*;
            class Box {
                Map<String, List<Integer>> index;
                List<? extends Number> numbers;
            }
        "},
    )
    .unwrap();

    let fields = fields(&model, "Box");
    let index = &fields[0].ty;
    assert_eq!(named(index), "Map");
    assert_eq!(named(&index.args()[0]), "String");
    assert_eq!(named(&index.args()[1]), "List");
    assert_eq!(named(&index.args()[1].args()[0]), "Integer");

    match &fields[1].ty.args()[0] {
        TypeRef::Wildcard(Some(bound)) => assert_eq!(named(bound), "Number"),
        other => panic!("expected bounded wildcard, got {other:?}"),
    }
}

#[test]
fn enum_constant_arguments() {
    let model = parse_source(
        "Level.java",
        indoc! {r#"
            public enum Level {
                LOW(1),
                HIGH("high", 2),
                ON(true),
                PLAIN,
                EMPTY(),
                COMPUTED(Other.VALUE);

                private final Object value;
                Level(Object value) { this.value = value; }
            }
        "#},
    )
    .unwrap();

    let constants = constants(&model, "Level");
    let names: Vec<_> = constants.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["LOW", "HIGH", "ON", "PLAIN", "EMPTY", "COMPUTED"]);

    let first_arg = |i: usize| constants[i].arguments.as_ref().and_then(|a| a.first().cloned());
    match first_arg(0) {
        Some(Expr::Literal(lit)) => {
            assert_eq!(lit.kind, LiteralKind::Integer);
            assert_eq!(lit.text, "1");
        }
        other => panic!("unexpected {other:?}"),
    }
    match first_arg(1) {
        Some(Expr::Literal(lit)) => {
            assert_eq!(lit.kind, LiteralKind::String);
            assert_eq!(lit.text, r#""high""#);
        }
        other => panic!("unexpected {other:?}"),
    }
    match first_arg(2) {
        Some(Expr::Literal(lit)) => assert_eq!(lit.kind, LiteralKind::Boolean),
        other => panic!("unexpected {other:?}"),
    }
    assert!(constants[3].arguments.is_none());
    assert_eq!(constants[4].arguments.as_deref(), Some(&[][..]));
    assert!(matches!(first_arg(5), Some(Expr::Other(_))));
}

#[test]
fn non_data_kinds_are_recorded() {
    let model = parse_source(
        "Kinds.java",
        indoc! {"
            package k;
            interface Shape {}
            @interface Marker {}
            record Pair(int a, int b) {}
        "},
    )
    .unwrap();

    let labels: Vec<_> = model
        .iter()
        .map(|(_, decl)| (decl.qualified_name.as_str(), decl.kind.label()))
        .collect();
    assert_eq!(
        labels,
        [
            ("k.Shape", "interface"),
            ("k.Marker", "annotation"),
            ("k.Pair", "record"),
        ]
    );
    assert!(model.search("k.").is_empty());
}

#[test]
fn syntax_errors_still_produce_a_model() {
    let model = parse_source("Broken.java", "class Broken { int ok; } }").unwrap();
    assert!(model.lookup("Broken").is_some());
}

#[test]
fn builder_scans_directory_tree() {
    let dir = tempfile::tempdir().unwrap();
    let pkg = dir.path().join("com/acme");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("User.java"), "package com.acme; class User { Role role; }").unwrap();
    fs::write(pkg.join("Role.java"), "package com.acme; enum Role { ADMIN }").unwrap();
    fs::write(pkg.join("notes.txt"), "not java").unwrap();

    let model = JavaModelBuilder::new().root(dir.path()).build().unwrap();

    let names: Vec<_> = model
        .iter()
        .map(|(_, decl)| decl.qualified_name.as_str())
        .collect();
    assert_eq!(names, ["com.acme.Role", "com.acme.User"]);

    let user = model.decl(model.lookup("com.acme.User").unwrap());
    assert_eq!(user.location.root, dir.path());
    assert_eq!(user.location.file, pkg.join("User.java"));
    assert_eq!(
        fields(&model, "com.acme.User")[0].ty.declaration(),
        model.lookup("com.acme.Role")
    );
}

#[test]
fn builder_combines_roots() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("A.java"), "class A { B b; }").unwrap();
    fs::write(second.path().join("B.java"), "class B {}").unwrap();

    let model = JavaModelBuilder::new()
        .roots([first.path(), second.path()])
        .build()
        .unwrap();

    assert_eq!(model.len(), 2);
    assert_eq!(fields(&model, "A")[0].ty.declaration(), model.lookup("B"));
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = JavaModelBuilder::new()
        .root(dir.path().join("absent"))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingRoot(_)));
    assert!(err.to_string().starts_with("classpath root not found: "));
}
