//! Type name mapper: Java type references to TypeScript type expressions.

use typeport_core::{NamedRef, TypeRef};

use crate::invariants;

/// Scalar and JSON container types, matched on the exact qualified name.
const SCALARS: &[(&str, &str)] = &[
    ("java.lang.String", "string"),
    ("java.lang.Character", "string"),
    ("char", "string"),
    ("byte", "number"),
    ("java.lang.Byte", "number"),
    ("int", "number"),
    ("java.lang.Integer", "number"),
    ("float", "number"),
    ("java.lang.Float", "number"),
    ("double", "number"),
    ("java.lang.Double", "number"),
    ("long", "number"),
    ("java.lang.Long", "number"),
    ("boolean", "boolean"),
    ("java.lang.Boolean", "boolean"),
    ("com.google.gson.JsonObject", "Dict<string>"),
    ("com.google.gson.JsonArray", "any[]"),
];

/// Placeholder for a missing or unbounded (`?`) type argument.
const ANY: &str = "any";

/// Map a type reference to its TypeScript expression.
///
/// Declared and unknown types map to their simple name, which the emitted
/// output is expected to bring into scope. Type arguments of other generic
/// types are dropped. Wildcard arguments map through their bound.
///
/// # Panics
///
/// On a wildcard outside a type-argument position.
pub fn map_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Array(element) => format!("{}[]", map_type(element)),
        TypeRef::Named(named) => map_named(named),
        TypeRef::Wildcard(_) => invariants::unmappable_type(ty),
    }
}

fn map_named(named: &NamedRef) -> String {
    let arg = |i: usize| {
        named
            .args
            .get(i)
            .map_or_else(|| ANY.to_owned(), map_argument)
    };

    match named.qualified_name.as_str() {
        "java.util.Set" => format!("Set<{}>", arg(0)),
        "java.util.List" | "java.util.Collection" => format!("{}[]", arg(0)),
        "java.util.Map" => format!("Map<{}, {}>", arg(0), arg(1)),
        qualified_name => SCALARS
            .iter()
            .find(|(java, _)| *java == qualified_name)
            .map_or_else(|| named.simple_name.clone(), |(_, ts)| (*ts).to_owned()),
    }
}

fn map_argument(arg: &TypeRef) -> String {
    arg.bound().map_or_else(|| ANY.to_owned(), map_type)
}
