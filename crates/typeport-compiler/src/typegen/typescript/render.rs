//! Declaration and import rendering.

use crate::registry::{EnumValue, TranslatedEnum, TranslatedInterface, TranslatedType};

use super::{Config, EnumFallback};

/// Render a translated type as a TypeScript declaration, without a trailing newline.
pub fn render_type(ty: &TranslatedType, config: &Config) -> String {
    match ty {
        TranslatedType::Interface(interface) => render_interface(interface, config),
        TranslatedType::Enum(decl) => render_enum(decl, config),
    }
}

/// `import {Name} from 'module';`
pub fn render_import(name: &str, module: &str) -> String {
    format!("import {{{name}}} from '{module}';")
}

fn render_interface(interface: &TranslatedInterface, config: &Config) -> String {
    let c = config.colors;
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} {}",
        c.keyword("export"),
        c.keyword("interface"),
        c.name(&interface.name)
    ));
    if let Some(extends) = &interface.extends {
        out.push_str(&format!(" {} {}", c.keyword("extends"), c.name(extends)));
    }
    out.push_str(" {\n");

    for field in &interface.fields {
        out.push_str(&format!(
            "{}{}: {};\n",
            config.indent,
            field.name,
            c.name(&field.ty)
        ));
    }
    out.push('}');
    out
}

fn render_enum(decl: &TranslatedEnum, config: &Config) -> String {
    let c = config.colors;
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} {} {{\n",
        c.keyword("export"),
        c.keyword("enum"),
        c.name(&decl.name)
    ));

    let members: Vec<_> = decl
        .values
        .iter()
        .map(|value| format!("{}{}", config.indent, render_member(value, config)))
        .collect();
    if !members.is_empty() {
        out.push_str(&members.join(",\n"));
        out.push('\n');
    }
    out.push('}');
    out
}

fn render_member(value: &EnumValue, config: &Config) -> String {
    let c = config.colors;
    match (&value.value, config.enum_fallback) {
        (Some(literal), _) => format!("{} = {}", value.name, c.value(literal)),
        (None, EnumFallback::QuotedName) => {
            format!("{} = {}", value.name, c.value(&format!("\"{}\"", value.name)))
        }
        (None, EnumFallback::Bare) => value.name.clone(),
    }
}
