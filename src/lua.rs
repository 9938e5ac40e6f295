// src/lua.rs
// Minimal Lua table-literal writer. std-only.
//
// The sanitizer loads the output with a plain `require`, so the grammar
// is deliberately tiny: quoted strings, the bare `true` literal and
// nested `{…}` sequences. Rendering happens entirely in memory; callers
// decide when (and whether) the finished text reaches a sink.

use crate::params::GenMode;
use crate::schema::{AttributeRecord, ElementRecord, Scope, ValueKind};

const BANNER: &str = "-- THIS FILE WAS AUTOMATICALLY GENERATED. DO NOT EDIT BY HAND --";

/* ---------------- Value rendering ---------------- */

/// 'x', with embedded single quotes escaped.
pub fn quote(s: &str) -> String {
    join!("'", &s.replace('\'', "\\'"), "'")
}

/// {a, b, c} from already-rendered items.
pub fn list(items: &[String]) -> String {
    join!("{", &items.join(", "), "}")
}

fn value_kind(kind: &ValueKind) -> String {
    match kind {
        ValueKind::Enum(values) => {
            let rendered: Vec<String> = values.iter().map(|v| quote(v)).collect();
            list(&[quote("Enum"), list(&rendered)])
        }
        other => list(&[quote(other.label())]),
    }
}

fn scope(scope: &Scope) -> String {
    match scope {
        Scope::Global => s!("true"),
        Scope::Elements(names) => {
            let rendered: Vec<String> = names.iter().map(|n| quote(n)).collect();
            list(&rendered)
        }
    }
}

/* ---------------- Schema rendering ---------------- */

/// Render the whole schema as one string, insertion order preserved.
/// Byte-identical across runs on identical input.
pub fn render(elements: &[ElementRecord], attrs: &[AttributeRecord], mode: GenMode) -> String {
    let mut out = join!(BANNER, "\n\n", "local M = {}\n");

    out.push_str("M.Elems = ");
    write_rows(
        &mut out,
        elements
            .iter()
            .map(|e| vec![quote(&e.name), quote(e.kind.label(mode))]),
        ",",
    );

    out.push_str("M.Attrs = ");
    write_rows(
        &mut out,
        attrs
            .iter()
            .map(|a| vec![quote(&a.name), value_kind(&a.kind), scope(&a.scope)]),
        ",\n    ",
    );

    out.push_str("return M\n");
    out
}

fn write_rows<I>(out: &mut String, rows: I, sep: &str)
where
    I: Iterator<Item = Vec<String>>,
{
    out.push_str("{\n");
    for fields in rows {
        out.push_str("  {");
        out.push_str(&fields.join(sep));
        out.push_str("},\n");
    }
    out.push_str("}\n");
}
