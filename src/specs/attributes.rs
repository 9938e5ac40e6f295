// src/specs/attributes.rs
//
// The base attribute table and the event-handler table are processed as
// one stream: same columns, same classification, and names repeated
// across rows (per-element documentation splits, or base + event rows)
// merge into a single record.

use crate::catalogue::{Catalogue, SetKind};
use crate::core::dom::{Row, Table};
use crate::error::Error;
use crate::params::GenMode;
use crate::schema::{AttributeRecord, Scope, ValueKind};

pub const BASE_CAPTION: &str = "List of attributes";
pub const EVENT_CAPTION: &str = "List of event handler content attributes";

/// Column index of the "Element(s)" cell.
const SCOPE_COL: usize = 0;
/// Column index of the "Value" cell.
const VALUE_COL: usize = 2;

/// How the index words the value column of every event handler row.
const EVENT_HANDLER_MARK: &str = "Event handler content attribute";

/// Value-column phrasings the legacy mode accepts as a URL.
const URL_MARKS: &[&str] = &[
    "Valid URL potentially surrounded by spaces",
    "Valid non-empty URL potentially surrounded by spaces",
];

/// Classify and merge every row of the given tables, in order.
pub fn extract(
    tables: &[&Table],
    cat: &Catalogue,
    mode: GenMode,
) -> Result<Vec<AttributeRecord>, Error> {
    let mut out: Vec<AttributeRecord> = Vec::new();

    for table in tables {
        for row in table.rows() {
            // Attribute name is the code-formatted text in the header
            // cell. Rows without one are grouping rows.
            let Some(name) = row.th().and_then(|c| c.code_texts().into_iter().next()) else {
                continue;
            };
            merge_row(&mut out, name, row, cat, mode)?;
        }
    }

    Ok(out)
}

fn merge_row(
    out: &mut Vec<AttributeRecord>,
    name: String,
    row: &Row,
    cat: &Catalogue,
    mode: GenMode,
) -> Result<(), Error> {
    let kind = classify(&name, row, cat, mode)?;
    let scope = parse_scope(row);

    // Names legitimately repeat; linear search keeps insertion order and
    // is plenty at a few hundred rows.
    if let Some(prev) = out.iter_mut().find(|a| a.name == name) {
        if prev.kind.label() != kind.label() {
            return Err(Error::ClassificationConflict {
                name,
                have: prev.kind.label(),
                got: kind.label(),
            });
        }
        if prev.scope != Scope::Global && scope == Scope::Global {
            logd!("{}: promoted to global", name);
        }
        prev.scope.widen(scope);
    } else {
        out.push(AttributeRecord { name, kind, scope });
    }

    Ok(())
}

/// Two-tier classification: catalogue membership is authoritative; the
/// value text is only consulted for names no set claims.
fn classify(name: &str, row: &Row, cat: &Catalogue, mode: GenMode) -> Result<ValueKind, Error> {
    let value_text = row.td(VALUE_COL).map(|c| c.text()).unwrap_or_default();

    let kind = match cat.kind_of(name) {
        Some(SetKind::Safe) => ValueKind::Text,
        Some(SetKind::Enumerated) => {
            // The keyword list lives in the row, not in the catalogue.
            let allowed = row.td(VALUE_COL).map(|c| c.code_texts()).unwrap_or_default();
            ValueKind::Enum(allowed)
        }
        Some(SetKind::Boolean) => ValueKind::Boolean,
        Some(SetKind::Url) => ValueKind::Url,
        Some(SetKind::Unsafe) => ValueKind::Raw,
        None if value_text.contains(EVENT_HANDLER_MARK) => ValueKind::Raw,
        None => match mode {
            // Silent misclassification is a correctness hazard for the
            // sanitizer, so an unknown name aborts the run.
            GenMode::Strict => return Err(Error::UnknownAttribute(s!(name))),
            GenMode::Legacy => infer_legacy(&value_text),
        },
    };

    Ok(kind)
}

fn infer_legacy(value_text: &str) -> ValueKind {
    if value_text.contains("Boolean") {
        ValueKind::Boolean
    } else if URL_MARKS.iter().any(|m| value_text.contains(m)) {
        ValueKind::Url
    } else {
        ValueKind::Text
    }
}

/// "HTML elements" in the primary link means valid anywhere; otherwise
/// the scope is the code-formatted element names in the cell.
fn parse_scope(row: &Row) -> Scope {
    let Some(cell) = row.td(SCOPE_COL) else {
        return Scope::Elements(Vec::new());
    };
    match cell.first_link_text() {
        Some(text) if text.contains("HTML elements") => Scope::Global,
        _ => Scope::Elements(cell.code_texts()),
    }
}
