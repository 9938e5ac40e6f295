// src/runner.rs
use std::io::Write;

use crate::catalogue::Catalogue;
use crate::core::dom::Document;
use crate::error::Error;
use crate::params::Params;
use crate::{lua, specs, validate};

/// Summary of what was produced.
pub struct RunSummary {
    pub elements: usize,
    pub attributes: usize,
}

/// Full pipeline over an in-memory document: locate the three tables,
/// classify, validate, render. The schema is written to `out` in one
/// piece only after validation passes, so a failing run never leaves
/// partial output behind.
pub fn run(doc_text: &str, params: &Params, out: &mut dyn Write) -> Result<RunSummary, Error> {
    let cat = Catalogue::builtin();
    let doc = Document::parse(doc_text);

    let element_table = doc.table_with_caption(specs::elements::CAPTION)?;
    let base_table = doc.table_with_caption(specs::attributes::BASE_CAPTION)?;
    let event_table = doc.table_with_caption(specs::attributes::EVENT_CAPTION)?;

    let elements = specs::elements::extract(element_table);
    logf!("elements: {} records", elements.len());

    let attributes = specs::attributes::extract(&[base_table, event_table], &cat, params.mode)?;
    logf!("attributes: {} records after merge", attributes.len());

    validate::check(&cat, &attributes)?;

    let text = lua::render(&elements, &attributes, params.mode);
    out.write_all(text.as_bytes())?;

    Ok(RunSummary {
        elements: elements.len(),
        attributes: attributes.len(),
    })
}
