// src/core/dom.rs
//! Navigable view over the saved index page.
//!
//! `Document` collects every `<table>` block; each `Table` exposes its
//! caption and `<tbody>` rows; each `Row` exposes its header cell plus
//! indexed data cells. Cells answer the three queries classification
//! needs: stripped text, embedded `<code>` tokens, first `<a>` text.
//! Everything is extracted up front into owned strings, so the source
//! document can be dropped as soon as parsing returns.

use super::html::{self, Scan};
use super::sanitize::normalize_entities;
use crate::error::Error;

pub struct Document {
    tables: Vec<Table>,
}

pub struct Table {
    caption: String,
    rows: Vec<Row>,
}

pub struct Row {
    th: Option<Cell>,
    tds: Vec<Cell>,
}

pub struct Cell {
    inner: String, // raw inner markup of the cell
}

impl Document {
    pub fn parse(doc: &str) -> Self {
        let scan = Scan::new(doc);
        let mut tables = Vec::new();
        let mut pos = 0usize;
        while let Some((s, e)) = scan.next_block("table", pos) {
            tables.push(Table::parse(&doc[s..e]));
            pos = e;
        }
        logd!("document: {} tables", tables.len());
        Self { tables }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// The one table whose caption contains `needle`. Zero or several
    /// matches means the document does not have the expected shape, and
    /// nothing downstream can be trusted.
    pub fn table_with_caption(&self, needle: &str) -> Result<&Table, Error> {
        let mut hits = self.tables.iter().filter(|t| t.caption.contains(needle));
        match (hits.next(), hits.next()) {
            (Some(table), None) => Ok(table),
            (first, _) => Err(Error::AmbiguousTable {
                caption: s!(needle),
                count: first.map_or(0, |_| 2 + hits.count()),
            }),
        }
    }
}

impl Table {
    fn parse(block: &str) -> Self {
        let scan = Scan::new(block);
        let caption = match scan.next_block("caption", 0) {
            Some((s, e)) => cell_text(html::inner_after_open_tag(&block[s..e])),
            None => s!(),
        };

        // Row scan is restricted to <tbody> when present, which keeps
        // <thead> header rows out of the data.
        let body = match scan.next_block("tbody", 0) {
            Some((s, e)) => &block[s..e],
            None => block,
        };
        let bscan = Scan::new(body);
        let mut rows = Vec::new();
        let mut pos = 0usize;
        while let Some((s, e)) = bscan.next_block("tr", pos) {
            rows.push(Row::parse(&body[s..e]));
            pos = e;
        }

        Self { caption, rows }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl Row {
    fn parse(block: &str) -> Self {
        let scan = Scan::new(block);
        let th = scan
            .next_block("th", 0)
            .map(|(s, e)| Cell::new(html::inner_after_open_tag(&block[s..e])));

        let mut tds = Vec::new();
        let mut pos = 0usize;
        while let Some((s, e)) = scan.next_block("td", pos) {
            tds.push(Cell::new(html::inner_after_open_tag(&block[s..e])));
            pos = e;
        }

        Self { th, tds }
    }

    pub fn th(&self) -> Option<&Cell> {
        self.th.as_ref()
    }

    pub fn td(&self, i: usize) -> Option<&Cell> {
        self.tds.get(i)
    }
}

impl Cell {
    fn new(inner: &str) -> Self {
        Self { inner: s!(inner) }
    }

    /// Tag-stripped, entity- and whitespace-normalized cell text.
    pub fn text(&self) -> String {
        cell_text(&self.inner)
    }

    /// Inner text of every embedded `<code>`, in document order.
    pub fn code_texts(&self) -> Vec<String> {
        let scan = Scan::new(&self.inner);
        let mut out = Vec::new();
        let mut pos = 0usize;
        while let Some((s, e)) = scan.next_block("code", pos) {
            out.push(cell_text(html::inner_after_open_tag(&self.inner[s..e])));
            pos = e;
        }
        out
    }

    /// Inner text of the first embedded hyperlink, if any.
    pub fn first_link_text(&self) -> Option<String> {
        let scan = Scan::new(&self.inner);
        scan.next_block("a", 0)
            .map(|(s, e)| cell_text(html::inner_after_open_tag(&self.inner[s..e])))
    }
}

fn cell_text(inner: &str) -> String {
    html::strip_tags(normalize_entities(inner))
}
