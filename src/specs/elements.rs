// src/specs/elements.rs

use crate::core::dom::Table;
use crate::schema::{ContentKind, ElementRecord};

pub const CAPTION: &str = "List of elements";

/// Raw-text content no matter what the row says about children.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Column index of the "Children" cell.
const CHILDREN_COL: usize = 3;

/// One record per body row. The three branches are exhaustive and
/// mutually exclusive, so element classification cannot fail.
pub fn extract(table: &Table) -> Vec<ElementRecord> {
    let mut out = Vec::new();

    for row in table.rows() {
        // Tag name is the linked text in the header cell.
        // Rows without one are grouping rows.
        let Some(name) = row.th().and_then(|c| c.first_link_text()) else {
            continue;
        };

        let children = row.td(CHILDREN_COL).map(|c| c.text()).unwrap_or_default();
        let kind = if RAW_TEXT_TAGS.contains(&name.as_str()) {
            ContentKind::Raw
        } else if children.contains("empty") {
            ContentKind::Void
        } else {
            ContentKind::Normal
        };

        out.push(ElementRecord { name, kind });
    }

    out
}
