// src/core/html.rs
//
// Case-insensitive tag-block scanning over raw document text. No tree is
// built here; core::dom layers its table/row/cell views on top. Close tags
// are matched textually, so same-name nesting is not supported; the index
// page never nests the tags we scan for.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Reusable scanner: lowercases the source once so repeated block searches
/// don't re-lowercase a multi-megabyte document on every call.
/// ASCII lowercasing keeps byte offsets identical between `src` and `lc`.
pub struct Scan<'a> {
    src: &'a str,
    lc: String,
}

impl<'a> Scan<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            lc: to_lower(src),
        }
    }

    /// Find the next `<name …>…</name>` block at or after `from`.
    /// Returns byte offsets spanning the whole block, close tag included.
    /// `name` must be lowercase. The character after the tag name is
    /// checked, so "a" will not match `<abbr` or `<area`.
    pub fn next_block(&self, name: &str, from: usize) -> Option<(usize, usize)> {
        let open = join!("<", name);
        let close = join!("</", name, ">");

        let mut at = from;
        let start = loop {
            let hit = self.lc.get(at..)?.find(&open)? + at;
            if name_boundary(&self.lc, hit + open.len()) {
                break hit;
            }
            at = hit + 1;
        };
        let open_end = self.src[start..].find('>')? + start + 1;
        let end_rel = self.lc[open_end..].find(&close)?;
        Some((start, open_end + end_rel + close.len()))
    }
}

fn name_boundary(lc: &str, i: usize) -> bool {
    match lc[i..].chars().next() {
        Some('>') | Some('/') => true,
        Some(c) => c.is_ascii_whitespace(),
        None => false,
    }
}

/// Slice between the end of the opening tag and the start of the final
/// closing tag of a block returned by `Scan::next_block`.
pub fn inner_after_open_tag(block: &str) -> &str {
    match (block.find('>'), block.rfind('<')) {
        (Some(oe), Some(cs)) if cs > oe => &block[oe + 1..cs],
        _ => "",
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
