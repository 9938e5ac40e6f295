// src/catalogue.rs
//
// Hand-maintained ground truth for attribute classification. Free-text
// value descriptions in the index are too irregular (and for some names
// too security-sensitive) to classify by pattern alone, so every name
// listed here is classified by list membership before any text is read.
//
// The lists must stay pairwise disjoint and every name must still exist
// in the index; validate::check enforces both on every run.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetKind {
    Safe,
    Enumerated,
    Boolean,
    Url,
    Unsafe,
}

impl SetKind {
    pub fn label(self) -> &'static str {
        match self {
            SetKind::Safe => "safe",
            SetKind::Enumerated => "enum",
            SetKind::Boolean => "boolean",
            SetKind::Url => "url",
            SetKind::Unsafe => "unsafe",
        }
    }
}

// Plain text the sanitizer can escape and pass through: labels, ids,
// integers, dates, language tags, form validation bounds.
const SAFE: &[&str] = &[
    "abbr",
    "accesskey",
    "alt",
    "autocomplete",
    "challenge",
    "class",
    "cols",
    "colspan",
    "command",
    "content",
    "contextmenu",
    "coords",
    "datetime",
    "dirname",
    "download",
    "dropzone",
    "for",
    "form",
    "formtarget",
    "headers",
    "height",
    "high",
    "hreflang",
    "id",
    "itemref",
    "keytype",
    "label",
    "lang",
    "list",
    "low",
    "max",
    "maxlength",
    "mediagroup",
    "menu",
    "min",
    "minlength",
    "name",
    "optimum",
    "pattern",
    "placeholder",
    "radiogroup",
    "rel",
    "rows",
    "rowspan",
    "size",
    "sizes",
    "sorted",
    "span",
    "srclang",
    "start",
    "step",
    "tabindex",
    "target",
    "title",
    "type",
    "usemap",
    "value",
    "width",
];

// Closed keyword sets; the allowed values come from each row, not from here.
const ENUMERATED: &[&str] = &[
    "contenteditable",
    "crossorigin",
    "dir",
    "draggable",
    "enctype",
    "formenctype",
    "formmethod",
    "inputmode",
    "kind",
    "method",
    "preload",
    "scope",
    "shape",
    "spellcheck",
    "translate",
    "wrap",
];

const BOOLEAN: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "novalidate",
    "open",
    "readonly",
    "required",
    "reversed",
    "scoped",
    "seamless",
    "selected",
    "typemustmatch",
];

const URL: &[&str] = &[
    "action",
    "cite",
    "data",
    "formaction",
    "href",
    "icon",
    "itemid",
    "itemprop",
    "itemtype",
    "manifest",
    "ping",
    "poster",
    "src",
];

// Always Raw no matter how the row is worded: CSS, charsets, pragmas,
// sandboxing, inline documents.
const UNSAFE: &[&str] = &[
    "accept",
    "accept-charset",
    "charset",
    "http-equiv",
    "media",
    "sandbox",
    "srcdoc",
    "srcset",
    "style",
];

/// The five override sets as one immutable value. Built once at startup
/// and passed explicitly into the classifiers.
pub struct Catalogue {
    sets: [(SetKind, &'static [&'static str]); 5],
}

impl Catalogue {
    pub fn builtin() -> Self {
        Self::new([
            (SetKind::Safe, SAFE),
            (SetKind::Enumerated, ENUMERATED),
            (SetKind::Boolean, BOOLEAN),
            (SetKind::Url, URL),
            (SetKind::Unsafe, UNSAFE),
        ])
    }

    pub fn new(sets: [(SetKind, &'static [&'static str]); 5]) -> Self {
        Self { sets }
    }

    pub fn sets(&self) -> &[(SetKind, &'static [&'static str]); 5] {
        &self.sets
    }

    /// Which set, if any, claims `name`. Sets are walked in declaration
    /// order, but validate::check guarantees at most one can match, so
    /// there is no hidden priority between them.
    pub fn kind_of(&self, name: &str) -> Option<SetKind> {
        self.sets
            .iter()
            .find(|(_, names)| names.contains(&name))
            .map(|(kind, _)| *kind)
    }
}
