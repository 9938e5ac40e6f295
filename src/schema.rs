// src/schema.rs
//
// The finished schema records. ElementRecord is write-once; an
// AttributeRecord only ever changes by widening its scope (see
// specs::attributes for the merge rules).

use crate::params::GenMode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRecord {
    pub name: String,
    pub kind: ContentKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Raw,
    Void,
    Normal,
}

impl ContentKind {
    /// Output vocabulary. Normal content prints as "Flow" in legacy mode;
    /// both labels mean the same thing to the sanitizer.
    pub fn label(self, mode: GenMode) -> &'static str {
        match self {
            ContentKind::Raw => "Raw",
            ContentKind::Void => "Void",
            ContentKind::Normal => match mode {
                GenMode::Strict => "Normal",
                GenMode::Legacy => "Flow",
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Enum(Vec<String>),
    Boolean,
    Url,
    Raw,
}

impl ValueKind {
    /// Kind tag only. Enum value lists are not part of the identity:
    /// repeated rows are compared by label, first row's values win.
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Text => "Text",
            ValueKind::Enum(_) => "Enum",
            ValueKind::Boolean => "Boolean",
            ValueKind::Url => "URL",
            ValueKind::Raw => "Raw",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Valid on any element.
    Global,
    /// Valid on the named elements only. Order-preserving set.
    Elements(Vec<String>),
}

impl Scope {
    /// Widening only: Global never narrows, scoped sets only grow.
    pub fn widen(&mut self, new: Scope) {
        match (&mut *self, new) {
            (Scope::Global, _) => {}
            (Scope::Elements(have), Scope::Elements(more)) => {
                for name in more {
                    if !have.contains(&name) {
                        have.push(name);
                    }
                }
            }
            (slot, Scope::Global) => *slot = Scope::Global,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeRecord {
    pub name: String,
    pub kind: ValueKind,
    pub scope: Scope,
}
