// src/params.rs
use std::path::PathBuf;

/// Classification strategy for attribute rows no override covers, and the
/// display vocabulary that goes with it. Strict aborts on anything it
/// cannot place; legacy falls back to value-text patterns and labels
/// normal-content elements "Flow" instead of "Normal".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenMode {
    Strict,
    Legacy,
}

#[derive(Clone)]
pub struct Params {
    pub input: Option<PathBuf>, // saved index page; None reads stdin
    pub out: Option<PathBuf>,   // None writes stdout
    pub mode: GenMode,
    pub verbose: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            out: None,
            mode: GenMode::Strict,
            verbose: false,
        }
    }
}
