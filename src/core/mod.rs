// src/core/mod.rs

pub mod dom;
pub mod html;
pub mod sanitize;
