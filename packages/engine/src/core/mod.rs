//! Core - crate-wide helpers (macros must load first)

#[macro_use]
pub mod utils;
