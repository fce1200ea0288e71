//! Library crate root re-exporting the gate, manifest, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod gate;
pub mod manifest;
