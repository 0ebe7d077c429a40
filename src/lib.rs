//! Terminal block-fall puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binaries, tests and
//! benches can use `tui_blockfall::{core, engine, input, term, types}`.

pub use tui_blockfall_core as core;
pub use tui_blockfall_engine as engine;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub mod headless;
