//! Terminal rendering for the block-fall game.
//!
//! Rendering is split in two stages: [`GameView`] paints a `GameSnapshot` into a
//! [`FrameBuffer`] of styled glyphs without touching the terminal, and
//! [`TerminalRenderer`] flushes that buffer through crossterm, redrawing only
//! the spans that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, Span, TerminalRenderer};
