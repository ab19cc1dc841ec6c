//! Terminal rendering for the CLI.
//!
//! `theme` holds every color, icon and border glyph. Views build on the
//! primitives, widgets and blocks and return plain strings so they can be
//! snapshot-tested.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
