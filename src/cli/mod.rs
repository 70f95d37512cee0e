//! Interactive command layer.
//!
//! Reads menu choices and arguments, calls into the network core and renders the
//! returned values. Nothing here mutates zone state directly.

pub mod input;
pub mod menu;
pub mod render;
