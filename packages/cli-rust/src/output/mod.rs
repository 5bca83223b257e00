//! Output utilities for CLI commands
//!
//! Color utilities for consistent status styling across commands.

pub mod colors;

pub use colors::{component_status_style, tunnel_status_style};
