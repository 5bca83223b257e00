//! CLI command implementations
//!
//! This module contains the implementations for the sync and check commands.

mod check;
mod sync;

pub use check::{CheckArgs, cmd_check};
pub use sync::{SyncArgs, cmd_sync};
