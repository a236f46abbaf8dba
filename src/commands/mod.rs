//! Command Wrappers
//!
//! Frontend bindings to the server API and to browser facilities,
//! organized by domain.

mod remote;
mod files;
mod dialog;

// Re-export all public items
pub use remote::*;
pub use files::*;
pub use dialog::*;
