//! Shell commands
//!
//! Each command returns a `CommandResult` envelope that is printed as JSON.

pub mod features;
pub mod navigation;
pub mod privacy;
pub mod session;
pub mod settings;
pub mod tabs;

pub use tabs::CommandResult;
