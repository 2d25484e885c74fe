//! Command implementations for the toolkit CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod menu;
pub mod show;
pub mod version;
