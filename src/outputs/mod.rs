//! Output generation for the two stages.
//!
//! # Submodules
//!
//! - [`json`]: Writes filtered article lists as pretty-printed JSON
//! - [`markdown`]: Renders article lists as a Markdown digest

pub mod json;
pub mod markdown;
