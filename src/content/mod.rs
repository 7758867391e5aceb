//! Localized content resolution.
//!
//! - `kind`: the table of content kinds (base filename, label, localization)
//! - `resolver`: maps a base filename and locale to the file to read
//! - `loader`: reads and parses a resolved file into typed content

mod kind;
mod loader;
mod resolver;

pub use kind::ContentKind;
pub use resolver::{ContentStore, Resolution};
