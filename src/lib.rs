//! Read-only content API for the English tutor website.
//!
//! Content lives on disk as one baseline file per kind (`about.md`,
//! `lessons.json`, ...) with optional locale siblings (`about.ru.md`).
//! The [`content::ContentStore`] resolves and loads it, [`preview`] derives
//! display projections, and [`server`] exposes everything over HTTP.

pub mod config;
pub mod content;
pub mod error;
pub mod locale;
pub mod models;
pub mod preview;
pub mod server;
