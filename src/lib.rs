//! Small, runnable snippets for two language features:
//!
//! - [`broadcast`]: an object with a multi-subscriber callback slot
//!   (`cargo run --bin events`)
//! - [`record`] and [`projection`]: read-only value records and query-style
//!   projections (`cargo run --bin anonymous_types`)
//!
//! The two units are independent.

pub mod error;
pub mod logging;
pub mod record;

pub mod broadcast;
pub mod projection;
pub mod report;

pub use error::{Result, SnippetError};
