//! Wire-format data models shared between the folio server and its clients.
//!
//! Both entity types are derived functions of filesystem state at request
//! time; nothing here is persisted or cached.

pub mod project;
pub mod showcase;

pub use project::Project;
pub use showcase::{Language, TechShowcase};
