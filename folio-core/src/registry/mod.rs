//! Stateless on-demand directory scanners producing entity listings.

pub mod projects;
pub mod tech;

pub use projects::ProjectRegistry;
pub use tech::TechRegistry;
