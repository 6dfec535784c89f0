//! Analysis Module - Skill gap and learning roadmap core
//!
//! Architecture:
//! - Catalog: immutable role -> required skills and skill -> display name tables
//! - Skill Gap: match percentage plus matching / missing partition
//! - Link Validator: memoized reachability checks for external links
//! - Fallback: deterministic replacement links
//! - Normalizer: AI step candidates -> complete roadmap steps
//! - Roadmap: orchestrates one roadmap generation
//! - Jobs: AI job suggestions with a static fallback

pub mod catalog;
pub mod fallback;
pub mod jobs;
pub mod link_validator;
pub mod normalizer;
pub mod roadmap;
pub mod skill_gap;
pub mod types;

pub use catalog::*;
pub use fallback::*;
pub use jobs::*;
pub use link_validator::*;
pub use normalizer::*;
pub use roadmap::*;
pub use skill_gap::*;
pub use types::*;
