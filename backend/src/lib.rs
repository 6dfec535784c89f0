//! Skill Bridge Backend
//!
//! Skill gap analysis and AI-assisted learning roadmaps:
//! - Match percentage against a role's required skills
//! - AI-generated roadmaps with verified or fallback learning links
//! - India-focused job suggestions

pub mod ai;
pub mod analysis;
pub mod api;
pub mod config;

pub use analysis::*;
pub use api::*;
