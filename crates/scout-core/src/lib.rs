//! # scout-core
//!
//! Core types shared across all Scout crates:
//! - Entity structs for the screening domain (candidate profile, conversation
//!   turns, submission records)
//! - The ordered technology → questions mapping and its length bounds
//! - The explicit per-candidate [`session::ScreeningSession`]
//! - Tech stack parsing and end-of-conversation detection
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod questions;
pub mod session;
pub mod techstack;
