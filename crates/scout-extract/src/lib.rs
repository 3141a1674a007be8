//! # scout-extract
//!
//! Turns unstructured language-model output into an ordered
//! technology → questions mapping.
//!
//! Model output rarely follows the requested format exactly, so extraction is
//! heuristic and never fails:
//! 1. A header pass marks lines that name a requested technology.
//! 2. A collection pass gathers question-like lines under the most recent
//!    header, stripping enumeration markers.
//! 3. If nothing was collected, any long line containing `?` is spread evenly
//!    across the technologies.
//! 4. Every list is padded with filler questions up to the minimum and cut at
//!    the maximum.
//!
//! When the model call itself fails, [`upstream_fallback`] produces a small
//! fixed set instead.
//!
//! # Usage
//!
//! ```
//! use scout_core::questions::QuestionBounds;
//! use scout_extract::extract;
//!
//! let raw = "Rust:\n1. What does the borrow checker enforce?\n";
//! let techs = vec!["Rust".to_string()];
//! let questions = extract(raw, &techs, QuestionBounds::default());
//! assert_eq!(questions["Rust"][0], "What does the borrow checker enforce?");
//! assert_eq!(questions["Rust"].len(), 3);
//! ```

mod extractor;
pub mod fallback;
mod normalize;
pub mod rules;

pub use extractor::extract;
pub use fallback::upstream_fallback;
pub use normalize::normalize;
