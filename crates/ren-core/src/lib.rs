//! Core library for the Ren string replacement tool.
//!
//! This crate provides collision-safe batch substitution of literal
//! strings: many `(old, new)` pairs applied in a single pass without the
//! substitutions interfering with each other, including simultaneous
//! `old <-> new` swaps.
//!
//! # How it works
//!
//! Every requested pair becomes an [`Item`](models::Item) that routes its
//! transformation through a placeholder token (see [`token`]): the first
//! phase converts each original value into its placeholder, the second
//! resolves placeholders into final values. A [`Plan`](plan::Plan) orders
//! all first phases before any second phase, so no replacement value is
//! ever visible while a source pattern is still pending. A static
//! consistency check at construction time rejects pair sets whose
//! patterns would still interfere; an inconsistent plan refuses to touch
//! any file.
//!
//! # Quick Start
//!
//! ```rust
//! use ren_core::{ItemList, Plan, BracketTag};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pairs = vec![
//!     ("foo".to_string(), "bar".to_string()),
//!     ("baz".to_string(), "qux".to_string()),
//! ];
//! let items = ItemList::from_pairs(&pairs, &BracketTag)?;
//! let plan = Plan::new(&items, false, &BracketTag);
//!
//! assert!(plan.is_consistent());
//! assert_eq!(plan.apply("foo and baz")?, "bar and qux");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod pairs;
pub mod plan;
pub mod token;

// Re-export commonly used types
pub use display::{Conflicts, PlanListing};
pub use error::{ReplacerError, Result};
pub use models::{Item, ItemList, Step};
pub use pairs::{parse_pairs, read_pairs_file};
pub use plan::{Conflict, ConflictKind, Plan, OUTPUT_SUFFIX};
pub use token::{BracketTag, PlaceholderScheme};
