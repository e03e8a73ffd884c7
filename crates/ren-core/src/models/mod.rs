//! Data models for substitution items and steps.
//!
//! This module contains the core domain models of the replacer: the atomic
//! [`Step`], the two-phase [`Item`] that decomposes a requested pair into
//! placeholder-mediated steps, and the ordered [`ItemList`] built from
//! validated input pairs. Display formatting for these models is located in
//! [`crate::display`] to keep data structures separate from presentation.

mod item;
mod step;


pub use item::{Item, ItemList};
pub use step::Step;
