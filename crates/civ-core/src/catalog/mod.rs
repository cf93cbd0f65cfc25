//! Static catalogs: actions, world events, and the Age lexicon.
//!
//! Everything here is immutable configuration built at compile time and
//! shared by reference.

pub mod actions;
pub mod events;
pub mod lexicon;

pub use actions::Action;
pub use events::{EventDefinition, EVENT_CATALOG};
pub use lexicon::{words, WordClass, FALLBACK_KIND};
