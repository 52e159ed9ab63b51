//! View module
//!
//! The host-facing side of the book list.
//!
//! - [`HomeScreen`] - mounts a catalog load and pages over its result
//! - [`HomeSnapshot`] - the render model
//! - [`TapCounter`] - injected tap tally

mod counter;
mod home;
mod types;

pub use counter::TapCounter;
pub use home::HomeScreen;
pub use types::{greeting, HomeSnapshot, ListPlaceholder, END_REACHED_THRESHOLD, NO_RESULTS_MESSAGE};

#[cfg(test)]
mod tests;
