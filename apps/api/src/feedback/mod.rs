// Feedback presentation core.
// Implements: score band classification, per-category tip aggregation,
// accordion selection state, and the assembled feedback view.

pub mod accordion;
pub mod aggregate;
pub mod bands;
pub mod handlers;
pub mod models;
