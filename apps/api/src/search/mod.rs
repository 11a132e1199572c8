//! Keyword search endpoints. Scoring lives in [`crate::matching`].

pub mod handlers;
