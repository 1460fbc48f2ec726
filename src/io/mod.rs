//! File output for estimates.

pub mod export;
