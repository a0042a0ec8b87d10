//! Screen-level use-cases over the trip store.
//!
//! # Responsibility
//! - Combine store reads into the aggregates presentation code renders.
//! - Convert raw user input before it reaches the store.

pub mod input;
pub mod trip_service;
