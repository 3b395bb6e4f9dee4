//! Utilities for benchmarking.

pub mod benchmark;
