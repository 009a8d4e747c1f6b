//! # cxxmodel Bench
//!
//! Schema fixtures shared by the cxxmodel benchmarks.

pub mod fixtures;
