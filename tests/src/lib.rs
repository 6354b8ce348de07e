//! # xhs-sign Test Suite
//!
//! Unified test crate for the signing pipeline.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Cross-module pipeline tests
//! │   ├── golden.rs     # Pinned reference derivations
//! │   └── round_trip.rs # Inverse pipeline, rotation, concurrency
//! │
//! └── support.rs        # Shared test helpers
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p xhs-sign-tests
//!
//! # By category
//! cargo test -p xhs-sign-tests integration::golden::
//! cargo test -p xhs-sign-tests integration::round_trip::
//!
//! # Benchmarks
//! cargo bench -p xhs-sign-tests
//! ```
