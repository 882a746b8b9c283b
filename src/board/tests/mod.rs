//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Performance tests for move generation
//! - `make_unmake.rs` - Apply/unmove correctness
//! - `edge_cases.rs` - Pins, checks, castling and en passant corner cases
//! - `proptest.rs` - Property-based tests
//! - `search.rs` - Minimax and alpha-beta search

mod perft;
