//! Player store integration tests.
//!
//! - One contract suite run against both store implementations
//! - Reloading a file-backed league from disk
//! - Concurrent `record_win` calls against a shared store

mod persistence;
