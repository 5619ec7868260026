//! HTTP client components for the Vespa document CLI
//!
//! This module contains:
//! - The shared request helper that reports transport failures
//! - Document API operations and their CLI wiring
//! - The top-level command tree

pub mod client;
pub mod combined_cli;
pub mod document;
