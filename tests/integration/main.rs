//! Integration tests for the sitemap operations
//!
//! These tests use wiremock to create mock HTTP servers and drive the
//! operations end-to-end through the real HTTP fetcher.

mod discover_tests;
mod list_tests;
