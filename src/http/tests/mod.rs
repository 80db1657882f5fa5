//! Unit tests for the HTTP boundary.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod handler_tests;
