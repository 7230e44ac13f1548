//! Behavioral tests for the landing view
//!
//! This module provides BDD-style tests using given-when-then naming convention.
//! Tests focus on component behavior rather than implementation details.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

pub mod session_behaviors;
