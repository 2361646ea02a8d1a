//! Shared test helpers for `asnalo-core` integration tests.
//!
//! These helpers provide fixture records and a scripted generation service so
//! that assistant and store tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod generator;
