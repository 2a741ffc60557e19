#![forbid(unsafe_code)]

//! Test harness for the resizer engine.
//!
//! # Role in resizer
//! `resizer-harness` stands in for a browser. [`MemoryDocument`] is an
//! arena-backed element tree with stored measurements, and [`Fixture`] drives
//! a [`resizer_engine::ResizeController`] against it the way a DOM binding
//! would: pointer events in, notifications, cursor commands and re-rendered
//! geometry out. Integration suites and benchmarks live alongside.

pub mod document;
pub mod fixture;

pub use document::{MemoryDocument, NodeId};
pub use fixture::{Fixture, FixtureLayout};

/// Builder shorthand for configs used across suites.
#[must_use]
pub fn sized(width: f64, height: f64, left: f64, top: f64) -> resizer_engine::ResizableConfig {
    use resizer_core::Length;
    resizer_engine::ResizableConfig {
        width: Some(Length::Px(width)),
        height: Some(Length::Px(height)),
        left: Length::Px(left),
        top: Length::Px(top),
        ..resizer_engine::ResizableConfig::default()
    }
}
