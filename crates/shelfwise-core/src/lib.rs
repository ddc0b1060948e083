//! Business logic for Shelfwise.
//!
//! The one decision-bearing subsystem lives in [`assistant`]: an
//! intent-routed response engine with conversation state management.
//! The remaining modules are the simple in-memory services the dashboard
//! screens are built on: product catalog, store registry, and static
//! analytics datasets.
//!
//! This crate depends only on `shelfwise-types`; all I/O and presentation
//! live in `shelfwise-cli`.

pub mod analytics;
pub mod assistant;
pub mod catalog;
pub mod stores;
