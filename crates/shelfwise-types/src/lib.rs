//! Shared domain types for Shelfwise.
//!
//! This crate holds the data shapes used across the workspace: chat
//! messages and intent categories for the assistant, product/store/analytics
//! records for the dashboard services, error taxonomies, and configuration.
//! It has no business logic and no I/O.

pub mod analytics;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod store;
