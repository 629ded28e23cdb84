//! Record store, match engine, and skill assessment for careerhub.
//!
//! This crate defines the marketplace data model, the persisted record store
//! and its storage backends, and the pure matching and filtering logic the
//! CLI builds on.

pub mod assessment;
pub mod config;
pub mod error;
pub mod filter;
pub mod matching;
pub mod model;
pub mod report;
pub mod seed;
pub mod storage;
pub mod store;
