//! cfsync Core - Domain logic and business rules
//!
//! This crate contains the domain core of cfsync:
//! - **Domain types** - `ImageId`, `AccountId`, `LocalImage`, `SyncItem`, `SyncPlan`
//! - **Diff engine** - `SyncPlan::build`, the pure local/remote join
//! - **Port definition** - The `IImageStore` trait implemented by adapter crates
//! - **Configuration** - `SyncConfig`, validated before any I/O happens
//!
//! # Architecture
//!
//! The domain module contains pure logic with no I/O dependencies. The
//! `IImageStore` port defines the interface the sync engine drives; the
//! HTTP adapter lives in `cfsync-api`.

pub mod config;
pub mod domain;
pub mod ports;
