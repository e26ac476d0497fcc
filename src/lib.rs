//! Azdo: Azure DevOps CLI extension core
//!
//! Command services and result presentation for an Azure DevOps CLI
//! extension. The argument-parsing shell and the REST transport live
//! outside this crate; everything between them lives here: typed response
//! records, table transforms, the identity name cache, and the team
//! command services.

pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod presentation;
pub mod records;
pub mod team;
