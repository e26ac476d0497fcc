//! Team management: thin command services over the core REST client.

pub mod commands;

pub use commands::TeamCommandService;
