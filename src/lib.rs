//! Emoji Table Generator Library
//!
//! This library provides the core functionality of emojigen, including
//! parsing emoji metadata, grouping it by category, and rendering the emoji
//! picker markup and lookup tables used by the chat client.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
