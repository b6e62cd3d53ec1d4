//! chat_core - Core types for the smoothie recommendation service
//!
//! This crate provides the foundational types used across all service crates:
//! - `turn` - ChatTurn, Role for conversation history
//! - `intent` - Intent classification of a model reply
//! - `recommendation` - the normalized recommendation record
//! - `menu` - the static menu catalog
//! - `config` - service configuration

pub mod config;
pub mod intent;
pub mod menu;
pub mod recommendation;
pub mod turn;

// Re-export commonly used types
pub use config::Config;
pub use intent::Intent;
pub use menu::{MenuCatalog, MenuCategory, MenuError, MenuItem};
pub use recommendation::Recommendation;
pub use turn::{ChatTurn, Role};
