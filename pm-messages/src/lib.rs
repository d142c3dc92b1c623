//! pm-messages
//!
//! Centralized messaging for the Portrait Master binaries.
//! Provides the message template registry and a small builder that
//! substitutes `{variable}` placeholders.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
