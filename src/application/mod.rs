//! # Application Layer
//!
//! Upstream client interfaces and the relay use cases built on them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
