//! Utility modules for page generation.

pub mod slug;
