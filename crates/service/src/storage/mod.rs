//! Storage abstractions for service layer
//!
//! Contains the document map backing the student collection, persisted to
//! a JSON file or kept purely in memory.

pub mod json_map_store;
