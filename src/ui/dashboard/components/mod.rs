//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod controls;
pub mod doctors;
pub mod footer;
pub mod header;
pub mod labs;
pub mod modal;
pub mod notice;
pub mod queue;
