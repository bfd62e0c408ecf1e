//! Shared types and models for the Agri Advisory Platform
//!
//! This crate contains types shared between the backend server and any
//! other components of the system.

pub mod models;

pub use models::*;
