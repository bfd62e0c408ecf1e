//! Domain models for the Agri Advisory Platform

mod chat;
mod scheme;
mod weather;

pub use chat::*;
pub use scheme::*;
pub use weather::*;
