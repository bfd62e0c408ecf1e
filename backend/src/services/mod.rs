//! Business logic services for the Agri Advisory Platform

pub mod advisory;
pub mod schemes;

pub use advisory::AdvisoryEngine;
pub use schemes::SchemeCatalog;
