//! Infrastructure layer for storage and data ingestion.
//!
//! This layer implements interfaces defined by the domain layer and feeds the object
//! graph from external data.
//!
//! # Modules
//!
//! - [`dataset`] - CSV movie dataset reader and article loader
//! - [`persistence`] - In-memory repository implementation

pub mod dataset;
pub mod persistence;
