//! Shared configuration, error type, data model and database connection
//! for the vocabulary reminder service.

pub mod config;
pub mod db;
pub mod error;
pub mod types;
