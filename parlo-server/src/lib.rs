//! Parlo server library
//!
//! Re-exports the server's modules for integration testing.

pub mod config;
pub mod render;
pub mod routes;
pub mod state;
