//! # IO Module
//!
//! The adapter layer between HTTP clients and the domain services.
//!
//! Requests arrive as the JSON DTOs defined in the `shared` crate, are
//! translated into domain commands, and domain results are mapped back to
//! DTOs on the way out. Domain errors become HTTP status codes here and
//! nowhere else.

pub mod rest;
