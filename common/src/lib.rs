//! Shared model, request payloads and the responsibility-term generator.
//!
//! `model` and `requests` travel between the backend and the frontend over
//! JSON. `term` is the pure document generator both sides run.

pub mod model;
pub mod requests;
pub mod term;
