//! Projects API integration tests
//!
//! Drives the composed router against in-memory stores.

#![allow(dead_code)]

mod common;
mod projects_api;
