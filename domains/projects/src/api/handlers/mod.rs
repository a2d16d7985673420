//! HTTP handlers for the Projects domain

pub mod histories;
pub mod projects;
