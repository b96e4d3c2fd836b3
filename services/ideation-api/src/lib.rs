//! Ideation API
//!
//! A small REST service for capturing ideas: the concrete entity
//! configuration for the `idea` type plus the router assembly, built on the
//! generic resource layer from `resterize`.

pub mod app;
pub mod idea;
