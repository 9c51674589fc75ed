//! Core trait abstractions for the extraction pipeline.

pub mod model;
