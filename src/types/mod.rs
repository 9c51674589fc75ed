//! Data types for the vocabulary extraction pipeline.

pub mod config;
pub mod segment;
pub mod vocabulary;
