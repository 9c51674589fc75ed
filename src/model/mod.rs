//! Language model implementations.

pub mod openai;

pub use openai::OpenAIModel;
