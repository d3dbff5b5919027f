//! # Scribe Generation
//!
//! Remote text generation: prompt in, text out.
//!
//! [`TextGenerator`] is the seam the editor talks to. [`HttpGenerator`]
//! reaches a completions-style HTTP endpoint with a bearer credential
//! taken from [`GenerationConfig`]. Every failure collapses into
//! [`GenerationFailed`]; nothing is retried.

mod config;
mod error;
mod generator;
mod http;

pub use config::GenerationConfig;
pub use error::GenerationFailed;
pub use generator::TextGenerator;
pub use http::HttpGenerator;
