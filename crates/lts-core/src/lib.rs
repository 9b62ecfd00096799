//! Luxury Travel Social Agent: domain types, request normalization and error kinds.

pub mod error;
pub mod request;
pub mod types;

pub use error::{LtsError, Result};
pub use request::{normalize, GenerationRequest, RawRequest};
pub use types::{Audience, GenerationResult, Length, Platform, PlatformOutput, Tone, Universal};
