#![doc = include_str!("../README.md")]
pub mod error;
mod paced;
mod traits;
pub mod types;

pub use crate::error::{Error, Result};
pub use crate::paced::PacedClient;
pub use crate::traits::{HttpClient, RequestExt};
pub use crate::types::{BoxError, Headers};
pub use http;
pub use pacer_common::{Gate, GateConfig};
