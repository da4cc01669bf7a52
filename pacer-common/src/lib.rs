#![doc = include_str!("../README.md")]
pub mod config;
pub mod gate;
pub mod types;

pub use self::config::GateConfig;
pub use self::gate::Gate;
pub use self::types::paced::{Paceable, Paced};
