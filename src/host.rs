// src/host.rs
//! Host integrations. Real embedders supply their own host operations; [`null::NullHost`] renders
//! nothing and records what it is asked to do.

pub mod null;

pub use null::{HostCall, NullHost};
