#[cfg(feature = "fabric")]
pub mod fabric;

#[cfg(feature = "paper")]
pub mod paper;
