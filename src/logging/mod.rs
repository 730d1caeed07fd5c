// file: src/logging/mod.rs
// version: 1.0.0
// guid: 86772eed-a9b1-43fc-ac68-43bfb14af14f

//! Logging system for compose-ctl

pub mod logger;

pub use logger::init_logger;
