// file: src/cli/mod.rs
// version: 1.0.0
// guid: 6c378fae-2258-49f9-bb2f-9d33e6a5d557

//! Command line interface for compose-ctl

pub mod args;

pub use args::Cli;
