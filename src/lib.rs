//! Core library for the `restclient` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration resolution, JSON body preparation, the worker-pool
//! dispatcher and outcome aggregation. The primary user-facing interface is
//! the `restclient` command-line application.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod payload;
