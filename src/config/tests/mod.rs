//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `resolution`: Schema, format, destination and filter resolution tests

mod helpers;
mod operation_mode;
mod precedence;
