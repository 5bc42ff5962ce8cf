//! CLI support for the `lgraph` binary.

pub mod commands;
