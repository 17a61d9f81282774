//! Command implementations behind the `dgw` binary.

pub mod commands;
