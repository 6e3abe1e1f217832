//! Console and host utilities for the command-line harness

pub mod helpers;
pub mod system_info;
