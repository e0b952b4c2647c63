//! # NCount Runner
//!
//! File-based entry point around the NCount header decoder. A caller writes
//! the decoder's inputs to individual files, invokes the runner, and reads the
//! mutated buffers and the status code back.
//!
//! See [`buffers`] for the on-disk layout of each file.

pub mod buffers;
pub mod command;
pub mod config;
pub mod error;

pub use command::{run_inspect, run_read_ncount, InspectReport, ReadNCountFiles, ReportFormat};
pub use config::{parse_level, RunnerConfig};
pub use error::{Result, RunnerError};
