//! The tools module provides the helpers around the coder core.
//!
//! The tools are:
//! - cli: Command line interface for the driver binary.
//! - freq_count: Frequency count of the input text.
//! - report: Code table and compression statistics formatting for the driver.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
