//! Basic logger usage example
//!
//! Prints the library version and emits one debug record to the console and
//! `debug.log` in the current directory.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::debug;
use leveled_logger::prelude::*;

fn main() {
    let logger = Logger::with_threshold(LogLevel::Debug);

    println!("leveled_logger version: {}", leveled_logger::version());
    debug!(logger, "Hello world");
}
