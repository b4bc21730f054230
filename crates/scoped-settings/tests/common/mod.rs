//! Shared payload fixtures and setup for the integration tests

#![allow(dead_code)]

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initialize a tracing subscriber writing to the test output.
///
/// `RUST_LOG` overrides the default `debug` level.
pub fn setup_test_logging() {
	let filter =
		EnvFilter::builder().with_default_directive(LevelFilter::DEBUG.into()).from_env_lossy();
	let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter(filter).try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Render {
	pub width: u32,
	pub height: u32,
	pub vsync: bool,
}

impl Default for Render {
	fn default() -> Self {
		Self { width: 1280, height: 720, vsync: true }
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Audio {
	pub volume: u8,
	pub muted: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
	pub name: String,
	pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dialog {
	pub modal: bool,
}

// vim: ts=4
