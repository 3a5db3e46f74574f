//! Desktop application module
//!
//! Handles windowing and touch input, and drives the demo overlay.

pub mod config;
pub mod demo;
mod error;
pub mod input;
mod runner;
mod window;

pub use self::config::{AppConfig, InputConfig, LoggingConfig, WindowConfig};
pub use demo::{DemoFlow, DemoStage};
pub use error::AppError;
pub use runner::App;
pub use window::window_attributes_from_config;
