//! Configuration loading and management for PayCompute.
//!
//! Settings cover the output currency, the accepted pay-period range, the
//! high-amount threshold, file locations, and which checks gate the download.
//!
//! # Example
//!
//! ```no_run
//! use paycompute::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/paycompute.yaml").unwrap();
//! println!("Audit log: {}", loader.settings().audit_log_path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::Settings;
