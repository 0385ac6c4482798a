//! Shared process-level utilities for binaries embedding the precalc engine
//!
//! - logging initialisation with runtime level changes
//!
//! The workspace libraries only emit `tracing` events and never install a
//! subscriber. A host binary calls [`init`] or [`init_with_config`] once at
//! startup to route those events somewhere.
//!
//! ```rust
//! use common::logging::{init_with_config, LogConfig};
//!
//! fn main() -> Result<(), common::LogError> {
//!     init_with_config(LogConfig {
//!         level: "info,precalc_engine=debug".into(),
//!         ..Default::default()
//!     })?;
//!     tracing::info!("calculator ready");
//!
//!     common::set_log_level("warn")?;
//!     assert_eq!(common::get_log_level(), "warn");
//!     Ok(())
//! }
//! ```

pub mod logging;

pub use logging::{get_log_level, init, init_with_config, set_log_level, LogConfig, LogError};
