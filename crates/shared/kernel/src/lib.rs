//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use phub_kernel::config::load_config;
//! use phub_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(cfg.lot.max_capacity > 0);
//! ```
pub mod config;

pub use phub_domain as domain;
