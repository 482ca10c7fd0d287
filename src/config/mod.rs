//! Configuration loading for Anveshan.
//!
//! Loads configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use anveshan::config::AnveshanConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = AnveshanConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = AnveshanConfig::default();
//!
//! let search = anveshan::FrontierSearch::new(config.frontier);
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! frontier:
//!   potential_scale: 3.0      # distance weight
//!   gain_scale: 1.0           # size weight
//!   orientation_scale: 0.0    # turning weight
//!   min_frontier_size: 0.75   # meters
//!   max_frontier_size: 0.0    # meters, 0 = unbounded
//!   seed_search_radius: 1.0   # meters, 0 = unbounded
//! ```

mod anveshan;
mod defaults;
mod error;
mod frontier;

pub use anveshan::AnveshanConfig;
pub use error::ConfigLoadError;
pub use frontier::FrontierConfig;
