//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod layout_config;
pub mod network_config;
pub mod plot_config;
pub mod speechnet_config;
pub mod stats_config;

pub use layout_config::LayoutConfig;
pub use network_config::NetworkConfig;
pub use plot_config::PlotConfig;
pub use speechnet_config::{CliOverrides, SpeechnetConfig};
pub use stats_config::StatsConfig;
