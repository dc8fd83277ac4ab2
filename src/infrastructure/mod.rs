// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod headless_chart;
pub mod headless_map;
pub mod json_source;
pub mod simulated_clock;
