// Domain layer - Route, samples and the playback-time lookup
pub mod geo;
pub mod locator;
pub mod route;
pub mod sample;
