// Application layer - Use cases and the seams to external collaborators
pub mod playback_clock;
pub mod route_source;
pub mod sync_service;
pub mod widgets;
