// Presentation layer - Page output and the playback event loop
pub mod console_page;
pub mod replay;
