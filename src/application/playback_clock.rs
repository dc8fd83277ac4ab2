// Playback clock trait
use futures::stream::BoxStream;

pub trait PlaybackClock {
    /// Stream of playback positions in seconds, one item per time update
    fn time_updates(&self) -> BoxStream<'static, f64>;
}
