// Simulated playback clock
use crate::application::playback_clock::PlaybackClock;
use futures::stream::BoxStream;
use std::time::Duration;

/// Advances playback by `rate * tick` seconds every `tick` of wall time,
/// from `start` to `end`. The final update is clamped to `end`.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    start: f64,
    end: f64,
    rate: f64,
    tick: Duration,
}

impl SimulatedClock {
    pub fn new(start: f64, end: f64, rate: f64, tick: Duration) -> Self {
        Self {
            start,
            end,
            rate,
            tick,
        }
    }
}

impl PlaybackClock for SimulatedClock {
    fn time_updates(&self) -> BoxStream<'static, f64> {
        let Self {
            start,
            end,
            rate,
            tick,
        } = self.clone();
        let step = rate * tick.as_secs_f64();

        Box::pin(async_stream::stream! {
            let mut interval = tokio::time::interval(tick);
            let mut n: u64 = 0;

            loop {
                interval.tick().await;
                let position = start + step * n as f64;
                yield position.min(end);

                if !(position < end) || step <= 0.0 {
                    break;
                }
                n += 1;
            }
        })
    }
}
