// Sample domain models
use super::geo::LatLng;
use super::locator;
use thiserror::Error;

/// One video frame correlated with a GPS fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Frame number (or source timestamp) as recorded; not used for lookup
    pub frame: f64,
    /// Playback time in seconds, the sort key
    pub time: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Sample {
    pub fn new(frame: f64, time: f64, latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            frame,
            time,
            latitude,
            longitude,
            elevation,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("sample {index} has a non-finite time")]
    NonFiniteTime { index: usize },
    #[error("sample {index} time {time} does not increase on previous time {previous}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        time: f64,
    },
}

/// Samples sorted by strictly increasing time. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> Result<Self, SeriesError> {
        for (index, sample) in samples.iter().enumerate() {
            if !sample.time.is_finite() {
                return Err(SeriesError::NonFiniteTime { index });
            }
        }

        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(SeriesError::NotIncreasing {
                    index: index + 1,
                    previous: pair[0].time,
                    time: pair[1].time,
                });
            }
        }

        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Index of the interval containing `query`, see [`locator::locate`].
    pub fn locate(&self, query: f64) -> Option<usize> {
        locator::locate(&self.samples, query)
    }
}
