//! Session model types: `Sample`, `Series` and the `Sessions` pair.

use super::timestamp::Timestamp;

/// One BPM reading. `bpm` is `None` for a sensor dropout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: Timestamp,
    pub bpm: Option<f64>,
}

impl Sample {
    pub fn new(time: Timestamp, bpm: Option<f64>) -> Self {
        Self { time, bpm }
    }
}

/// A named, ordered list of samples. Order is the order of the source file
/// and is assumed to be chronological.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples that carry a BPM value, in series order.
    pub fn valid_samples(&self) -> impl Iterator<Item = (Timestamp, f64)> + '_ {
        self.samples
            .iter()
            .filter_map(|s| s.bpm.map(|bpm| (s.time, bpm)))
    }

    /// Number of dropout samples.
    pub fn dropouts(&self) -> usize {
        self.samples.iter().filter(|s| s.bpm.is_none()).count()
    }
}

/// The two recordings being compared.
#[derive(Debug, Clone, Default)]
pub struct Sessions {
    pub solo: Series,
    pub group: Series,
}
