use chrono::{DateTime, Local};

use crate::dlog;
use crate::error::{Error, Result};
use crate::geo::haversine_miles;
use crate::types::{LocationSample, TrackRecord, TrackSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
    Paused,
}

/// State machine and accumulator for one tracked workout.
///
/// Single-owner: all transitions come from explicit caller calls, and
/// samples are applied in arrival order. The instance is reusable —
/// `end` emits the record and resets every accumulator back to `Idle`.
#[derive(Debug)]
pub struct WorkoutSession {
    state: SessionState,
    samples: Vec<LocationSample>,
    first_sample: Option<LocationSample>,
    distance_miles: f64,
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            samples: Vec::new(),
            first_sample: None,
            distance_miles: 0.0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Crow-flies miles from the first fix of the session to the latest one.
    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    pub fn start(&mut self) -> Result<()> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Active;
                tracing::info!("workout started");
                Ok(())
            }
            state => Err(Error::InvalidState { op: "start", state }),
        }
    }

    pub fn pause(&mut self) -> Result<()> {
        match self.state {
            SessionState::Active => {
                self.state = SessionState::Paused;
                Ok(())
            }
            state => Err(Error::InvalidState { op: "pause", state }),
        }
    }

    pub fn resume(&mut self) -> Result<()> {
        match self.state {
            SessionState::Paused => {
                self.state = SessionState::Active;
                Ok(())
            }
            state => Err(Error::InvalidState { op: "resume", state }),
        }
    }

    /// Feed one fix into the session. Ignored unless the session is Active.
    ///
    /// The running distance is replaced on every fix, not summed: it is
    /// always the straight-line distance from the session's first fix to
    /// the newest one, converted to miles.
    pub fn record_sample(&mut self, sample: LocationSample) {
        if self.state != SessionState::Active {
            dlog!("sample_dropped state={:?}", self.state);
            return;
        }

        let first = self.first_sample.get_or_insert_with(|| sample.clone());
        self.distance_miles = haversine_miles(first, &sample);
        self.samples.push(sample);
    }

    /// Finish the workout: emit the persistable record and reset to Idle.
    ///
    /// `duration_text` is the stopwatch display at the moment of saving;
    /// the record name is synthesized from the distance and the local clock.
    pub fn end(&mut self, duration_text: &str) -> Result<TrackRecord> {
        self.end_at(duration_text, Local::now())
    }

    fn end_at(&mut self, duration_text: &str, saved_at: DateTime<Local>) -> Result<TrackRecord> {
        match self.state {
            SessionState::Active | SessionState::Paused => {}
            state => return Err(Error::InvalidState { op: "end", state }),
        }

        let distance_miles = format!("{:.2}", self.distance_miles);
        let name = format!(
            "{distance_miles}(MI) on {}",
            saved_at.format("%d-%m-%y    %H:%M")
        );

        let segments = if self.samples.is_empty() {
            Vec::new()
        } else {
            vec![TrackSegment {
                coords: std::mem::take(&mut self.samples),
            }]
        };

        let record = TrackRecord {
            name,
            link: "some link".to_string(),
            duration_text: duration_text.to_string(),
            segments,
            distance_miles,
            feet_climbed: "0".to_string(),
        };

        self.samples.clear();
        self.first_sample = None;
        self.distance_miles = 0.0;
        self.state = SessionState::Idle;

        tracing::info!(
            name = %record.name,
            samples = record.sample_count(),
            "workout ended"
        );
        Ok(record)
    }
}
