use crate::error::{Error, Result};
use crate::types::LocationSample;

/// Conversion factor used everywhere a distance leaves the metric world.
pub const MILES_PER_METER: f64 = 0.000_621_371;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two fixes, in meters. Altitude is ignored.
pub fn haversine_meters(a: &LocationSample, b: &LocationSample) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

pub fn haversine_miles(a: &LocationSample, b: &LocationSample) -> f64 {
    haversine_meters(a, b) * MILES_PER_METER
}

/// Axis-aligned bounding box of a track, from a linear scan of its samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Map viewport derived from a bounding box: centered on the midpoint with
/// a 50% margin on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRegion {
    pub center_lat: f64,
    pub center_lon: f64,
    pub lat_span: f64,
    pub lon_span: f64,
}

impl TrackBounds {
    pub fn of(samples: &[LocationSample]) -> Result<Self> {
        let Some(first) = samples.first() else {
            return Err(Error::EmptyTrack);
        };

        let mut bounds = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };

        for s in &samples[1..] {
            bounds.min_lat = bounds.min_lat.min(s.latitude);
            bounds.max_lat = bounds.max_lat.max(s.latitude);
            bounds.min_lon = bounds.min_lon.min(s.longitude);
            bounds.max_lon = bounds.max_lon.max(s.longitude);
        }

        Ok(bounds)
    }

    pub fn display_region(&self) -> DisplayRegion {
        DisplayRegion {
            center_lat: 0.5 * (self.min_lat + self.max_lat),
            center_lon: 0.5 * (self.min_lon + self.max_lon),
            lat_span: 1.5 * (self.max_lat - self.min_lat),
            lon_span: 1.5 * (self.max_lon - self.min_lon),
        }
    }
}
