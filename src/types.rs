use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped GPS fix as delivered by the location source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackSegment {
    pub coords: Vec<LocationSample>,
}

/// Persisted summary of one completed workout.
///
/// `name` doubles as the storage key. `segments` is non-empty only if at
/// least one sample was recorded during the session. The serde renames are
/// the on-disk field names; they must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    pub link: String,
    #[serde(rename = "time")]
    pub duration_text: String,
    pub segments: Vec<TrackSegment>,
    #[serde(rename = "distance")]
    pub distance_miles: String,
    #[serde(rename = "feetClimbed")]
    pub feet_climbed: String,
}

impl TrackRecord {
    /// Total number of samples across all segments.
    pub fn sample_count(&self) -> usize {
        self.segments.iter().map(|s| s.coords.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(lat: f64, lon: f64) -> LocationSample {
        LocationSample {
            latitude: lat,
            longitude: lon,
            altitude: 12.5,
            time: Utc.with_ymd_and_hms(2021, 4, 20, 19, 30, 0).unwrap(),
        }
    }

    fn record(segments: Vec<TrackSegment>) -> TrackRecord {
        TrackRecord {
            name: "0.69(MI) on 20-04-21    13:05".to_string(),
            link: "some link".to_string(),
            duration_text: "00:01:30".to_string(),
            segments,
            distance_miles: "0.69".to_string(),
            feet_climbed: "0".to_string(),
        }
    }

    #[test]
    fn round_trips_through_json() {
        for segments in [
            vec![],
            vec![TrackSegment {
                coords: vec![sample(37.0, -122.0)],
            }],
            vec![
                TrackSegment {
                    coords: vec![sample(37.0, -122.0), sample(37.01, -122.0)],
                },
                TrackSegment { coords: vec![] },
            ],
        ] {
            let original = record(segments);
            let json = serde_json::to_string(&original).unwrap();
            let decoded: TrackRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn wire_field_names_are_stable() {
        let original = record(vec![TrackSegment {
            coords: vec![sample(37.0, -122.0)],
        }]);
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();

        assert!(value.get("time").is_some());
        assert!(value.get("distance").is_some());
        assert!(value.get("feetClimbed").is_some());
        assert!(value["segments"][0].get("coords").is_some());
        assert!(value["segments"][0]["coords"][0].get("latitude").is_some());
    }

    #[test]
    fn counts_samples_across_segments() {
        let r = record(vec![
            TrackSegment {
                coords: vec![sample(37.0, -122.0), sample(37.01, -122.0)],
            },
            TrackSegment {
                coords: vec![sample(37.02, -122.0)],
            },
        ]);
        assert_eq!(r.sample_count(), 3);
    }
}
