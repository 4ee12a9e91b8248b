use serde::{Deserialize, Serialize};

/// A class counts as nearly full once confirmed bookings reach 80% of its
/// capacity. The boundary is inclusive.
pub const NEAR_FULL_THRESHOLD: f64 = 0.80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fullness {
    Open,
    NearFull,
    Full,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Occupancy {
    pub booked_count: i64,
    pub capacity: i32,
    pub occupancy_ratio: f64,
    pub remaining_spots: i64,
    pub fullness: Fullness,
}

impl Occupancy {
    pub fn is_full(&self) -> bool {
        self.fullness == Fullness::Full
    }
}

/// Derives occupancy for a class from its capacity and a fresh confirmed
/// booking count. Pure and cheap; the booking path must call it with a count
/// read at decision time, never a cached or client-supplied value.
///
/// A count above capacity is a data-integrity anomaly and folds into `Full`
/// rather than erroring; the ratio is left unclamped so callers can see it.
pub fn evaluate(capacity: i32, booked_count: i64) -> Occupancy {
    let occupancy_ratio = booked_count as f64 / capacity as f64;
    let remaining_spots = (capacity as i64 - booked_count).max(0);

    let fullness = if booked_count >= capacity as i64 {
        Fullness::Full
    } else if occupancy_ratio >= NEAR_FULL_THRESHOLD {
        Fullness::NearFull
    } else {
        Fullness::Open
    };

    Occupancy {
        booked_count,
        capacity,
        occupancy_ratio,
        remaining_spots,
        fullness,
    }
}
