//! Construction of workouts and their derived fields.
//!
//! Callers validate input first (see [`crate::form`]); nothing here fails.

use chrono::{DateTime, Datelike, Local, Utc};
use uuid::Uuid;

use crate::types::{Activity, Coords, Workout, WorkoutKind};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Minutes per kilometer. Infinite when `distance == 0`.
pub fn compute_pace(distance: f64, duration: f64) -> f64 {
    duration / distance
}

/// Kilometers per hour from kilometers and minutes.
pub fn compute_speed(distance: f64, duration: f64) -> f64 {
    distance / (duration / 60.0)
}

/// `"Running on April 14"`.
pub fn build_description(kind: WorkoutKind, date: &impl Datelike) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} on {month} {}", kind.label(), date.day())
}

impl Workout {
    pub fn running(coords: Coords, distance: f64, duration: f64, cadence: f64) -> Self {
        Self::running_at(Utc::now(), coords, distance, duration, cadence)
    }

    pub fn cycling(coords: Coords, distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self::cycling_at(Utc::now(), coords, distance, duration, elevation_gain)
    }

    pub fn running_at(
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Self {
        let pace = compute_pace(distance, duration);
        Self::build(
            created_at,
            coords,
            distance,
            duration,
            Activity::Running { cadence, pace },
        )
    }

    pub fn cycling_at(
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        let speed = compute_speed(distance, duration);
        Self::build(
            created_at,
            coords,
            distance,
            duration,
            Activity::Cycling {
                elevation_gain,
                speed,
            },
        )
    }

    /// Dispatches on `kind`; `rate` is cadence for running, elevation gain for cycling.
    pub fn new(kind: WorkoutKind, coords: Coords, distance: f64, duration: f64, rate: f64) -> Self {
        match kind {
            WorkoutKind::Running => Self::running(coords, distance, duration, rate),
            WorkoutKind::Cycling => Self::cycling(coords, distance, duration, rate),
        }
    }

    fn build(
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        activity: Activity,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            coords,
            distance,
            duration,
            description: build_description(
                activity.kind(),
                &created_at.with_timezone(&Local),
            ),
            activity,
        }
    }
}
