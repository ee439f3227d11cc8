use crate::error::ValidationError;
use crate::types::WorkoutKind;
use crate::workout::{compute_pace, compute_speed};

/// Field values exactly as the user typed them. The kind comes from the
/// selector ([`FormState::kind`]), not from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl RawForm {
    /// The rate field that belongs to `kind`.
    pub fn rate(&self, kind: WorkoutKind) -> &str {
        match kind {
            WorkoutKind::Running => &self.cadence,
            WorkoutKind::Cycling => &self.elevation,
        }
    }
}

/// Numbers that passed validation, ready for [`crate::types::Workout::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInput {
    pub kind: WorkoutKind,
    pub distance: f64,
    pub duration: f64,
    /// Cadence (running) or elevation gain (cycling).
    pub rate: f64,
}

/// Browser-style numeric coercion: blank is `0`, garbage is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// All three numbers must be finite. Running needs all three positive;
/// cycling only distance and duration, so elevation may be zero or negative.
/// The derived pace or speed must be finite too, or the snapshot could not
/// hold it.
pub fn validate(kind: WorkoutKind, form: &RawForm) -> Result<ValidInput, ValidationError> {
    let distance = coerce_number(&form.distance);
    let duration = coerce_number(&form.duration);
    let rate = coerce_number(form.rate(kind));

    let all_finite = [distance, duration, rate].iter().all(|v| v.is_finite());
    let positive = match kind {
        WorkoutKind::Running => [distance, duration, rate].iter().all(|&v| v > 0.0),
        WorkoutKind::Cycling => distance > 0.0 && duration > 0.0,
    };

    if !all_finite || !positive {
        return Err(ValidationError::NotPositiveNumbers);
    }

    let metric = match kind {
        WorkoutKind::Running => compute_pace(distance, duration),
        WorkoutKind::Cycling => compute_speed(distance, duration),
    };
    if !metric.is_finite() {
        return Err(ValidationError::NotPositiveNumbers);
    }

    Ok(ValidInput {
        kind,
        distance,
        duration,
        rate,
    })
}

/// Which rate row is shown under the kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateField {
    Cadence,
    Elevation,
}

/// Input focus target when the form opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Distance,
}

/// Visible state of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormState {
    pub visible: bool,
    pub kind: WorkoutKind,
    pub focus: Option<Focus>,
}

impl FormState {
    pub fn show(&mut self) {
        self.visible = true;
        self.focus = Some(Focus::Distance);
    }

    /// Hide and reset every field, including the kind selector.
    pub fn hide(&mut self) {
        *self = Self::default();
    }

    pub fn set_kind(&mut self, kind: WorkoutKind) {
        self.kind = kind;
    }

    pub const fn rate_field(&self) -> RateField {
        match self.kind {
            WorkoutKind::Running => RateField::Cadence,
            WorkoutKind::Cycling => RateField::Elevation,
        }
    }
}
