use super::TelemetryReading;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};
use utoipa::ToSchema;

pub const RSSI_RANGE: RangeInclusive<i32> = -120..=-50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldRange {
    /// Uniform value rounded to 2 decimals
    Decimal { min: f64, max: f64 },
    /// Uniform integer, both ends inclusive
    Integer { min: i64, max: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    Decimal(f64),
    Integer(i64),
}

impl FieldRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldValue {
        let value = match *self {
            FieldRange::Decimal { min, max } => FieldValue::Decimal(round_decimal(rng.random_range(min..=max))),
            FieldRange::Integer { min, max } => FieldValue::Integer(rng.random_range(min..=max)),
        };
        debug_assert!(self.contains(value));
        value
    }

    pub fn contains(&self, value: FieldValue) -> bool {
        match (*self, value) {
            (FieldRange::Decimal { min, max }, FieldValue::Decimal(v)) => (min..=max).contains(&v),
            (FieldRange::Integer { min, max }, FieldValue::Integer(v)) => (min..=max).contains(&v),
            _ => false,
        }
    }
}

/// Round to 2 decimals, negative zero is normalized.
pub fn round_decimal(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Shortest decimal form of a rounded value keeping at least one fractional digit, ex. `12.0`, `12.5`, `-3.07`.
pub fn format_decimal(value: f64) -> String {
    let mut text = format!("{:.2}", round_decimal(value));
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Decimal(v) => f.write_str(&format_decimal(*v)),
            FieldValue::Integer(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub range: FieldRange,
}

const fn decimal(key: &'static str, min: f64, max: f64) -> FieldSpec {
    FieldSpec {
        key,
        range: FieldRange::Decimal { min, max },
    }
}

const fn integer(key: &'static str, min: i64, max: i64) -> FieldSpec {
    FieldSpec {
        key,
        range: FieldRange::Integer { min, max },
    }
}

const CLEANER_FIELDS: &[FieldSpec] = &[
    decimal("T1", 5.0, 40.0),
    decimal("T2", 5.0, 40.0),
    decimal("AX", -500.0, 500.0),
    decimal("AY", -500.0, 500.0),
    decimal("AZ", -1000.0, 1000.0),
    decimal("GX", -10.0, 10.0),
    decimal("GY", -10.0, 10.0),
    decimal("GZ", -10.0, 10.0),
    integer("C", 0, 5000),
];

const ROVER_FIELDS: &[FieldSpec] = &[
    integer("TOF1", 0, 2000),
    integer("TOF2", 0, 2000),
    decimal("ACCX", -500.0, 500.0),
    decimal("ACCY", -500.0, 500.0),
    decimal("ACCZ", -1000.0, 1000.0),
    decimal("GYRX", -10.0, 10.0),
    decimal("GYRY", -10.0, 10.0),
    decimal("GYRZ", -10.0, 10.0),
    integer("DRIVE", 0, 1),
    integer("BRUSH", 0, 1),
    integer("DISORIENTED", 0, 1),
];

/// The set and order of the telemetry fields reported by a robot generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum FieldProfile {
    /// Temperatures, accelerometer, gyroscope and the cleaning counter
    #[default]
    Cleaner,
    /// Time of flight distances, accelerometer, gyroscope and the drive state flags
    Rover,
}

impl FieldProfile {
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FieldProfile::Cleaner => CLEANER_FIELDS,
            FieldProfile::Rover => ROVER_FIELDS,
        }
    }

    /// Format the values in the order of the profile fields.
    pub fn format_data<I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = FieldValue>,
    {
        self.fields()
            .iter()
            .zip(values)
            .map(|(field, value)| format!("{}:{}", field.key, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The canned reading reported when the device cannot be reached.
    pub fn fallback(&self) -> TelemetryReading {
        let data = self
            .fields()
            .iter()
            .map(|f| format!("{}:0", f.key))
            .collect::<Vec<_>>()
            .join(" ");
        let rssi = match self {
            FieldProfile::Cleaner => -119,
            FieldProfile::Rover => -75,
        };
        TelemetryReading::new(data, rssi)
    }
}
