use super::{FieldProfile, TelemetryReading, RSSI_RANGE};
use rand::Rng;

/// Fabricate readings with uniformly distributed values within the range of each field.
#[derive(Clone, Debug)]
pub struct TelemetrySimulator {
    profile: FieldProfile,
}

impl TelemetrySimulator {
    pub fn new(profile: FieldProfile) -> Self {
        Self { profile }
    }

    pub fn generate(&self) -> TelemetryReading {
        self.generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> TelemetryReading {
        let values = self
            .profile
            .fields()
            .iter()
            .map(|field| field.range.sample(rng))
            .collect::<Vec<_>>();
        let data = self.profile.format_data(values);
        let rssi = rng.random_range(RSSI_RANGE);

        TelemetryReading { data, rssi }
    }
}
