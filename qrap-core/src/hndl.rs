use crate::dto::HndlRequest;

pub const ALGORITHMS: [&str; 9] = [
    "RSA-2048",
    "RSA-3072",
    "RSA-4096",
    "ECDSA-P256",
    "ECDSA-P384",
    "Ed25519",
    "X25519",
    "ML-KEM-768",
    "ML-DSA-65",
];

pub const DEFAULT_ALGORITHM: &str = "RSA-2048";
pub const DEFAULT_SHELF_LIFE_YEARS: i64 = 10;

// Rendered as the input's min/max attributes only; submissions are not
// clamped against them.
pub const SHELF_LIFE_MIN: i64 = 1;
pub const SHELF_LIFE_MAX: i64 = 50;

impl HndlRequest {
    pub fn new(algorithm: impl Into<String>, data_shelf_life_years: i64) -> Self {
        Self {
            algorithm: algorithm.into(),
            data_shelf_life_years,
        }
    }
}

/// Reads the number field the way the browser reports it: decimals and
/// exponents are accepted and truncated to whole years, blank or
/// non-numeric input reads as 0.
pub fn parse_shelf_life(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(years) if years.is_finite() => years.trunc() as i64,
        _ => 0,
    }
}

/// Submit button state for the calculation form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    in_flight: bool,
}

impl SubmitState {
    pub fn begin(&mut self) {
        self.in_flight = true;
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_disabled(&self) -> bool {
        self.in_flight
    }

    pub fn label(&self) -> &'static str {
        if self.in_flight {
            "Calculating..."
        } else {
            "Calculate"
        }
    }
}
