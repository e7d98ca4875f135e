//! Service-area coverage lookup.
//!
//! A pure membership check against the fixed set of serviceable ZIP
//! codes, plus the geometry a binding needs to draw the coverage overlay.
//! Map rendering itself stays outside the engine.

use crate::config::{BusinessInfo, Coordinates};
use crate::validation::is_valid_postal_code;

/// Radius of the delivery zone around the shop, in meters.
pub const SERVICE_RADIUS_METERS: f64 = 10_000.0;

const SERVICEABLE_ZIP_CODES: [&str; 5] = ["12345", "12346", "12347", "12348", "12349"];

/// Outcome of a coverage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageCheck {
    /// The input does not look like a ZIP code at all.
    InvalidCode,
    /// The code is inside the delivery zone.
    Covered,
    /// The code is well-formed but outside the delivery zone.
    NotCovered,
}

impl CoverageCheck {
    /// True only for a serviceable code.
    pub fn is_covered(&self) -> bool {
        matches!(self, CoverageCheck::Covered)
    }

    /// User-facing message for the check result.
    pub fn message(&self) -> &'static str {
        match self {
            CoverageCheck::InvalidCode => "Please enter a valid 5-digit ZIP code",
            CoverageCheck::Covered => {
                "Great news! We service your area. Free pickup and delivery available."
            }
            CoverageCheck::NotCovered => {
                "Sorry, we don't currently service this ZIP code. Contact us to request service expansion."
            }
        }
    }
}

/// The delivery zone: serviceable ZIP codes plus map geometry.
#[derive(Debug, Clone)]
pub struct ServiceArea {
    codes: Vec<String>,
    center: Coordinates,
    radius_meters: f64,
}

impl ServiceArea {
    /// A custom delivery zone.
    pub fn new(codes: Vec<String>, center: Coordinates, radius_meters: f64) -> Self {
        Self {
            codes,
            center,
            radius_meters,
        }
    }

    /// Center of the zone, for the map pin.
    pub fn center(&self) -> Coordinates {
        self.center
    }

    /// Radius of the zone circle, in meters.
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Check whether a raw ZIP input falls inside the delivery zone.
    pub fn check(&self, code: &str) -> CoverageCheck {
        if !is_valid_postal_code(code) {
            return CoverageCheck::InvalidCode;
        }
        if self.codes.iter().any(|serviced| serviced == code) {
            CoverageCheck::Covered
        } else {
            CoverageCheck::NotCovered
        }
    }
}

impl Default for ServiceArea {
    /// The zone served by the shop today.
    fn default() -> Self {
        Self {
            codes: SERVICEABLE_ZIP_CODES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            center: BusinessInfo::default().location,
            radius_meters: SERVICE_RADIUS_METERS,
        }
    }
}
