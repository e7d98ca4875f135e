//! Engine configuration and fixed business data.
//!
//! Timing knobs are deserializable from TOML so a host can tune them
//! without recompiling; missing keys fall back to the reference behavior
//! (1.5 s simulated send, 5 s success banner).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// How long the success banner stays up before the form returns to idle.
pub const DEFAULT_SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Fixed latency of the simulated send transport.
pub const DEFAULT_SEND_DELAY: Duration = Duration::from_millis(1500);

/// Timing configuration for the form engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Success banner display window before the form returns to idle.
    #[serde(with = "humantime_serde")]
    pub success_display: Duration,

    /// Latency of the simulated send transport.
    #[serde(with = "humantime_serde")]
    pub simulated_send_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            success_display: DEFAULT_SUCCESS_DISPLAY,
            simulated_send_delay: DEFAULT_SEND_DELAY,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid engine configuration")
    }

    /// Load configuration from a TOML file. A missing file yields the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}

/// Geographic coordinate of the business location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Business profile rendered by bindings and stamped on outbound messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub location: Coordinates,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "FreshPress Laundry".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "info@freshpresslaundry.com".to_string(),
            address: "123 Clean Street, Fresh City, FC 12345".to_string(),
            location: Coordinates {
                lat: 40.7128,
                lng: -74.006,
            },
        }
    }
}

/// One entry of the service dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    /// Stable value submitted with the form.
    pub value: String,
    /// Label shown to the user.
    pub label: String,
}

/// Services offered in the contact form dropdown, in display order.
pub fn service_options() -> Vec<ServiceOption> {
    [
        ("laundry", "Laundry Service"),
        ("dry-cleaning", "Dry Cleaning"),
        ("ironing", "Ironing & Pressing"),
        ("commercial", "Commercial Laundry"),
        ("other", "Other"),
    ]
    .into_iter()
    .map(|(value, label)| ServiceOption {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}
