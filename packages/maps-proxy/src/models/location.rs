use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single reading from the platform's location service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64, // Horizontal accuracy in meters
    pub timestamp: DateTime<Utc>,
}

impl Position {
    /// Create a reading stamped with the current time
    pub fn new(latitude: f64, longitude: f64, accuracy: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy,
            timestamp: Utc::now(),
        }
    }

    /// Validate that coordinates are within valid GPS ranges
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Options passed to the platform with every location request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    // Oldest cached reading the platform may hand back
    pub maximum_age: Duration,
}

impl PositionOptions {
    /// Options for a one-shot request
    pub fn one_shot() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }

    /// Options for continuous tracking
    pub fn watch() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(5),
        }
    }
}

/// Failure reported by the platform's location subsystem.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PositionError {
    #[error("تم رفض الإذن بالوصول إلى الموقع")]
    PermissionDenied,

    #[error("معلومات الموقع غير متاحة")]
    PositionUnavailable,

    #[error("انتهت مهلة طلب الموقع")]
    Timeout,

    #[error("حدث خطأ غير معروف أثناء تحديد الموقع")]
    Other(String),
}

impl PositionError {
    /// Map a W3C geolocation error code to a failure reason
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        match code {
            1 => PositionError::PermissionDenied,
            2 => PositionError::PositionUnavailable,
            3 => PositionError::Timeout,
            _ => PositionError::Other(message.into()),
        }
    }
}
