/// AQI at which the bar is full. Anything above is clamped.
pub const AQI_SCALE_MAX: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiCategory {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AqiCategory::Good => "#00e676",
            AqiCategory::Moderate => "#ffea00",
            AqiCategory::Unhealthy => "#ff9100",
            AqiCategory::Hazardous => "#ff1744",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub category: AqiCategory,
    /// Bar fill, 0..=100.
    pub percent: f64,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn color(&self) -> &'static str {
        self.category.color()
    }
}

/// Maps an AQI reading onto its band. Callers guard against NaN/absent values.
pub fn classify(aqi: f64) -> Classification {
    let category = if aqi <= 50.0 {
        AqiCategory::Good
    } else if aqi <= 100.0 {
        AqiCategory::Moderate
    } else if aqi <= 150.0 {
        AqiCategory::Unhealthy
    } else {
        AqiCategory::Hazardous
    };
    Classification {
        category,
        percent: (aqi / AQI_SCALE_MAX * 100.0).min(100.0),
    }
}
