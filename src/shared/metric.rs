use std::fmt;

/// A measurement key as it appears in snapshots and navigation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Metric {
    Aqi,
    Pm25,
    Temp,
    Hum,
    Other(String),
}

impl Metric {
    pub fn parse(key: &str) -> Self {
        match key {
            "aqi" => Metric::Aqi,
            "pm25" => Metric::Pm25,
            "temp" => Metric::Temp,
            "hum" => Metric::Hum,
            other => Metric::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Metric::Aqi => "aqi",
            Metric::Pm25 => "pm25",
            Metric::Temp => "temp",
            Metric::Hum => "hum",
            Metric::Other(key) => key,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Aqi => "AQI Index Trend",
            Metric::Pm25 => "PM2.5 Measurement Trend",
            Metric::Temp => "Temperature Trend",
            Metric::Hum => "Humidity Trend",
            Metric::Other(_) => "Measurement Trend",
        }
    }

    /// Trend line colour.
    pub fn accent(&self) -> &'static str {
        match self {
            Metric::Aqi => "#00e676",
            Metric::Pm25 => "#ff9100",
            Metric::Temp => "#4facfe",
            Metric::Hum => "#00f2fe",
            Metric::Other(_) => "#ffffff",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Pm25 => "µg/m³",
            Metric::Temp => "°C",
            Metric::Hum => "%",
            Metric::Aqi | Metric::Other(_) => "",
        }
    }

    /// Short caption for stat cards.
    pub fn caption(&self) -> &str {
        match self {
            Metric::Aqi => "Air Quality",
            Metric::Pm25 => "PM2.5",
            Metric::Temp => "Temperature",
            Metric::Hum => "Humidity",
            Metric::Other(key) => key,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
