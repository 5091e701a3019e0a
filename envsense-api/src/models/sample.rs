use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SampleField {
    Temperature,
    Humidity,
    AirQuality,
    LightLevel,
}

impl SampleField {
    pub const ALL: [SampleField; 4] = [
        SampleField::Temperature,
        SampleField::Humidity,
        SampleField::AirQuality,
        SampleField::LightLevel,
    ];

    /// Key used for this field in the JSON payload and the dashboard markup.
    pub fn name(&self) -> &'static str {
        match self {
            SampleField::Temperature => "temperature",
            SampleField::Humidity => "humidity",
            SampleField::AirQuality => "air_quality",
            SampleField::LightLevel => "light_level",
        }
    }

    /// Closed range every generated value of this field falls in.
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            SampleField::Temperature => Sample::TEMPERATURE_RANGE,
            SampleField::Humidity => Sample::HUMIDITY_RANGE,
            SampleField::AirQuality => Sample::AIR_QUALITY_RANGE,
            SampleField::LightLevel => Sample::LIGHT_LEVEL_RANGE,
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            SampleField::Temperature => Some("°C"),
            SampleField::Humidity => Some("%"),
            SampleField::AirQuality => None,
            SampleField::LightLevel => Some("Lux"),
        }
    }
}

impl fmt::Display for SampleField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One synthetic environmental reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
pub struct Sample {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Dimensionless air quality index.
    pub air_quality: f64,
    /// Illuminance in lux.
    pub light_level: f64,
}

impl Sample {
    pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 15.0..=30.0;
    pub const HUMIDITY_RANGE: RangeInclusive<f64> = 30.0..=70.0;
    pub const AIR_QUALITY_RANGE: RangeInclusive<f64> = 10.0..=100.0;
    pub const LIGHT_LEVEL_RANGE: RangeInclusive<f64> = 100.0..=1000.0;

    pub fn get(&self, field: SampleField) -> f64 {
        match field {
            SampleField::Temperature => self.temperature,
            SampleField::Humidity => self.humidity,
            SampleField::AirQuality => self.air_quality,
            SampleField::LightLevel => self.light_level,
        }
    }

    /// Fails with the first field whose value lies outside its closed range.
    /// Non-finite values are never in range.
    pub fn validate(&self) -> Result<(), (SampleField, f64)> {
        match SampleField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .find(|(field, value)| !field.range().contains(value))
        {
            Some(invalid) => Err(invalid),
            None => Ok(()),
        }
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sample {
        Sample {
            temperature: 21.5,
            humidity: 45.25,
            air_quality: 55.0,
            light_level: 640.12,
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        for field in SampleField::ALL {
            assert_eq!(object[field.name()], serde_json::json!(sample().get(field)));
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(sample().validate(), Ok(()));

        let bounds = Sample {
            temperature: 15.0,
            humidity: 70.0,
            air_quality: 10.0,
            light_level: 1000.0,
        };
        assert_eq!(bounds.validate(), Ok(()));

        let hot = Sample { temperature: 30.01, ..sample() };
        assert_eq!(hot.validate(), Err((SampleField::Temperature, 30.01)));

        let dark = Sample { light_level: 99.99, ..sample() };
        assert_eq!(dark.validate(), Err((SampleField::LightLevel, 99.99)));

        let broken = Sample { humidity: f64::NAN, ..sample() };
        assert!(matches!(broken.validate(), Err((SampleField::Humidity, _))));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        for field in SampleField::ALL {
            let range = field.range();
            assert!(range.contains(range.start()));
            assert!(range.contains(range.end()));
        }
    }

    #[cfg(feature = "docs")]
    #[test]
    fn test_sample_schema() {
        let schema = serde_json::to_value(<Sample as utoipa::PartialSchema>::schema()).unwrap();

        for field in SampleField::ALL {
            assert!(schema["properties"][field.name()].is_object(), "{field}");
        }
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(21.456), 21.46);
        assert_eq!(round_to_hundredths(21.454), 21.45);
        assert_eq!(round_to_hundredths(29.999), 30.0);
        assert_eq!(round_to_hundredths(15.0), 15.0);
    }
}
