use envsense_api::models::{Sample, SampleField, round_to_hundredths};
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::errors::SampleError;

/// Produces one fresh sample per call. Implementations must not cache.
pub trait SampleSource: Send + Sync {
    fn sample(&self) -> Result<Sample, SampleError>;
}

/// Draws each field independently and uniformly from its closed range.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    temperature: Uniform<f64>,
    humidity: Uniform<f64>,
    air_quality: Uniform<f64>,
    light_level: Uniform<f64>,
}

impl SampleGenerator {
    pub fn new() -> Result<Self, SampleError> {
        Ok(Self {
            temperature: uniform(SampleField::Temperature)?,
            humidity: uniform(SampleField::Humidity)?,
            air_quality: uniform(SampleField::AirQuality)?,
            light_level: uniform(SampleField::LightLevel)?,
        })
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sample, SampleError> {
        let sample = Sample {
            temperature: round_to_hundredths(self.temperature.sample(rng)),
            humidity: round_to_hundredths(self.humidity.sample(rng)),
            air_quality: round_to_hundredths(self.air_quality.sample(rng)),
            light_level: round_to_hundredths(self.light_level.sample(rng)),
        };

        sample
            .validate()
            .map_err(|(field, value)| SampleError::OutOfRange { field, value })?;

        Ok(sample)
    }
}

fn uniform(field: SampleField) -> Result<Uniform<f64>, SampleError> {
    let range = field.range();

    Uniform::new_inclusive(*range.start(), *range.end())
        .map_err(|source| SampleError::InvalidRange { field, source })
}

/// Samples from the thread-local generator on every call.
#[derive(Debug, Clone)]
pub struct RandomSampleSource {
    generator: SampleGenerator,
}

impl RandomSampleSource {
    pub fn new() -> Result<Self, SampleError> {
        Ok(Self {
            generator: SampleGenerator::new()?,
        })
    }
}

impl SampleSource for RandomSampleSource {
    fn sample(&self) -> Result<Sample, SampleError> {
        self.generator.generate(&mut rand::rng())
    }
}
