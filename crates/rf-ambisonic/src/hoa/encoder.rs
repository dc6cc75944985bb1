//! Directional encoder - mono source to per-channel Ambisonic gains

use serde::{Deserialize, Serialize};

use super::{AmbisonicOrder, acn_index};
use crate::direction::{Direction, Position3D, spread_index};
use crate::error::{SpatialError, SpatialResult};
use crate::tables::{azimuth_term_index, elevation_term_index, max_re_weights, spherical_harmonics};

/// Encoder construction options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Requested Ambisonic order (clamped on construction)
    pub ambisonic_order: usize,
    /// Initial azimuth in degrees
    pub azimuth: f32,
    /// Initial elevation in degrees
    pub elevation: f32,
    /// Initial source width in degrees
    pub source_width: f32,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            ambisonic_order: 1,
            azimuth: 0.0,
            elevation: 0.0,
            source_width: 0.0,
        }
    }
}

impl EncoderOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SpatialResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Strict check, for callers that prefer failing over clamping
    pub fn validate(&self) -> SpatialResult<AmbisonicOrder> {
        AmbisonicOrder::from_order(self.ambisonic_order)
    }
}

/// Encoder producing one gain per ACN channel for a single mono source
///
/// The order is fixed for the life of the encoder. Every direction or width
/// change recomputes the whole gain vector from the shared tables.
#[derive(Debug, Clone)]
pub struct DirectionalEncoder {
    /// Ambisonic order
    order: AmbisonicOrder,
    /// Last requested direction, not range-reduced
    direction: Direction,
    /// Spread table row
    spread_index: usize,
    /// Gain per ACN channel
    gains: Vec<f32>,
}

impl DirectionalEncoder {
    /// Create new encoder. Orders above the table maximum are clamped.
    pub fn new(order: usize) -> Self {
        let order = AmbisonicOrder::clamped(order);
        let mut gains = vec![0.0f32; order.channel_count()];
        // W carries the omnidirectional component and is never rewritten
        gains[0] = 1.0;

        let mut encoder = Self {
            order,
            direction: Direction::forward(),
            spread_index: 0,
            gains,
        };
        encoder.update_gains();
        encoder
    }

    /// Create encoder and apply initial direction and width
    pub fn with_options(options: EncoderOptions) -> Self {
        let mut encoder = Self::new(options.ambisonic_order);
        encoder.spread_index = spread_index(options.source_width);
        encoder.set_direction(Some(options.azimuth), Some(options.elevation));
        encoder
    }

    /// Get Ambisonic order
    pub fn order(&self) -> AmbisonicOrder {
        self.order
    }

    /// Get number of output channels
    pub fn channel_count(&self) -> usize {
        self.gains.len()
    }

    /// Gains indexed by ACN channel
    pub fn gains(&self) -> &[f32] {
        &self.gains
    }

    /// Last requested direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current spread table row
    pub fn spread_index(&self) -> usize {
        self.spread_index
    }

    /// Set source direction in degrees.
    ///
    /// Missing or NaN components fall back to front, level.
    pub fn set_direction(&mut self, azimuth: Option<f32>, elevation: Option<f32>) {
        self.direction = Direction::sanitize(azimuth, elevation);
        self.update_gains();
    }

    /// Set source direction from plain degrees
    pub fn set_direction_degrees(&mut self, azimuth: f32, elevation: f32) {
        self.set_direction(Some(azimuth), Some(elevation));
    }

    /// Point the source at a position relative to the listener
    pub fn set_position(&mut self, position: &Position3D) {
        let direction = position.to_direction();
        self.set_direction(Some(direction.azimuth), Some(direction.elevation));
    }

    /// Set source width in degrees (0 = point, 360 = omnidirectional)
    pub fn set_source_width(&mut self, width: f32) {
        self.spread_index = spread_index(width);
        let Direction {
            azimuth,
            elevation,
        } = self.direction;
        self.set_direction(Some(azimuth), Some(elevation));
    }

    /// Apply the current gains to a mono block, one output buffer per channel
    pub fn encode_block(&self, mono: &[f32], output: &mut [Vec<f32>]) -> SpatialResult<()> {
        if output.len() != self.gains.len() {
            return Err(SpatialError::InvalidChannelCount {
                expected: self.gains.len(),
                got: output.len(),
            });
        }
        if let Some(short) = output.iter().find(|buffer| buffer.len() < mono.len()) {
            return Err(SpatialError::BufferSizeMismatch {
                expected: mono.len(),
                got: short.len(),
            });
        }

        for (buffer, &gain) in output.iter_mut().zip(&self.gains) {
            for (out, &sample) in buffer.iter_mut().zip(mono) {
                *out = sample * gain;
            }
        }

        Ok(())
    }

    /// Recompute every directional channel from the tables
    fn update_gains(&mut self) {
        let harmonics = spherical_harmonics();
        let weights = max_re_weights();

        let azimuth_index = self.direction.azimuth_index();
        let elevation_index = self.direction.elevation_index();

        for degree in 1..=self.order.as_usize() {
            let weight = weights.weight(self.spread_index, degree);
            let l = degree as i32;

            for m in -l..=l {
                let mut gain =
                    harmonics.elevation_factor(elevation_index, elevation_term_index(degree, m));
                if m != 0 {
                    gain *= harmonics.azimuth_factor(azimuth_index, azimuth_term_index(m));
                }
                self.gains[acn_index(l, m)] = gain * weight;
            }
        }
    }
}
