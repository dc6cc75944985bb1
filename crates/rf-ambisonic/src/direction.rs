//! Source direction, position and table index mapping
//!
//! Angles follow the AmbiX convention: azimuth 0 = front, positive azimuth
//! turns counter-clockwise (towards the left), positive elevation is up.

use crate::tables::{ELEVATION_STEPS, SPREAD_STEPS};

/// Azimuth substituted for a missing or non-finite request
pub const DEFAULT_AZIMUTH: f32 = 0.0;

/// Elevation substituted for a missing or NaN request
pub const DEFAULT_ELEVATION: f32 = 0.0;

/// Requested source direction in degrees
///
/// Values are kept as requested (after default substitution). Range
/// reduction happens only when deriving table indices, so repeated updates
/// never accumulate rounding drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    /// Azimuth in degrees, unbounded
    pub azimuth: f32,
    /// Elevation in degrees, clamped to [-90, 90] on lookup
    pub elevation: f32,
}

impl Direction {
    /// Create new direction
    pub fn new(azimuth: f32, elevation: f32) -> Self {
        Self {
            azimuth,
            elevation,
        }
    }

    /// Facing forward, level
    pub fn forward() -> Self {
        Self::new(DEFAULT_AZIMUTH, DEFAULT_ELEVATION)
    }

    /// Build a usable direction from possibly missing or malformed input.
    ///
    /// Missing or non-finite azimuth falls back to [`DEFAULT_AZIMUTH`];
    /// missing or NaN elevation falls back to [`DEFAULT_ELEVATION`].
    /// Infinite elevation is kept and clamps like any out-of-range value.
    pub fn sanitize(azimuth: Option<f32>, elevation: Option<f32>) -> Self {
        let azimuth = azimuth
            .filter(|az| az.is_finite())
            .unwrap_or(DEFAULT_AZIMUTH);
        let elevation = elevation
            .filter(|el| !el.is_nan())
            .unwrap_or(DEFAULT_ELEVATION);
        Self::new(azimuth, elevation)
    }

    /// Azimuth table row in [0, 360)
    pub fn azimuth_index(&self) -> usize {
        (self.azimuth.round() as i64).rem_euclid(360) as usize
    }

    /// Elevation table row in [0, 180]
    pub fn elevation_index(&self) -> usize {
        let index = self.elevation.clamp(-90.0, 90.0).round() + 90.0;
        (index as usize).min(ELEVATION_STEPS - 1)
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::forward()
    }
}

/// Spread table row for a source width in degrees, in [0, 359]
///
/// NaN maps to 0, widths of 360 and above saturate at 359.
pub fn spread_index(width: f32) -> usize {
    if width.is_nan() {
        return 0;
    }
    width.round().clamp(0.0, (SPREAD_STEPS - 1) as f32) as usize
}

/// Source position relative to the listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position3D {
    /// X coordinate (left/right, positive = right)
    pub x: f32,
    /// Y coordinate (front/back, positive = front)
    pub y: f32,
    /// Z coordinate (up/down, positive = up)
    pub z: f32,
}

impl Position3D {
    /// Create new position
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Origin position
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Place a point at `distance` along `direction`
    pub fn from_direction(direction: Direction, distance: f32) -> Self {
        let az_rad = direction.azimuth.to_radians();
        let el_rad = direction.elevation.to_radians();

        let cos_el = el_rad.cos();

        Self {
            x: -distance * az_rad.sin() * cos_el,
            y: distance * az_rad.cos() * cos_el,
            z: distance * el_rad.sin(),
        }
    }

    /// Get magnitude (distance from origin)
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Direction of this point as seen from the origin.
    ///
    /// The origin itself has no direction and maps to [`Direction::forward`].
    pub fn to_direction(&self) -> Direction {
        let distance = self.magnitude();
        if !distance.is_finite() || distance < 1e-10 {
            return Direction::forward();
        }

        let azimuth = (-self.x).atan2(self.y).to_degrees();
        let elevation = (self.z / distance).clamp(-1.0, 1.0).asin().to_degrees();

        Direction::new(azimuth, elevation)
    }
}

impl Default for Position3D {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sanitize_defaults() {
        assert_eq!(Direction::sanitize(None, None), Direction::forward());
        assert_eq!(
            Direction::sanitize(Some(f32::NAN), Some(f32::NAN)),
            Direction::forward()
        );
        assert_eq!(
            Direction::sanitize(Some(f32::INFINITY), Some(45.0)),
            Direction::new(0.0, 45.0)
        );
        assert_eq!(
            Direction::sanitize(Some(-400.0), Some(120.0)),
            Direction::new(-400.0, 120.0)
        );
    }

    #[test]
    fn test_azimuth_wraps() {
        assert_eq!(Direction::new(0.0, 0.0).azimuth_index(), 0);
        assert_eq!(Direction::new(370.0, 0.0).azimuth_index(), 10);
        assert_eq!(Direction::new(-10.0, 0.0).azimuth_index(), 350);
        assert_eq!(Direction::new(-350.0, 0.0).azimuth_index(), 10);
        assert_eq!(Direction::new(359.6, 0.0).azimuth_index(), 0);
        assert_eq!(Direction::new(720.0, 0.0).azimuth_index(), 0);
    }

    #[test]
    fn test_elevation_clamps() {
        assert_eq!(Direction::new(0.0, 0.0).elevation_index(), 90);
        assert_eq!(Direction::new(0.0, 90.0).elevation_index(), 180);
        assert_eq!(Direction::new(0.0, 190.0).elevation_index(), 180);
        assert_eq!(Direction::new(0.0, -90.0).elevation_index(), 0);
        assert_eq!(Direction::new(0.0, f32::NEG_INFINITY).elevation_index(), 0);
        assert_eq!(Direction::new(0.0, 30.4).elevation_index(), 120);
    }

    #[test]
    fn test_spread_index() {
        assert_eq!(spread_index(0.0), 0);
        assert_eq!(spread_index(-5.0), 0);
        assert_eq!(spread_index(45.4), 45);
        assert_eq!(spread_index(359.0), 359);
        assert_eq!(spread_index(1000.0), 359);
        assert_eq!(spread_index(f32::NAN), 0);
        assert_eq!(spread_index(f32::INFINITY), 359);
    }

    #[test]
    fn test_position_direction() {
        // Front
        let dir = Position3D::new(0.0, 1.0, 0.0).to_direction();
        assert_abs_diff_eq!(dir.azimuth, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(dir.elevation, 0.0, epsilon = 1e-4);

        // Left is positive azimuth
        let dir = Position3D::new(-1.0, 0.0, 0.0).to_direction();
        assert_abs_diff_eq!(dir.azimuth, 90.0, epsilon = 1e-4);

        // Above
        let dir = Position3D::new(0.0, 0.0, 2.0).to_direction();
        assert_abs_diff_eq!(dir.elevation, 90.0, epsilon = 1e-4);

        // Origin has no direction
        assert_eq!(Position3D::origin().to_direction(), Direction::forward());
    }

    #[test]
    fn test_position_round_trip() {
        let original = Direction::new(-120.0, 35.0);
        let back = Position3D::from_direction(original, 3.0).to_direction();

        assert_abs_diff_eq!(back.azimuth, original.azimuth, epsilon = 1e-3);
        assert_abs_diff_eq!(back.elevation, original.elevation, epsilon = 1e-3);
    }
}
