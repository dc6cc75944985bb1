//! Higher-Order Ambisonics (HOA) encoding
//!
//! Table-driven encoding of a mono source up to [`MAX_ORDER`]:
//! - ACN channel ordering, SN3D normalization (AmbiX)
//! - Direction from azimuth/elevation or a 3D position
//! - Source width via per-degree spread weighting
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rf_ambisonic::hoa::DirectionalEncoder;
//!
//! // 3rd order, 16 channels
//! let mut encoder = DirectionalEncoder::new(3);
//! encoder.set_direction(Some(45.0), Some(30.0));
//! encoder.set_source_width(60.0);
//!
//! // One gain per ACN channel, ready for the amplifier stage
//! let gains = encoder.gains();
//! ```

mod encoder;

pub use encoder::{DirectionalEncoder, EncoderOptions};

use crate::error::{SpatialError, SpatialResult};
use crate::tables::MAX_ORDER;

/// Ambisonic order (determines spatial resolution)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AmbisonicOrder {
    /// Zeroth order (1 channel) - omnidirectional only
    Zeroth = 0,
    /// First order (4 channels) - basic 3D
    First = 1,
    /// Second order (9 channels) - good localization
    Second = 2,
    /// Third order (16 channels) - high quality
    Third = 3,
}

impl AmbisonicOrder {
    /// Highest supported order
    pub const MAX: Self = AmbisonicOrder::Third;

    /// Get channel count for this order
    pub fn channel_count(&self) -> usize {
        channel_count(self.as_usize())
    }

    /// Create from order number, rejecting orders above [`MAX_ORDER`]
    pub fn from_order(order: usize) -> SpatialResult<Self> {
        match order {
            0 => Ok(AmbisonicOrder::Zeroth),
            1 => Ok(AmbisonicOrder::First),
            2 => Ok(AmbisonicOrder::Second),
            3 => Ok(AmbisonicOrder::Third),
            _ => Err(SpatialError::InvalidAmbisonicOrder(order)),
        }
    }

    /// Create from order number, clamping orders above [`MAX_ORDER`].
    ///
    /// Never fails: a clamped order is reported through the log and encoding
    /// continues at the highest supported order.
    pub fn clamped(order: usize) -> Self {
        match Self::from_order(order) {
            Ok(order) => order,
            Err(_) => {
                log::warn!(
                    "[AmbisonicEncoder] Ambisonic order {} exceeds maximum {}, clamping",
                    order,
                    MAX_ORDER
                );
                Self::MAX
            }
        }
    }

    /// Get order number
    pub fn as_usize(&self) -> usize {
        *self as usize
    }
}

/// Channel count for an order: (N + 1)^2
pub fn channel_count(order: usize) -> usize {
    (order + 1) * (order + 1)
}

/// ACN channel index from (degree, index)
pub fn acn_index(degree: i32, index: i32) -> usize {
    (degree * degree + degree + index) as usize
}

/// Get (degree, index) from ACN channel
pub fn acn_to_degree_index(acn: usize) -> (i32, i32) {
    let degree = (acn as f64).sqrt().floor() as i32;
    let index = acn as i32 - degree * degree - degree;
    (degree, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count() {
        assert_eq!(AmbisonicOrder::Zeroth.channel_count(), 1);
        assert_eq!(AmbisonicOrder::First.channel_count(), 4);
        assert_eq!(AmbisonicOrder::Second.channel_count(), 9);
        assert_eq!(AmbisonicOrder::Third.channel_count(), 16);
    }

    #[test]
    fn test_max_matches_table() {
        assert_eq!(AmbisonicOrder::MAX.as_usize(), MAX_ORDER);
    }

    #[test]
    fn test_from_order() {
        assert_eq!(AmbisonicOrder::from_order(2).unwrap(), AmbisonicOrder::Second);
        assert!(matches!(
            AmbisonicOrder::from_order(MAX_ORDER + 1),
            Err(SpatialError::InvalidAmbisonicOrder(4))
        ));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(AmbisonicOrder::clamped(0), AmbisonicOrder::Zeroth);
        assert_eq!(AmbisonicOrder::clamped(MAX_ORDER), AmbisonicOrder::MAX);
        assert_eq!(AmbisonicOrder::clamped(MAX_ORDER + 5), AmbisonicOrder::MAX);
        assert_eq!(AmbisonicOrder::clamped(usize::MAX), AmbisonicOrder::MAX);
    }

    #[test]
    fn test_acn_index() {
        assert_eq!(acn_index(0, 0), 0); // W
        assert_eq!(acn_index(1, -1), 1); // Y
        assert_eq!(acn_index(1, 0), 2); // Z
        assert_eq!(acn_index(1, 1), 3); // X
        assert_eq!(acn_index(3, 3), 15);
    }

    #[test]
    fn test_acn_contiguous() {
        let mut expected = 0;
        for degree in 0..=MAX_ORDER as i32 {
            for index in -degree..=degree {
                assert_eq!(acn_index(degree, index), expected);
                assert_eq!(acn_to_degree_index(expected), (degree, index));
                expected += 1;
            }
        }
        assert_eq!(expected, AmbisonicOrder::MAX.channel_count());
    }
}
