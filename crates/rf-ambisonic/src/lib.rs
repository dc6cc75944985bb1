//! ReelForge Ambisonic Encoder
//!
//! Directional encoding of a mono source into Ambisonic channel gains:
//!
//! ## Encoding
//! - Up to 3rd order (16 channels)
//! - ACN channel ordering, SN3D normalization
//! - Direction from azimuth/elevation or a 3D position
//! - Source width (point to omnidirectional) via per-degree spread weighting
//!
//! ## Lookup Tables
//! - Factored spherical harmonics at 1 degree resolution
//! - Spread weights for 0..360 degrees
//! - Built once per process, shared by every encoder
//!
//! ## Real-time Policy
//! - Gain computation never fails
//! - Malformed directions fall back to front, level
//! - Oversized orders and widths are clamped

#![allow(missing_docs)]

pub mod hoa;
pub mod tables;

mod direction;
mod error;

pub use direction::{DEFAULT_AZIMUTH, DEFAULT_ELEVATION, Direction, Position3D, spread_index};
pub use error::{SpatialError, SpatialResult};
pub use hoa::{AmbisonicOrder, DirectionalEncoder, EncoderOptions};
pub use tables::MAX_ORDER;
