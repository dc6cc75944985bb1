//! Precomputed lookup tables for directional encoding
//!
//! Two read-only tables, built once per process on first access and shared
//! by every encoder through `&'static` references:
//!
//! - [`SphericalHarmonicsTable`]: real SN3D spherical harmonics factored into
//!   an elevation part (associated Legendre terms) and an azimuth part
//!   (cos/sin terms), both sampled at 1 degree.
//! - [`MaxReWeightTable`]: per-degree weights indexed by source spread,
//!   attenuating directional degrees as the source widens.
//!
//! Indices are never validated here. The encoder clamps before lookup.

use std::sync::LazyLock;

/// Highest Ambisonic order covered by the harmonics table
pub const MAX_ORDER: usize = 3;

/// Azimuth rows (0..360 degrees)
pub const AZIMUTH_STEPS: usize = 360;

/// Elevation rows (-90..=90 degrees, stored as 0..=180)
pub const ELEVATION_STEPS: usize = 181;

/// Spread rows (0..360 degrees)
pub const SPREAD_STEPS: usize = 360;

/// Elevation terms per row: one per (l, |m|) with l in 1..=MAX_ORDER
pub const ELEVATION_TERMS: usize = MAX_ORDER * (MAX_ORDER + 3) / 2;

/// Azimuth terms per row: sin terms for m < 0, then cos terms for m > 0
pub const AZIMUTH_TERMS: usize = 2 * MAX_ORDER;

static SPHERICAL_HARMONICS: LazyLock<SphericalHarmonicsTable> =
    LazyLock::new(SphericalHarmonicsTable::build);

static MAX_RE_WEIGHTS: LazyLock<MaxReWeightTable> = LazyLock::new(MaxReWeightTable::build);

/// Shared spherical harmonics table
pub fn spherical_harmonics() -> &'static SphericalHarmonicsTable {
    &SPHERICAL_HARMONICS
}

/// Shared spread weighting table
pub fn max_re_weights() -> &'static MaxReWeightTable {
    &MAX_RE_WEIGHTS
}

/// Elevation term slot for degree `l >= 1` and index `m`.
///
/// Terms are packed triangularly, since the elevation factor only depends
/// on `|m|`.
#[inline]
pub fn elevation_term_index(l: usize, m: i32) -> usize {
    l * (l + 1) / 2 + m.unsigned_abs() as usize - 1
}

/// Azimuth term slot for index `m != 0`.
///
/// Slots `0..MAX_ORDER` hold `sin(|m| az)` for m = -MAX_ORDER..=-1,
/// slots `MAX_ORDER..2*MAX_ORDER` hold `cos(m az)` for m = 1..=MAX_ORDER.
#[inline]
pub fn azimuth_term_index(m: i32) -> usize {
    debug_assert!(m != 0, "zonal harmonics have no azimuth term");
    if m > 0 {
        (MAX_ORDER as i32 + m - 1) as usize
    } else {
        (MAX_ORDER as i32 + m) as usize
    }
}

/// Real spherical harmonics in factored form
pub struct SphericalHarmonicsTable {
    /// [elevation_index][elevation_term]
    elevation: Vec<[f32; ELEVATION_TERMS]>,
    /// [azimuth_index][azimuth_term]
    azimuth: Vec<[f32; AZIMUTH_TERMS]>,
}

impl SphericalHarmonicsTable {
    /// Elevation-dependent factor at table row `elevation_index` (0..=180)
    #[inline]
    pub fn elevation_factor(&self, elevation_index: usize, term: usize) -> f32 {
        self.elevation[elevation_index][term]
    }

    /// Azimuth-dependent factor at table row `azimuth_index` (0..360)
    #[inline]
    pub fn azimuth_factor(&self, azimuth_index: usize, term: usize) -> f32 {
        self.azimuth[azimuth_index][term]
    }

    fn build() -> Self {
        let mut elevation = vec![[0.0f32; ELEVATION_TERMS]; ELEVATION_STEPS];
        for (index, row) in elevation.iter_mut().enumerate() {
            let sin_el = (index as f64 - 90.0).to_radians().sin();
            for l in 1..=MAX_ORDER {
                for m in 0..=l {
                    let value = sn3d_factor(l, m) * associated_legendre(l, m, sin_el);
                    row[elevation_term_index(l, m as i32)] = value as f32;
                }
            }
        }

        let mut azimuth = vec![[0.0f32; AZIMUTH_TERMS]; AZIMUTH_STEPS];
        for (index, row) in azimuth.iter_mut().enumerate() {
            let az = (index as f64).to_radians();
            for m in 1..=MAX_ORDER as i32 {
                let angle = m as f64 * az;
                row[azimuth_term_index(m)] = angle.cos() as f32;
                row[azimuth_term_index(-m)] = angle.sin() as f32;
            }
        }

        Self { elevation, azimuth }
    }
}

/// Spread weights per degree
///
/// Row `s` holds `r(s)^l` for l = 1..=MAX_ORDER, the Legendre coefficients
/// of a Poisson spreading kernel with `r(s) = cos^2(s / 4)`. A point source
/// (s = 0) keeps every degree at 1; at s -> 360 all directional degrees
/// fall to 0 and only the omnidirectional channel remains. Higher degrees
/// always fall faster.
pub struct MaxReWeightTable {
    weights: Vec<[f32; MAX_ORDER]>,
}

impl MaxReWeightTable {
    /// Weight for `degree` at `spread_index` (0..360). Degree 0 is always 1.
    #[inline]
    pub fn weight(&self, spread_index: usize, degree: usize) -> f32 {
        if degree == 0 {
            return 1.0;
        }
        self.weights[spread_index][degree - 1]
    }

    fn build() -> Self {
        let weights = (0..SPREAD_STEPS)
            .map(|spread| {
                let r = (spread as f64 / 4.0).to_radians().cos().powi(2);
                let mut row = [0.0f32; MAX_ORDER];
                for (degree, w) in row.iter_mut().enumerate() {
                    *w = r.powi(degree as i32 + 1) as f32;
                }
                row
            })
            .collect();

        Self { weights }
    }
}

/// SN3D normalization factor
fn sn3d_factor(l: usize, m: usize) -> f64 {
    let delta = if m == 0 { 1.0 } else { 0.0 };
    ((2.0 - delta) * factorial(l - m) / factorial(l + m)).sqrt()
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Associated Legendre function P_l^m(x), without the Condon-Shortley phase
fn associated_legendre(l: usize, m: usize, x: f64) -> f64 {
    let somx2 = (1.0 - x * x).max(0.0).sqrt();

    // P_m^m = (2m-1)!! (1-x^2)^(m/2)
    let mut pmm = 1.0;
    let mut odd = 1.0;
    for _ in 0..m {
        pmm *= odd * somx2;
        odd += 2.0;
    }
    if l == m {
        return pmm;
    }

    let mut pmmp1 = x * (2 * m + 1) as f64 * pmm;
    if l == m + 1 {
        return pmmp1;
    }

    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        pll = ((2 * ll - 1) as f64 * x * pmmp1 - (ll + m - 1) as f64 * pmm) / (ll - m) as f64;
        pmm = pmmp1;
        pmmp1 = pll;
    }
    pll
}
