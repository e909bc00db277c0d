//! Fixed-point sine and cosine lookup.
//!
//! Angles are expressed in "angle units": an integer in `[0, 2048)` where
//! 2048 is a full turn. Lookups return `trunc(65536 * f(angle))`, the same
//! 16.16 scale every rotation in the projector shifts back down by 16.
//!
//! The table is built once per process and shared by reference; there is no
//! way to rebuild or mutate it.

use std::f64::consts::PI;
use std::sync::OnceLock;

/// Number of angle units in a full turn.
pub const ANGLE_UNITS: usize = 2048;

/// Fixed-point scale of table entries (`1.0 == 65536`).
pub const FIXED_ONE: i32 = 1 << 16;

const ANGLE_MASK: i32 = ANGLE_UNITS as i32 - 1;

/// Radians per angle unit.
const UNIT: f64 = PI / 1024.0;

static TABLE: OnceLock<TrigTable> = OnceLock::new();

/// Precomputed sine/cosine for every angle unit.
pub struct TrigTable {
    sine: [i32; ANGLE_UNITS],
    cosine: [i32; ANGLE_UNITS],
}

impl TrigTable {
    /// Returns the process-wide table, building it on first use.
    pub fn get() -> &'static TrigTable {
        TABLE.get_or_init(TrigTable::build)
    }

    fn build() -> Self {
        let mut sine = [0; ANGLE_UNITS];
        let mut cosine = [0; ANGLE_UNITS];
        for i in 0..ANGLE_UNITS {
            let radians = i as f64 * UNIT;
            // `as` truncates toward zero, matching the client's tables.
            sine[i] = (FIXED_ONE as f64 * radians.sin()) as i32;
            cosine[i] = (FIXED_ONE as f64 * radians.cos()) as i32;
        }
        Self { sine, cosine }
    }

    /// Fixed-point sine of `angle`.
    ///
    /// `angle` must already be reduced to `[0, 2048)`. This is checked in
    /// debug builds only; release builds mask the index, so an out-of-range
    /// angle silently aliases instead of costing a branch per lookup.
    #[inline]
    pub fn sin(&self, angle: i32) -> i32 {
        debug_assert!(
            (0..ANGLE_UNITS as i32).contains(&angle),
            "angle {angle} outside [0, 2048)"
        );
        self.sine[(angle & ANGLE_MASK) as usize]
    }

    /// Fixed-point cosine of `angle`. Same precondition as [`TrigTable::sin`].
    #[inline]
    pub fn cos(&self, angle: i32) -> i32 {
        debug_assert!(
            (0..ANGLE_UNITS as i32).contains(&angle),
            "angle {angle} outside [0, 2048)"
        );
        self.cosine[(angle & ANGLE_MASK) as usize]
    }
}

/// Reduces any integer angle into `[0, 2048)`.
pub fn wrap_angle(angle: i32) -> i32 {
    angle.rem_euclid(ANGLE_UNITS as i32)
}

/// Converts degrees to the nearest angle unit, wrapped into range.
pub fn angle_from_degrees(degrees: f64) -> i32 {
    wrap_angle((degrees * ANGLE_UNITS as f64 / 360.0).round() as i32)
}
