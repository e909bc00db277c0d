//! Scene camera pose
//!
//! # Coordinate System
//!
//! Positions are in local scene units (128 per tile):
//! - X: east
//! - Y: north
//! - Z: height, growing **downward** like the client's height grid
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch in angle units (2048 per turn) and
//! resolved through the fixed-point trig table by the projector.
//!
//! - **Yaw**: rotation around the vertical axis
//! - **Pitch**: tilt toward the ground

use crate::math::vec3::Vec3i;
use crate::trig::wrap_angle;

/// Camera position and yaw/pitch orientation.
///
/// Angles are always kept in `[0, 2048)` so they can be handed straight to
/// the trig table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    position: Vec3i,
    yaw: i32,
    pitch: i32,
}

impl Camera {
    /// Creates a camera at `position`. Angles are wrapped into range.
    pub fn new(position: Vec3i, yaw: i32, pitch: i32) -> Self {
        Self {
            position,
            yaw: wrap_angle(yaw),
            pitch: wrap_angle(pitch),
        }
    }

    pub fn position(&self) -> Vec3i {
        self.position
    }

    pub fn yaw(&self) -> i32 {
        self.yaw
    }

    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    pub fn set_position(&mut self, position: Vec3i) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_yaw(&mut self, yaw: i32) -> &mut Self {
        self.yaw = wrap_angle(yaw);
        self
    }

    pub fn set_pitch(&mut self, pitch: i32) -> &mut Self {
        self.pitch = wrap_angle(pitch);
        self
    }

    // =========================================================================
    // Orientation - Rotation
    // =========================================================================

    /// Rotates the camera by yaw and pitch deltas.
    pub fn rotate(&mut self, yaw_delta: i32, pitch_delta: i32) -> &mut Self {
        self.rotate_yaw(yaw_delta).rotate_pitch(pitch_delta)
    }

    /// Rotates around the vertical axis, wrapping past a full turn.
    pub fn rotate_yaw(&mut self, delta: i32) -> &mut Self {
        self.yaw = wrap_angle(self.yaw.wrapping_add(delta));
        self
    }

    /// Tilts the camera, wrapping past a full turn.
    pub fn rotate_pitch(&mut self, delta: i32) -> &mut Self {
        self.pitch = wrap_angle(self.pitch.wrapping_add(delta));
        self
    }

    /// Moves the camera by `delta` local units.
    pub fn translate(&mut self, delta: Vec3i) -> &mut Self {
        self.position = self.position + delta;
        self
    }
}
