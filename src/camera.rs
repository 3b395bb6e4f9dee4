//! Camera state.

use crate::{quaternion::Quaternion, size::Size2, vector::Vector3};

/// How a camera projects the scene onto its viewport.
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectionType {
    Perspective,
    Orthographic,
}

/// The placement and projection of a camera in 3D space.
///
/// The camera looks down its local negative z-axis. The rotation is applied
/// before the translation to `position`.
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera3 {
    projection_type: ProjectionType,
    viewport: Size2,
    position: Vector3,
    rotation: Quaternion,
}

impl Camera3 {
    /// Creates a camera with the given projection type, a unit viewport and
    /// no rotation, placed at the origin.
    pub fn new(projection_type: ProjectionType) -> Self {
        Self {
            projection_type,
            viewport: Size2::new(1.0, 1.0),
            position: Vector3::zeros(),
            rotation: Quaternion::identity(),
        }
    }

    pub fn projection_type(&self) -> ProjectionType {
        self.projection_type
    }

    pub fn viewport(&self) -> &Size2 {
        &self.viewport
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn rotation(&self) -> &Quaternion {
        &self.rotation
    }

    pub fn set_projection_type(&mut self, projection_type: ProjectionType) -> &mut Self {
        self.projection_type = projection_type;
        self
    }

    pub fn viewport_mut(&mut self) -> &mut Size2 {
        &mut self.viewport
    }

    pub fn position_mut(&mut self) -> &mut Vector3 {
        &mut self.position
    }

    pub fn rotation_mut(&mut self) -> &mut Quaternion {
        &mut self.rotation
    }
}
