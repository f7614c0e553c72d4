//! Numeric kernel selection.
//!
//! This module pins the vector and transform types the rest of the crate
//! works with. The current kernel is glam; switching to a different math
//! library means changing only these aliases.

/// 2D single-precision vector
pub type Vector2f = glam::Vec2;
/// 2D double-precision vector
pub type Vector2d = glam::DVec2;
/// 3D single-precision vector
pub type Vector3f = glam::Vec3;
/// 3D double-precision vector
pub type Vector3d = glam::DVec3;
/// 4D single-precision vector
pub type Vector4f = glam::Vec4;
/// 4D double-precision vector
pub type Vector4d = glam::DVec4;

/// 3D affine transform, single precision
pub type Transformf = glam::Affine3A;
/// 3D affine transform, double precision
pub type Transformd = glam::DAffine3;
