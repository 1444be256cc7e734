//! Math library for the Pony engine
//!
//! Value types generic over their element type (see [`scalar`] for the accepted types):
//!
//! ## Vectors
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - fixed-size vectors with x, y, z, w components
//!
//! ## Matrices
//!
//! - [`Matrix2x2`], [`Matrix3x3`], [`Matrix4x4`] - column-major square matrices
//!
//! ## Rotations
//!
//! - [`Quaternion`] - 3D rotation with Euler, axis-angle, direction and matrix conversions
//! - [`transformations2d`] - rotation/scale and translation/rotation/scale matrices in 2D
//!
//! ## Colors
//!
//! - [`RGB`], [`RGBA`] - floating point colors
//! - [`RGBInt`], [`RGBAInt`] - integer colors with channels in `[0, max]`
//!
//! Every type is `Copy`, `#[repr(C)]` and [`bytemuck::Pod`] for `Pod` element types. Degenerate
//! input (normalizing a zero vector, inverting a singular matrix) never panics: floating point
//! results become infinite or NaN and can be checked with the `is_finite` methods.

#[macro_use]
mod vector_macros;
#[macro_use]
mod matrix_macros;
#[macro_use]
mod color_macros;

pub mod scalar;

mod vector2;
mod vector3;
mod vector4;
mod matrix2x2;
mod matrix3x3;
mod matrix4x4;
mod quaternion;
mod rgb;
mod rgba;
mod rgb_int;
mod rgba_int;
pub mod transformations2d;

pub use scalar::{ColorInt, Number, Real};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
pub use matrix2x2::Matrix2x2;
pub use matrix3x3::Matrix3x3;
pub use matrix4x4::Matrix4x4;
pub use quaternion::Quaternion;
pub use rgb::{RGB, GAMMA_VALUE, GRAYSCALE_WEIGHTS};
pub use rgba::RGBA;
pub use rgb_int::RGBInt;
pub use rgba_int::RGBAInt;
