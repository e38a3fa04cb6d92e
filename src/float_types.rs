// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Widen a coordinate decoded from a binary STL record into the active `Real`.
#[inline]
#[allow(clippy::unnecessary_cast)]
pub const fn from_stl(value: f32) -> Real {
    value as Real
}
