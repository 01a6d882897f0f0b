use glam::Vec3;

/// Hermite interpolation between `from` and `to`.
///
/// `t` is clamped to `[0, 1]` and eased with `t * t * (3 - 2t)`, so the curve
/// leaves `from` and arrives at `to` with zero slope.
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let t = t * t * (3.0 - 2.0 * t);
    to * t + from * (1.0 - t)
}

/// Project a direction onto the horizontal plane and renormalize it.
///
/// A vertical or zero input yields `Vec3::ZERO`.
pub fn planar(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}
