/// Tolerance used when comparing progress values (snap resolution, boundary checks).
pub(crate) const PROGRESS_EPSILON: f64 = 1e-6;

/// Endpoint-exact: `t = 0` yields `a` and `t = 1` yields `b` bit for bit.
pub(crate) fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// Map `x` from `[start, end]` to `[0, 1]`, clamped. Degenerate spans map to `1` once reached.
pub(crate) fn unlerp_clamped(start: f64, end: f64, x: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 {
        return if x >= start { 1.0 } else { 0.0 };
    }
    ((x - start) / span).clamp(0.0, 1.0)
}

pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
