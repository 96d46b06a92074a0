//! Aspect-ratio preserving fit calculations.
//!
//! Pure functions, testable without any I/O or images.

use super::ComposeError;

/// Fit `source` dimensions into `bounds`, preserving aspect ratio.
///
/// The result touches at least one edge of the bounds; the other dimension is
/// derived by integer floor division. A source exactly matching the bounds'
/// aspect ratio takes the width-clamp branch. Fitting may enlarge as well as
/// shrink.
///
/// A zero-width or zero-height source is rejected with
/// [`ComposeError::DegenerateGeometry`].
pub fn fit_size(source: (u32, u32), bounds: (u32, u32)) -> Result<(u32, u32), ComposeError> {
    let (w, h) = source;
    if w == 0 || h == 0 {
        return Err(ComposeError::DegenerateGeometry {
            width: w,
            height: h,
        });
    }
    let (bound_w, bound_h) = bounds;

    // Cross-multiplied aspect comparison: w/h >= bound_w/bound_h without
    // floating point. Widths and heights fit u32, so u64 cannot overflow.
    if u64::from(w) * u64::from(bound_h) >= u64::from(h) * u64::from(bound_w) {
        let out_w = bound_w;
        let out_h = (u64::from(h) * u64::from(bound_w) / u64::from(w)) as u32;
        // Floor division can collapse extreme aspect ratios to zero pixels;
        // clamp to keep the result drawable.
        Ok((out_w, out_h.max(1)))
    } else {
        let out_h = bound_h;
        let out_w = (u64::from(w) * u64::from(bound_h) / u64::from(h)) as u32;
        Ok((out_w.max(1), out_h))
    }
}
