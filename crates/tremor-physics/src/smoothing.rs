//! Separable Gaussian blur over a square field.
//!
//! Emulates wave diffusion by smoothing the just-computed amplitude
//! field once per step. The kernel radius is four standard deviations
//! (rounded), edges are handled by mirroring with the edge sample
//! repeated, and the two passes (rows, then columns) are equivalent to
//! a full 2D Gaussian because the kernel is separable.

use smallvec::SmallVec;

/// Mirror an index into `[0, len)` with the edge sample repeated:
/// `-1 -> 0`, `-2 -> 1`, `len -> len-1`, `len+1 -> len-2`.
fn mirror(idx: i64, len: usize) -> usize {
    let len = len as i64;
    let mut i = idx;
    // At radius <= 4σ and practical field sizes one fold suffices, but
    // loop so tiny fields stay correct.
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= len {
            i = 2 * len - i - 1;
        } else {
            return i as usize;
        }
    }
}

/// Normalized 1D Gaussian kernel for the given spread.
fn kernel(sigma: f64) -> SmallVec<[f64; 8]> {
    let radius = (4.0 * sigma).round().max(1.0) as i64;
    let mut weights: SmallVec<[f64; 8]> = SmallVec::new();
    let mut sum = 0.0;
    for x in -radius..=radius {
        let w = (-(x as f64 * x as f64) / (2.0 * sigma * sigma)).exp();
        weights.push(w);
        sum += w;
    }
    for w in weights.iter_mut() {
        *w /= sum;
    }
    weights
}

/// Smooth a row-major `size × size` field in place with a Gaussian of
/// the given spread.
///
/// `field.len()` must equal `size * size`; a zero `sigma` or empty
/// field leaves the input untouched.
pub fn gaussian_smooth(field: &mut [f64], size: usize, sigma: f64) {
    if size == 0 || sigma <= 0.0 {
        return;
    }
    debug_assert_eq!(field.len(), size * size);

    let weights = kernel(sigma);
    let radius = (weights.len() / 2) as i64;
    let mut scratch = vec![0.0f64; field.len()];

    // Horizontal pass: field -> scratch.
    for r in 0..size {
        for c in 0..size {
            let mut acc = 0.0;
            for (k, w) in weights.iter().enumerate() {
                let cc = mirror(c as i64 + k as i64 - radius, size);
                acc += w * field[r * size + cc];
            }
            scratch[r * size + c] = acc;
        }
    }

    // Vertical pass: scratch -> field.
    for r in 0..size {
        for c in 0..size {
            let mut acc = 0.0;
            for (k, w) in weights.iter().enumerate() {
                let rr = mirror(r as i64 + k as i64 - radius, size);
                acc += w * scratch[rr * size + c];
            }
            field[r * size + c] = acc;
        }
    }
}
