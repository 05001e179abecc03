//! CIE76 color difference metrics
//!
//! Two pure functions over [`Lab`] pairs: the CIE76 Delta E (Euclidean
//! distance in Lab) and the metric hue difference Delta H, which isolates
//! the hue component of Delta E from the lightness and chroma components.

use crate::color::Lab;

/// CIE76 Delta E: Euclidean distance in Lab space.
///
/// Symmetric, always >= 0, and zero exactly when both colors have
/// identical Lab coordinates. A Delta E around 2.3 corresponds to a just
/// noticeable difference for average viewing conditions.
///
/// # Example
///
/// ```
/// use cielab::{metric, Lab};
///
/// let c = Lab::new(50.0, 10.0, -10.0);
/// assert_eq!(metric::delta_e(c, c), 0.0);
///
/// let white = Lab::new(100.0, 0.0, 0.0);
/// let black = Lab::new(0.0, 0.0, 0.0);
/// assert_eq!(metric::delta_e(white, black), 100.0);
/// ```
pub fn delta_e(c1: Lab, c2: Lab) -> f64 {
    let dl = c1.l - c2.l;
    let da = c1.a - c2.a;
    let db = c1.b - c2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Metric hue difference Delta H.
///
/// Decomposes the squared CIE76 distance into lightness, chroma, and hue
/// contributions and returns the hue part:
///
/// `delta_h = sqrt(delta_e^2 - delta_L^2 - delta_C^2)`
///
/// where `C = sqrt(a^2 + b^2)` per color. The radicand can come out
/// slightly negative for near-identical colors under floating-point
/// cancellation; it is clamped to zero, so the result is always a finite
/// value >= 0, never NaN.
///
/// # Example
///
/// ```
/// use cielab::{metric, Lab};
///
/// // Same lightness and chroma magnitude, opposite hue direction:
/// // the whole difference is hue.
/// let a = Lab::new(50.0, 30.0, 0.0);
/// let b = Lab::new(50.0, -30.0, 0.0);
/// assert!(metric::delta_h(a, b) > 0.0);
/// ```
pub fn delta_h(c1: Lab, c2: Lab) -> f64 {
    let de = delta_e(c1, c2);
    let dl = c1.l - c2.l;
    let dc = c1.chroma() - c2.chroma();
    let term = de * de - dl * dl - dc * dc;
    term.max(0.0).sqrt()
}
