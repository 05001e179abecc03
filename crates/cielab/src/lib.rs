//! cielab: HSL to CIE Lab conversion and CIE76 color difference metrics
//!
//! This library converts HSL colors to the CIE 1976 L\*a\*b\* color space and
//! computes the two perceptual difference measures built on it: Delta E
//! (CIE76) and the metric hue difference Delta H.
//!
//! # Quick Start
//!
//! ```
//! use cielab::{Hsl, Lab, LinearRgb, Srgb, metric};
//!
//! // A saturated red and a desaturated red on the same hue
//! let red = Lab::from(LinearRgb::from(Srgb::from(Hsl::new(0.0, 1.0, 0.5))));
//! let pale = Lab::from(LinearRgb::from(Srgb::from(Hsl::new(0.0, 0.4, 0.5))));
//!
//! let difference = metric::delta_e(red, pale);
//! assert!(difference > 0.0);
//! ```
//!
//! # Color Spaces
//!
//! The conversion chain is expressed as one typed `From` step per stage, so
//! the compiler enforces that no stage is skipped:
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | [`Hsl`] | Hue/saturation/lightness as authored | Stimulus specification |
//! | [`Srgb`] | Standard encoding (IEC 61966-2-1) | Display strings, byte output |
//! | [`LinearRgb`] | Proportional to light intensity | Colorimetric math |
//! | [`Lab`] | Perceptually uniform distances | Difference metrics |
//!
//! ```text
//! Hsl --> Srgb --> LinearRgb --> (CIE XYZ) --> Lab
//! ```
//!
//! The XYZ step is internal to the [`Lab`] conversion; it uses the sRGB
//! primaries and the D65 reference white (2 degree observer). Same input
//! always yields the same output -- every stage is a pure function.
//!
//! # Difference Metrics
//!
//! [`metric::delta_e`] is the CIE76 formula: plain Euclidean distance in
//! Lab. [`metric::delta_h`] isolates the hue component of that distance by
//! removing the lightness and chroma contributions. Its radicand can go
//! slightly negative under floating-point cancellation for near-identical
//! colors; the implementation clamps it to zero instead of returning NaN.

pub mod color;
pub mod metric;


pub use color::{Hsl, Lab, LinearRgb, Srgb};
