//! Color types and conversion chain
//!
//! This module provides type-safe color handling with one type per color
//! space, so the compiler distinguishes authored HSL values from encoded
//! sRGB and from linear light.
//!
//! # Color Spaces
//!
//! - **Hsl**: Hue/saturation/lightness as authored. Entry point of the chain.
//! - **Srgb**: The standard encoded color space. Use for display output.
//! - **LinearRgb**: Linear light intensity. Use for colorimetric math.
//! - **Lab**: CIE 1976 L\*a\*b\* under D65. Use for perceptual distances.
//!
//! # Example
//!
//! ```
//! use cielab::{Hsl, Lab, LinearRgb, Srgb};
//!
//! // A mid-lightness orange
//! let hsl = Hsl::new(30.0, 0.8, 0.5);
//!
//! // Walk the chain one stage at a time
//! let srgb = Srgb::from(hsl);
//! let lab = Lab::from(LinearRgb::from(srgb));
//!
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod hsl;
mod lab;
mod linear_rgb;
mod srgb;

pub use hsl::Hsl;
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
