//! Parameter resolution: one axis spec to an ordered value sequence.

use crate::error::ConfigError;
use crate::models::AxisSpec;

/// Round onto the two-decimal grid used for generated identifiers and
/// exported data; keeps subdivided ranges free of floating-point tails
/// like `119.99999999999999`.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Expand an axis spec into its ordered value sequence.
///
/// - `Fixed` resolves to a single-element sequence.
/// - `Range` with one step resolves to `[start]`; with more, to `steps`
///   evenly spaced values from `start` to `end` inclusive, each rounded
///   to two decimals. Zero steps is a configuration error.
/// - `List` resolves to the values verbatim; an empty list is valid and
///   propagates to zero trials downstream.
/// - `Mapping` cannot be resolved in isolation -- its output depends on
///   another axis's resolved values -- so it is a configuration error
///   here. The generator resolves mappings through
///   [`ValueMap::resolve`](crate::models::ValueMap::resolve) instead.
pub fn resolve(spec: &AxisSpec) -> Result<Vec<f64>, ConfigError> {
    match spec {
        AxisSpec::Fixed(value) => Ok(vec![*value]),
        AxisSpec::Range { start, end, steps } => {
            if *steps == 0 {
                return Err(ConfigError::EmptyRange { steps: *steps });
            }
            if *steps == 1 {
                return Ok(vec![*start]);
            }
            let step = (end - start) / f64::from(steps - 1);
            Ok((0..*steps)
                .map(|i| round2(start + f64::from(i) * step))
                .collect())
        }
        AxisSpec::List(values) => Ok(values.clone()),
        AxisSpec::Mapping(_) => Err(ConfigError::MappingWithoutContext),
    }
}
