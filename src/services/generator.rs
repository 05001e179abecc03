//! Trial generation: nested Cartesian enumeration of the stimulus set.
//!
//! The axis order is fixed, outer to inner: target hue, target saturation,
//! target lightness, background-A hue delta, then background B's hue,
//! saturation, and lightness. Background A does not contribute loop
//! dimensions for saturation/lightness -- those are functions of the
//! current target values through the configured mappings.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::axis;
use crate::error::ConfigError;
use crate::models::{
    AxisSpec, ColorSample, ExperimentConfig, Trial, TrialParams, ValueMap,
};

/// Resolved length of every axis, in loop order.
///
/// The total is the exact Cartesian product, so it matches the length of
/// the sequence [`generate`] would emit -- including zero when any axis
/// is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCounts {
    pub target_h: usize,
    pub target_s: usize,
    pub target_l: usize,
    pub bg_a_delta_h: usize,
    pub bg_b_h: usize,
    pub bg_b_s: usize,
    pub bg_b_l: usize,
}

impl AxisCounts {
    pub fn total(&self) -> usize {
        self.target_h
            * self.target_s
            * self.target_l
            * self.bg_a_delta_h
            * self.bg_b_h
            * self.bg_b_s
            * self.bg_b_l
    }
}

/// Resolve every axis and return the per-axis lengths without
/// materializing any trials. Fails with the same errors as [`generate`].
pub fn count_trials(config: &ExperimentConfig) -> Result<AxisCounts, ConfigError> {
    Ok(AxisCounts {
        target_h: axis::resolve(&config.target.h)?.len(),
        target_s: axis::resolve(&config.target.s)?.len(),
        target_l: axis::resolve(&config.target.l)?.len(),
        bg_a_delta_h: axis::resolve(&config.background_a.h)?.len(),
        bg_b_h: axis::resolve(&config.background_b.h)?.len(),
        bg_b_s: axis::resolve(&config.background_b.s)?.len(),
        bg_b_l: axis::resolve(&config.background_b.l)?.len(),
    })
}

/// Generate the full trial sequence, shuffling with the thread RNG when
/// the configuration asks for randomized order.
pub fn generate(config: &ExperimentConfig) -> Result<Vec<Trial>, ConfigError> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generate with a seeded RNG, for reproducible randomized sequences.
pub fn generate_seeded(config: &ExperimentConfig, seed: u64) -> Result<Vec<Trial>, ConfigError> {
    generate_with_rng(config, &mut StdRng::seed_from_u64(seed))
}

/// Generate the full trial sequence using the given random source.
///
/// Deterministic for a fixed source (and fully deterministic when
/// `randomize_order` is off -- the source is never consulted). Either
/// every axis resolves and the whole sequence is emitted, or the first
/// resolution error is returned before any trial exists.
pub fn generate_with_rng<R: Rng>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<Trial>, ConfigError> {
    let target_hs = axis::resolve(&config.target.h)?;
    let target_ss = axis::resolve(&config.target.s)?;
    let target_ls = axis::resolve(&config.target.l)?;

    // Background A depends on the target: its hue axis is a list of
    // deltas, its saturation/lightness are mappings keyed by the target's
    // resolved values.
    let bg_a_deltas = axis::resolve(&config.background_a.h)?;
    let s_map = mapping_of(&config.background_a.s);
    let l_map = mapping_of(&config.background_a.l);

    // Background B is fully independent.
    let bg_b_hs = axis::resolve(&config.background_b.h)?;
    let bg_b_ss = axis::resolve(&config.background_b.s)?;
    let bg_b_ls = axis::resolve(&config.background_b.l)?;

    let mut trials = Vec::new();
    let mut id = 0usize;

    for &t_h in &target_hs {
        for &t_s in &target_ss {
            for &t_l in &target_ls {
                let target = ColorSample::from_hsl(t_h, t_s, t_l);
                let target_params = format!("H:{t_h:.0}, S:{t_s}, L:{t_l}");

                for &delta_h in &bg_a_deltas {
                    // No wrap here; the color resolver wraps the hue
                    let a_h = t_h + delta_h;
                    let a_s = s_map.resolve(t_s);
                    let a_l = l_map.resolve(t_l);

                    let bg_a = ColorSample::from_hsl(a_h, a_s, a_l);
                    let bg_a_params = format!("H:{a_h:.0} (Δ{delta_h}), S:{a_s}, L:{a_l}");

                    for &b_h in &bg_b_hs {
                        for &b_s in &bg_b_ss {
                            for &b_l in &bg_b_ls {
                                let bg_b = ColorSample::from_hsl(b_h, b_s, b_l);
                                let bg_b_params = format!("H:{b_h:.0}, S:{b_s}, L:{b_l}");

                                id += 1;
                                trials.push(Trial {
                                    id: format!("trial-{id}"),
                                    target: target.clone(),
                                    bg_a: bg_a.clone(),
                                    bg_b,
                                    params: TrialParams {
                                        target: target_params.clone(),
                                        bg_a: bg_a_params.clone(),
                                        bg_b: bg_b_params,
                                    },
                                });
                            }
                        }
                    }
                }
            }
        }
    }

    if config.randomize_order {
        trials.shuffle(rng);
    }

    tracing::debug!(
        trials = trials.len(),
        randomized = config.randomize_order,
        "generated trial sequence"
    );

    Ok(trials)
}

/// The mapping view of a background-A saturation/lightness axis. An axis
/// configured with any non-mapping mode contributes no entries and
/// therefore resolves every target value to itself.
fn mapping_of(spec: &AxisSpec) -> ValueMap {
    match spec {
        AxisSpec::Mapping(map) => map.clone(),
        _ => ValueMap::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityConfig;
    use pretty_assertions::assert_eq;

    fn unshuffled(mut config: ExperimentConfig) -> ExperimentConfig {
        config.randomize_order = false;
        config
    }

    #[test]
    fn test_count_matches_default_config() {
        let counts = count_trials(&ExperimentConfig::default()).unwrap();
        assert_eq!(
            counts,
            AxisCounts {
                target_h: 4,
                target_s: 3,
                target_l: 2,
                bg_a_delta_h: 3,
                bg_b_h: 1,
                bg_b_s: 1,
                bg_b_l: 1,
            }
        );
        assert_eq!(counts.total(), 72);
    }

    #[test]
    fn test_count_propagates_resolution_errors() {
        let mut config = ExperimentConfig::default();
        config.background_b.s = AxisSpec::Range {
            start: 0.0,
            end: 100.0,
            steps: 0,
        };
        assert_eq!(
            count_trials(&config),
            Err(ConfigError::EmptyRange { steps: 0 })
        );
    }

    #[test]
    fn test_unshuffled_nesting_order() {
        let trials = generate(&unshuffled(ExperimentConfig::default())).unwrap();
        assert_eq!(trials.len(), 72);

        // Emission ids are sequential
        assert_eq!(trials[0].id, "trial-1");
        assert_eq!(trials[71].id, "trial-72");

        // Innermost varying axis of the default config is the bgA delta:
        // first three trials share the target, walk the deltas 60/120/180
        assert_eq!(trials[0].params.target, "H:0, S:20, L:30");
        assert_eq!(trials[0].params.bg_a, "H:60 (Δ60), S:80, L:70");
        assert_eq!(trials[1].params.bg_a, "H:120 (Δ120), S:80, L:70");
        assert_eq!(trials[2].params.bg_a, "H:180 (Δ180), S:80, L:70");

        // Fourth trial advances target L (the next loop out)
        assert_eq!(trials[3].params.target, "H:0, S:20, L:50");

        // Background B is fixed throughout
        assert_eq!(trials[0].params.bg_b, "H:60, S:30, L:80");
        assert_eq!(trials[71].params.bg_b, "H:60, S:30, L:80");
    }

    #[test]
    fn test_mapping_applies_to_background_a() {
        let trials = generate(&unshuffled(ExperimentConfig::default())).unwrap();

        // Target S 20 maps to bgA S 80, target L 30 maps to bgA L 70
        let first = &trials[0];
        assert_eq!(first.target.s, 20.0);
        assert_eq!(first.bg_a.s, 80.0);
        assert_eq!(first.target.l, 30.0);
        assert_eq!(first.bg_a.l, 70.0);
    }

    #[test]
    fn test_delta_wraps_through_color_resolver() {
        let mut config = unshuffled(ExperimentConfig::default());
        config.target.h = AxisSpec::Fixed(300.0);
        config.target.s = AxisSpec::List(vec![50.0]);
        config.target.l = AxisSpec::List(vec![50.0]);
        config.background_a.h = AxisSpec::List(vec![120.0]);

        let trials = generate(&config).unwrap();
        // 300 + 120 = 420, wrapped to 60 in the resolved sample
        assert_eq!(trials[0].bg_a.h, 60.0);
        // The provenance keeps the raw sum, with the delta spelled out
        assert_eq!(trials[0].params.bg_a, "H:420 (Δ120), S:50, L:50");
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let config = ExperimentConfig::default();
        let first = generate_seeded(&config, 7).unwrap();
        let second = generate_seeded(&config, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_mapping_background_a_axis_is_identity() {
        let mut config = unshuffled(ExperimentConfig::default());
        config.background_a.s = AxisSpec::Fixed(99.0);

        let trials = generate(&config).unwrap();
        // A non-mapping spec contributes no entries: bgA S equals target S
        assert_eq!(trials[0].bg_a.s, trials[0].target.s);
    }

    #[test]
    fn test_target_axes_are_mode_generic() {
        // Nothing hardcodes which axis uses which mode: a list-mode hue
        // and range-mode saturation generate the same way.
        let config = unshuffled(ExperimentConfig {
            target: EntityConfig {
                h: AxisSpec::List(vec![10.0, 20.0]),
                s: AxisSpec::Range {
                    start: 0.0,
                    end: 100.0,
                    steps: 3,
                },
                l: AxisSpec::Fixed(50.0),
            },
            ..ExperimentConfig::default()
        });

        let counts = count_trials(&config).unwrap();
        assert_eq!(counts.target_h, 2);
        assert_eq!(counts.target_s, 3);
        assert_eq!(counts.target_l, 1);

        let trials = generate(&config).unwrap();
        assert_eq!(trials.len(), counts.total());
    }
}
