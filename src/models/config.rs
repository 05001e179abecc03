use serde::{Deserialize, Serialize};

/// Color model the experiment runs in. Only HSL is supported; the variant
/// is kept explicit because it is part of the exported data contract
/// (the `target_mode` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    #[default]
    #[serde(rename = "HSL")]
    Hsl,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Hsl => "HSL",
        }
    }
}

/// How one channel (hue/saturation/lightness) of one entity varies across
/// trials.
///
/// Serialized externally tagged, so a YAML axis reads as one of:
///
/// ```yaml
/// h:
///   fixed: 60.0
/// h:
///   range: { start: 0.0, end: 360.0, steps: 4 }
/// s:
///   list: [20.0, 50.0, 60.0]
/// s:
///   mapping:
///     - { target: 20.0, value: 80.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSpec {
    /// Single value.
    Fixed(f64),
    /// Linear subdivision from `start` to `end` inclusive, `steps` values.
    /// `steps == 1` resolves to `[start]`; `steps == 0` is a configuration
    /// error at resolution time.
    Range { start: f64, end: f64, steps: u32 },
    /// Explicit values, in order. Duplicates allowed; an empty list is
    /// valid and yields zero trials downstream.
    List(Vec<f64>),
    /// Values keyed by another axis's resolved values, with identity
    /// fallback. Resolvable only against a caller-supplied key context.
    Mapping(ValueMap),
}

/// One entry of a [`ValueMap`]: when the keying axis resolves to `target`,
/// the mapped axis takes `value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    pub target: f64,
    pub value: f64,
}

/// Sparse value-to-value association with identity fallback.
///
/// Keys are matched by exact comparison against resolved axis values
/// (which are on a two-decimal grid). Entries are kept in authored order;
/// the last entry for a duplicate key wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    entries: Vec<MapEntry>,
}

impl ValueMap {
    pub fn new(entries: Vec<MapEntry>) -> Self {
        Self { entries }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|&(target, value)| MapEntry { target, value })
                .collect(),
        }
    }

    /// Look up the mapped value for `key`.
    ///
    /// A key with no entry resolves to the key itself. This identity
    /// fallback is intentional: a mapping that does not cover a target
    /// value degrades to "background equals target" for that channel
    /// rather than failing the run.
    pub fn resolve(&self, key: f64) -> f64 {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.target == key)
            .map_or(key, |entry| entry.value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three axis specs describing one visual entity's color rule.
///
/// The `singleton_map` representation keeps axis specs in the plain
/// one-key-map YAML form (`h: { fixed: 60.0 }`) instead of YAML tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub h: AxisSpec,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub s: AxisSpec,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub l: AxisSpec,
}

/// Global experiment configuration, loaded from YAML.
///
/// `target` varies independently; `background_a` is dependent on the
/// target (hue deltas plus value mappings keyed by the target's resolved
/// saturation/lightness); `background_b` is fully independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub mode: ColorMode,

    pub target: EntityConfig,
    pub background_a: EntityConfig,
    pub background_b: EntityConfig,

    /// Shuffle the generated sequence before presentation. Trial
    /// identifiers are assigned before shuffling.
    #[serde(default = "default_randomize")]
    pub randomize_order: bool,
}

fn default_randomize() -> bool {
    true
}

impl ExperimentConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl Default for ExperimentConfig {
    /// The canonical configuration: 4 target hues around the wheel, three
    /// saturation and two lightness levels, three context hue offsets with
    /// compensating saturation/lightness mappings, and a fixed neutral
    /// background B. Yields 72 trials.
    fn default() -> Self {
        Self {
            mode: ColorMode::Hsl,
            target: EntityConfig {
                h: AxisSpec::Range {
                    start: 0.0,
                    end: 360.0,
                    steps: 4,
                },
                s: AxisSpec::List(vec![20.0, 50.0, 60.0]),
                l: AxisSpec::List(vec![30.0, 50.0]),
            },
            background_a: EntityConfig {
                // Hue offsets relative to the target hue
                h: AxisSpec::List(vec![60.0, 120.0, 180.0]),
                s: AxisSpec::Mapping(ValueMap::from_pairs(&[
                    (20.0, 80.0),
                    (50.0, 50.0),
                    (60.0, 40.0),
                ])),
                l: AxisSpec::Mapping(ValueMap::from_pairs(&[(30.0, 70.0), (50.0, 50.0)])),
            },
            background_b: EntityConfig {
                h: AxisSpec::Fixed(60.0),
                s: AxisSpec::Fixed(30.0),
                l: AxisSpec::Fixed(80.0),
            },
            randomize_order: true,
        }
    }
}
