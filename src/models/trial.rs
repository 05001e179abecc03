use chrono::{DateTime, Utc};
use cielab::{Hsl, Lab, LinearRgb, Srgb};
use serde::{Deserialize, Serialize};

use super::config::ColorMode;

/// A resolved, immutable stimulus color.
///
/// Holds the authored HSL values (hue normalized into `[0, 360)`,
/// saturation/lightness kept unclamped for audit), the derived CIE Lab
/// coordinates, and a renderable CSS string -- everything downstream
/// consumers need without re-deriving anything.
///
/// Created once per distinct `(h, s, l)` combination during generation and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    pub mode: ColorMode,
    /// Hue in degrees, normalized to [0, 360)
    pub h: f64,
    /// Saturation in percent, as authored (unclamped)
    pub s: f64,
    /// Lightness in percent, as authored (unclamped)
    pub l: f64,
    /// CIE Lab lightness
    #[serde(rename = "L")]
    pub lab_l: f64,
    /// CIE Lab green-red axis
    #[serde(rename = "a")]
    pub lab_a: f64,
    /// CIE Lab blue-yellow axis
    #[serde(rename = "b")]
    pub lab_b: f64,
    /// Renderable representation, e.g. `rgb(255, 128, 0)`
    pub css: String,
}

impl ColorSample {
    /// Resolve an (hue, saturation, lightness) triple into a full sample.
    ///
    /// Pure and deterministic: the same input always yields the same
    /// output. The hue is wrapped into `[0, 360)`; saturation and
    /// lightness are stored as given and converted to fractions only for
    /// the colorimetric chain. Any finite input is valid.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let hue = Hsl::wrap_hue(h);
        let srgb = Srgb::from(Hsl::new(hue, s / 100.0, l / 100.0));
        let lab = Lab::from(LinearRgb::from(srgb));
        let [r, g, b] = srgb.to_bytes();

        Self {
            mode: ColorMode::Hsl,
            h: hue,
            s,
            l,
            lab_l: lab.l,
            lab_a: lab.a,
            lab_b: lab.b,
            css: format!("rgb({r}, {g}, {b})"),
        }
    }

    /// The sample's Lab coordinates, for metric computation.
    pub fn lab(&self) -> Lab {
        Lab::new(self.lab_l, self.lab_a, self.lab_b)
    }
}

/// Human-readable provenance per role, for audit and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialParams {
    pub target: String,
    pub bg_a: String,
    pub bg_b: String,
}

/// One stimulus unit: the target disk shown on two background contexts.
///
/// Identifiers are assigned in emission order (`trial-1`, `trial-2`, ...)
/// before any shuffling, so they do not reflect presentation order in a
/// randomized session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub id: String,
    pub target: ColorSample,
    pub bg_a: ColorSample,
    pub bg_b: ColorSample,
    pub params: TrialParams,
}

/// Subject's judgement for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Same,
    Different,
    TimedOut,
}

impl Response {
    /// Export encoding: same=1, different=0, timeout sentinel.
    pub fn encoded(self) -> &'static str {
        match self {
            Response::Same => "1",
            Response::Different => "0",
            Response::TimedOut => "TIMEOUT",
        }
    }

    pub fn timed_out(self) -> bool {
        matches!(self, Response::TimedOut)
    }
}

/// A trial paired with the recorded response, produced by the presentation
/// collaborator and consumed at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub trial: Trial,
    pub response: Response,
    /// Response latency in milliseconds (the full response window for
    /// timed-out trials)
    pub reaction_ms: u64,
    pub timestamp: DateTime<Utc>,
}
