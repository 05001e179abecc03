//! Session export: flatten recorded results into the tabular contract.
//!
//! The column set and order are the system's one durable external
//! artifact; downstream analysis tooling indexes by these names. Any
//! change here is a breaking change of the export contract.

use cielab::metric;

use crate::models::{ColorSample, SessionRecord, TrialResult};

/// Export column order. Keep in sync with [`result_row`].
const COLUMNS: [&str; 32] = [
    "subject_id",
    "subject_age",
    "subject_gender",
    "trial_id",
    "random_seed",
    "reaction_time",
    "perceived_same",
    "timed_out",
    "target_mode",
    "target_css",
    "target_h",
    "target_s",
    "target_l",
    "target_L",
    "target_a",
    "target_b",
    "bgA_css",
    "bgA_h",
    "bgA_s",
    "bgA_l",
    "bgA_L",
    "bgA_a",
    "bgA_b",
    "bgB_css",
    "bgB_h",
    "bgB_s",
    "bgB_l",
    "bgB_L",
    "bgB_a",
    "bgB_b",
    "delta_E_ab",
    "delta_H",
];

/// Flatten a session into delimited text.
///
/// One row per result. HSL and Lab fields are formatted to two decimals,
/// the Delta metrics (computed between background A and background B, the
/// context drivers of the contrast effect) to four. Fields containing a
/// comma, quote, or line break are quoted RFC-4180 style -- the CSS color
/// strings always are.
pub fn session_to_csv(session: &SessionRecord) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');

    for result in &session.results {
        let row = result_row(session, result);
        debug_assert_eq!(row.len(), COLUMNS.len());
        let encoded: Vec<String> = row.iter().map(|field| quote_field(field)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    out
}

fn result_row(session: &SessionRecord, result: &TrialResult) -> Vec<String> {
    let trial = &result.trial;
    let delta_e = metric::delta_e(trial.bg_a.lab(), trial.bg_b.lab());
    let delta_h = metric::delta_h(trial.bg_a.lab(), trial.bg_b.lab());

    let mut row = vec![
        session.subject.id.clone(),
        session.subject.age.clone(),
        session.subject.gender.clone(),
        trial.id.clone(),
        session.random_seed.to_string(),
        result.reaction_ms.to_string(),
        result.response.encoded().to_string(),
        if result.response.timed_out() { "1" } else { "0" }.to_string(),
        trial.target.mode.as_str().to_string(),
    ];
    push_color_fields(&mut row, &trial.target);
    push_color_fields(&mut row, &trial.bg_a);
    push_color_fields(&mut row, &trial.bg_b);
    row.push(format!("{delta_e:.4}"));
    row.push(format!("{delta_h:.4}"));
    row
}

/// One color block: css string, then the six numeric fields at export
/// precision.
fn push_color_fields(row: &mut Vec<String>, color: &ColorSample) {
    row.push(color.css.clone());
    for value in [
        color.h,
        color.s,
        color.l,
        color.lab_l,
        color.lab_a,
        color.lab_b,
    ] {
        row.push(format!("{value:.2}"));
    }
}

/// Quote a field if it contains a delimiter, quote, or line break.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
