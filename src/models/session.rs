use serde::{Deserialize, Serialize};

use super::trial::TrialResult;

/// Subject metadata entered before a session. Free-form strings: the
/// intake form does not constrain them, and the export passes them
/// through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub id: String,
    pub age: String,
    pub gender: String,
}

/// A completed experiment session: subject metadata, the random seed
/// captured when the trial sequence was generated, and one result per
/// presented trial.
///
/// This is the JSON artifact the presentation collaborator writes and the
/// export command flattens into CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub subject: SubjectInfo,
    pub random_seed: u64,
    pub results: Vec<TrialResult>,
}
