use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A person on the roster. `data` is only populated once the detailed
/// record has been fetched; a candidate without it has no skills.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<CandidateRecord>,
}

/// Envelope around the proficiency document (`person.data.data`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandidateRecord {
    #[serde(default)]
    pub data: ProficiencyDocument,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProficiencyDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub skillset: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub skills: Vec<SkillEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skillset_group: Option<GroupingLabel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GroupingLabel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub grouping_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Positional: a malformed record stays in place as a zero score.
    #[serde(default, deserialize_with = "positional_seq")]
    pub pos: Vec<ScoreRecord>,
}

/// Consensus score for one position. Upstream does not validate the range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub consensus_score: f64,
}

impl Candidate {
    /// Skill groups in document order; empty when no detailed record is loaded.
    pub fn skill_groups(&self) -> &[SkillGroup] {
        self.data
            .as_ref()
            .map(|record| record.data.skillset.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_skillset(&self) -> bool {
        !self.skill_groups().is_empty()
    }

    pub fn skill_count(&self) -> usize {
        self.skill_groups().iter().map(|g| g.skills.len()).sum()
    }
}

impl SkillEntry {
    /// Only the first score record carries meaning.
    pub fn first_score(&self) -> Option<f64> {
        self.pos.first().map(|record| record.consensus_score)
    }
}

/// Accepts a JSON array, skipping elements that fail to parse. Any other
/// value (object, string, number) is treated as an empty sequence.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(sequence_items(deserializer)?
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Skipping malformed element: {e}");
                None
            }
        })
        .collect())
}

/// Like `lenient_seq`, but an element that fails to parse is replaced by
/// `T::default()` so later elements keep their index.
fn positional_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(sequence_items(deserializer)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<T>(item).unwrap_or_else(|e| {
                warn!("Malformed element at index {index}, using default: {e}");
                T::default()
            })
        })
        .collect())
}

fn sequence_items<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!(
                "Expected a sequence, found {}; treating as empty",
                json_kind(&other)
            );
            Vec::new()
        }
    })
}

/// Accepts an object of the expected shape; anything else becomes `None`.
fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match serde_json::from_value::<T>(v) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => {
                warn!("Discarding malformed proficiency document: {e}");
                Ok(None)
            }
        },
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
