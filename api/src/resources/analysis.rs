use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashSet},
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Id(pub String);

impl FromStr for Id {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        Ok(Self(string.to_owned()))
    }
}

impl Display for Id {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Pipeline {
    pub code: String,
}

/// An analysis (job) submitted against a project.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub id: Id,
    pub user_reference: String,
    // Kept as sent so it prints exactly as the server formats it.
    pub time_created: String,
    pub status: String,
    pub pipeline: Pipeline,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
}

impl Analysis {
    /// Whether any tag, in any category, is one of `tags`.
    pub fn has_any_tag(&self, tags: &HashSet<String>) -> bool {
        self.tags
            .values()
            .flatten()
            .any(|value| tags.contains(value))
    }
}

/// Canonical job states. Each one groups the raw statuses reported by the
/// API for successive stages of the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Aborted,
    Running,
    Failed,
    Requested,
    Succeeded,
}

impl JobStatus {
    pub fn raw_statuses(self) -> &'static [&'static str] {
        match self {
            JobStatus::Aborted => &["aborted", "aborting"],
            JobStatus::Running => &["in_progress", "initializing", "preparing_inputs", "queued"],
            JobStatus::Failed => &["failed"],
            JobStatus::Requested => &["requested"],
            JobStatus::Succeeded => &["succeeded"],
        }
    }

    pub fn matches(self, raw_status: &str) -> bool {
        let raw_status = raw_status.to_lowercase();
        self.raw_statuses().contains(&raw_status.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        match string {
            "aborted" => Ok(JobStatus::Aborted),
            "running" => Ok(JobStatus::Running),
            "failed" => Ok(JobStatus::Failed),
            "requested" => Ok(JobStatus::Requested),
            "succeeded" => Ok(JobStatus::Succeeded),
            _ => Err(Error::UnknownJobStatus {
                status: string.to_owned(),
            }),
        }
    }
}

impl Display for JobStatus {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        let name = match self {
            JobStatus::Aborted => "aborted",
            JobStatus::Running => "running",
            JobStatus::Failed => "failed",
            JobStatus::Requested => "requested",
            JobStatus::Succeeded => "succeeded",
        };
        write!(formatter, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn analysis_with_tags(tags: serde_json::Value) -> Analysis {
        serde_json::from_value(json!({
            "id": "a1",
            "userReference": "sample-1",
            "timeCreated": "2023-04-01T10:00:00Z",
            "status": "SUCCEEDED",
            "pipeline": { "code": "dragen-germline" },
            "tags": tags,
        }))
        .unwrap()
    }

    #[test]
    fn test_running_includes_in_progress() {
        assert!(JobStatus::Running.matches("in_progress"));
        assert!(JobStatus::Running.matches("IN_PROGRESS"));
        assert!(JobStatus::Running.matches("Queued"));
        assert!(!JobStatus::Running.matches("succeeded"));
    }

    #[test]
    fn test_aborted_includes_aborting() {
        assert!(JobStatus::Aborted.matches("aborting"));
        assert!(JobStatus::Aborted.matches("ABORTED"));
        assert!(!JobStatus::Aborted.matches("failed"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(matches!(
            "finished".parse::<JobStatus>(),
            Err(Error::UnknownJobStatus { status }) if status == "finished"
        ));
        assert_eq!("failed".parse::<JobStatus>().unwrap(), JobStatus::Failed);
    }

    #[test]
    fn test_status_display_parses_back() {
        for status in [
            JobStatus::Aborted,
            JobStatus::Running,
            JobStatus::Failed,
            JobStatus::Requested,
            JobStatus::Succeeded,
        ] {
            assert_eq!(status.to_string().parse::<JobStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_has_any_tag_looks_across_categories() {
        let analysis = analysis_with_tags(json!({
            "technicalTags": ["wgs"],
            "userTags": ["batch-7", "rerun"],
            "referenceTags": [],
        }));
        let wanted: HashSet<String> = ["rerun".to_owned()].into_iter().collect();
        assert!(analysis.has_any_tag(&wanted));

        let unrelated: HashSet<String> = ["exome".to_owned()].into_iter().collect();
        assert!(!analysis.has_any_tag(&unrelated));
    }

    #[test]
    fn test_missing_tags_match_nothing() {
        let analysis: Analysis = serde_json::from_value(json!({
            "id": "a1",
            "userReference": "sample-1",
            "timeCreated": "2023-04-01T10:00:00Z",
            "status": "FAILED",
            "pipeline": { "code": "dragen-germline" },
        }))
        .unwrap();
        let wanted: HashSet<String> = ["wgs".to_owned()].into_iter().collect();
        assert!(!analysis.has_any_tag(&wanted));
    }
}
