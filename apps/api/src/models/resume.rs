use serde::{Deserialize, Serialize};

/// Placeholder for scalar fields the model could not extract.
fn not_specified() -> String {
    "Not specified".to_string()
}

/// One professional experience entry, in extraction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default = "not_specified")]
    pub title: String,
    #[serde(default = "not_specified")]
    pub company: String,
    #[serde(default = "not_specified")]
    pub date: String,
    #[serde(default = "not_specified")]
    pub description: String,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default = "not_specified")]
    pub degree: String,
    #[serde(default = "not_specified")]
    pub institution: String,
    #[serde(default = "not_specified")]
    pub date: String,
}

/// The canonical shape requested from the extraction backend.
///
/// Every scalar defaults to the `"Not specified"` sentinel and every list to
/// empty, so partial model output never fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default = "not_specified")]
    pub name: String,
    #[serde(default = "not_specified")]
    pub email: String,
    #[serde(default = "not_specified")]
    pub phone: String,
    #[serde(default = "not_specified")]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A persisted analysis: the extracted resume plus archival metadata.
///
/// The resume fields are flattened so the stored document is a single flat
/// JSON object. Created once per successful extraction, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedResume {
    pub id: String,
    pub filename: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub resume: ResumeData,
}

/// Listing projection of an archived resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStub {
    pub id: String,
    pub filename: String,
    pub timestamp: String,
}
