//! Analysis entries attached by the enrichment phase

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What an analysis entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    Summary,
    Category,
    ActionItems,
    KeyTopics,
    KeyDecisions,
}

/// MIME type of an analysis body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AnalysisSchema {
    #[serde(rename = "text/plain")]
    TextPlain,
    #[serde(rename = "application/json")]
    ApplicationJson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisEntry {
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
    /// Index of the dialog this entry refers to; always 0
    pub dialog: u32,
    pub vendor: String,
    pub product: String,
    pub schema: AnalysisSchema,
    pub body: String,
    pub encoding: String,
}
