//! Wire types exchanged with the analysis collaborator.
//!
//! The editor never runs analysis itself. It hands the buffer plus a target
//! to the collaborator as JSON and reads back a summary.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Hardware model the collaborator analyses for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Target {
    #[default]
    #[serde(rename = "cortex-a76")]
    CortexA,
    #[serde(rename = "ethos-npu")]
    Npu,
}

impl Target {
    /// Every target, in model-selector order.
    pub const ALL: [Target; 2] = [Target::CortexA, Target::Npu];

    /// Map a model-selector value to a target.
    ///
    /// `npu` selects the NPU; anything else, `cortexa` included, falls back to
    /// the Cortex-A pipeline.
    pub fn from_selector(value: &str) -> Self {
        match value {
            "npu" => Target::Npu,
            "cortexa" => Target::CortexA,
            other => {
                tracing::debug!(selector = other, "unknown target, using cortex-a76");
                Target::CortexA
            },
        }
    }

    /// Value of the model-selector option.
    pub fn selector(&self) -> &'static str {
        match self {
            Target::CortexA => "cortexa",
            Target::Npu => "npu",
        }
    }

    /// Name sent to the collaborator.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Target::CortexA => "cortex-a76",
            Target::Npu => "ethos-npu",
        }
    }

    /// Label shown in the model selector.
    pub fn label(&self) -> &'static str {
        match self {
            Target::CortexA => "Cortex-A Family pipeline",
            Target::Npu => "Ethos NPU",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Target {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Target::from_selector(s))
    }
}

/// Body of an analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub code: String,
    pub target: Target,
}

impl AnalyzeRequest {
    pub fn new(code: impl Into<String>, target: Target) -> Self {
        Self {
            code: code.into(),
            target,
        }
    }
}

/// Body of a summary request: a previous analysis result plus the code it
/// was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(rename = "analysisData")]
    pub analysis_data: serde_json::Value,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
