use serde::{Deserialize, Serialize};

/// Whatever subset of the six result fields the model actually returned.
/// Unknown keys are ignored; a field of the wrong type fails the parse, which
/// pushes resolution down to the synthesis fallback.
#[derive(Debug, Default, Deserialize)]
pub struct PartialResult {
    pub status: Option<String>,
    pub requirements_met: Option<Vec<String>>,
    pub requirements_missed: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
    pub risk_level: Option<String>,
    pub explanation: Option<String>,
}

/// How the raw model output was turned into a result.
#[derive(Debug)]
pub enum Extraction {
    /// The text was valid JSON, either whole or between its outermost braces.
    Parsed(PartialResult),
    /// No usable JSON; the raw text is preserved as the explanation.
    Synthesized(PartialResult),
}

impl Extraction {
    pub fn label(&self) -> &'static str {
        match self {
            Extraction::Parsed(_) => "parsed",
            Extraction::Synthesized(_) => "synthesized",
        }
    }
}

/// The fully-populated record returned to the caller. Every field is
/// guaranteed present no matter what the model sent back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceResult {
    pub status: String,
    pub requirements_met: Vec<String>,
    pub requirements_missed: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_level: String,
    pub explanation: String,
}

/// Pulls a `PartialResult` out of raw model output.
///
/// Resolution order: strict parse of the whole text, then the inclusive
/// substring from the first `{` to the last `}`, then synthesis. Malformed
/// output is never an error here; the synthesized record carries the whole
/// reply verbatim in `explanation` so nothing the model said is lost.
pub fn extract(raw: &str) -> Extraction {
    if let Ok(parsed) = serde_json::from_str::<PartialResult>(raw) {
        return Extraction::Parsed(parsed);
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(parsed) = serde_json::from_str::<PartialResult>(&raw[start..=end]) {
                return Extraction::Parsed(parsed);
            }
        }
    }

    Extraction::Synthesized(PartialResult {
        status: Some("Analysis Complete".to_string()),
        requirements_met: Some(Vec::new()),
        requirements_missed: Some(Vec::new()),
        recommendations: Some(Vec::new()),
        risk_level: Some("Medium".to_string()),
        explanation: Some(raw.to_string()),
    })
}

/// Fills the documented default for each field that is still absent. Fields
/// the model did provide pass through untouched.
pub fn apply_defaults(partial: PartialResult) -> ComplianceResult {
    ComplianceResult {
        status: partial.status.unwrap_or_else(|| "Unknown".to_string()),
        requirements_met: partial.requirements_met.unwrap_or_default(),
        requirements_missed: partial.requirements_missed.unwrap_or_default(),
        recommendations: partial.recommendations.unwrap_or_default(),
        risk_level: partial.risk_level.unwrap_or_else(|| "Medium".to_string()),
        explanation: partial
            .explanation
            .unwrap_or_else(|| "No explanation provided".to_string()),
    }
}
