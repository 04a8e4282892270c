//! Translation compliance suite.
//!
//! A suite is a JSON file of sample inputs with kanji compounds each
//! output must contain:
//!
//! ```json
//! {
//!   "metadata": { "version": "1.0" },
//!   "test_cases": [
//!     { "description": "greeting", "input": "こんにちは", "expected_patterns": ["挨拶"] }
//!   ]
//! }
//! ```

use super::sanitizer::is_forbidden;
use super::translator::Translator;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("failed to read suite from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse suite from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuiteMetadata {
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceCase {
    pub description: String,
    pub input: String,
    #[serde(default)]
    pub expected_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceSuite {
    #[serde(default)]
    pub metadata: SuiteMetadata,
    pub test_cases: Vec<ComplianceCase>,
}

impl ComplianceSuite {
    pub fn load(path: &Path) -> Result<Self, SuiteError> {
        let content = fs::read_to_string(path).map_err(|source| SuiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SuiteError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What a single output got wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceReport {
    /// Distinct syllabary characters, in order of first appearance
    pub forbidden: Vec<char>,
    pub missing_patterns: Vec<String>,
}

impl ComplianceReport {
    pub fn evaluate(output: &str, expected_patterns: &[String]) -> Self {
        let mut forbidden = Vec::new();
        for c in output.chars().filter(|&c| is_forbidden(c)) {
            if !forbidden.contains(&c) {
                forbidden.push(c);
            }
        }

        let missing_patterns = expected_patterns
            .iter()
            .filter(|pattern| !output.contains(pattern.as_str()))
            .cloned()
            .collect();

        Self {
            forbidden,
            missing_patterns,
        }
    }

    pub fn passed(&self) -> bool {
        self.forbidden.is_empty() && self.missing_patterns.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseVerdict {
    Passed { output: String },
    Failed { output: String, report: ComplianceReport },
    Errored { error: String },
}

#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub description: String,
    pub input: String,
    pub verdict: CaseVerdict,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.verdict, CaseVerdict::Passed { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuiteSummary {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteSummary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs every case in order. Raw model output is checked, not the
/// sanitized form, so the suite measures how well the prompt is obeyed.
pub async fn run_suite<T>(translator: &T, suite: &ComplianceSuite) -> SuiteSummary
where
    T: Translator + ?Sized,
{
    info!(
        cases = suite.test_cases.len(),
        version = suite.metadata.version.as_deref(),
        "Running compliance suite"
    );

    let mut outcomes = Vec::with_capacity(suite.test_cases.len());
    for case in &suite.test_cases {
        let verdict = match translator.translate(&case.input).await {
            Ok(output) => {
                let report = ComplianceReport::evaluate(&output, &case.expected_patterns);
                if report.passed() {
                    CaseVerdict::Passed { output }
                } else {
                    warn!(case = case.description.as_str(), ?report, "Compliance case failed");
                    CaseVerdict::Failed { output, report }
                }
            }
            Err(error) => {
                warn!(case = case.description.as_str(), %error, "Compliance case errored");
                CaseVerdict::Errored {
                    error: error.to_string(),
                }
            }
        };
        outcomes.push(CaseOutcome {
            description: case.description.clone(),
            input: case.input.clone(),
            verdict,
        });
    }

    SuiteSummary { outcomes }
}
