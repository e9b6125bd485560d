//! Generative findings client: retrieval-grounded prompting and response
//! validation for per-clause analysis

use crate::extract::extract_json;
use crate::generative::{GeminiClient, GenerativeConfig, TextCompletion};
use serde_json::Value;
use shared_types::{Issue, Severity};
use std::sync::Arc;
use thiserror::Error;

/// Why a generative pass produced no findings. None of these fail the
/// caller; they select heuristics-only output for the clause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("no generative-service credential configured")]
    MissingCredential,
    #[error("generative call failed: {0}")]
    Transport(String),
    #[error("generative response contained no usable JSON")]
    Unparseable,
}

/// Outcome of one generative analysis pass over a clause.
#[derive(Debug, Clone)]
pub enum ModelFindings {
    Found(Vec<Issue>),
    Skipped(SkipReason),
}

const SYSTEM_INSTRUCTION: &str = "You are an ADGM legal compliance assistant. You will analyze a \
single clause and return ONLY valid JSON.\n\
The JSON must be an array of objects. Each object MUST have the keys:\n\
paragraph_index, issue, severity (Low/Medium/High), suggestion, citation.\n\
OPTIONAL keys: alt_clause (a recommended alternative clause wording), clause_type (e.g., \
Governing Law, Execution, UBO, Signature), confidence (0-1 float).\n\
Do NOT include any extra commentary outside the JSON array.";

/// Client for the per-clause generative findings pass.
///
/// Built once from an injected [`GenerativeConfig`]; when no credential is
/// configured every call short-circuits to
/// [`SkipReason::MissingCredential`] without touching the network.
pub struct FindingsClient {
    completion: Option<Arc<dyn TextCompletion>>,
    temperature: f32,
    max_output_tokens: u32,
}

impl FindingsClient {
    /// Fails only when an outbound HTTP client cannot be constructed; a
    /// missing credential still yields a (degraded) client.
    pub fn from_config(config: &GenerativeConfig) -> anyhow::Result<Self> {
        let completion = GeminiClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn TextCompletion>);
        Ok(Self {
            completion,
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Degraded-mode client that never calls the generative service.
    pub fn disabled() -> Self {
        Self {
            completion: None,
            temperature: 0.0,
            max_output_tokens: 0,
        }
    }

    /// Client over an arbitrary completion implementation (tests inject
    /// scripted fakes here).
    pub fn with_completion(completion: Arc<dyn TextCompletion>, config: &GenerativeConfig) -> Self {
        Self {
            completion: Some(completion),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// Analyze one clause against the retrieved reference context.
    ///
    /// Single attempt, no retry: transport, auth, timeout and parse
    /// failures all come back as [`ModelFindings::Skipped`].
    pub async fn analyze_clause(
        &self,
        clause_text: &str,
        paragraph_index: usize,
        context: &str,
    ) -> ModelFindings {
        let completion = match &self.completion {
            Some(completion) => completion,
            None => return ModelFindings::Skipped(SkipReason::MissingCredential),
        };

        let user = build_user_prompt(clause_text, context);
        let raw = match completion
            .generate(SYSTEM_INSTRUCTION, &user, self.temperature, self.max_output_tokens)
            .await
        {
            Ok(raw) => raw,
            Err(err) => return ModelFindings::Skipped(SkipReason::Transport(err.to_string())),
        };

        let parsed = match extract_json(&raw) {
            Some(parsed) => parsed,
            None => return ModelFindings::Skipped(SkipReason::Unparseable),
        };

        ModelFindings::Found(validate_findings(parsed, paragraph_index))
    }
}

fn build_user_prompt(clause_text: &str, context: &str) -> String {
    format!(
        "Context (ADGM reference materials):\n{context}\n\n\
         Clause (to analyze):\n{clause_text}\n\n\
         Tasks:\n\
         1. Detect red flags: incorrect jurisdiction, missing or invalid clauses, ambiguous \
         wording, missing signatory, formatting issues, non-compliance with ADGM templates.\n\
         2. For each issue provide a suggestion and, where possible, an alternative clause \
         wording (alt_clause) that would be compliant.\n\
         3. Provide a citation pointing to the ADGM law, regulation or template if possible \
         (give section/article if available).\n\
         4. Output ONLY valid JSON as described. If there are no issues, output an empty \
         array: []\n"
    )
}

/// Keep only well-formed finding objects; fill `paragraph_index` when the
/// model omitted it. Malformed elements are dropped silently.
fn validate_findings(parsed: Value, paragraph_index: usize) -> Vec<Issue> {
    let items = match parsed {
        Value::Array(items) => items,
        // A single object is accepted as a one-element array
        obj @ Value::Object(_) => vec![obj],
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| issue_from_value(item, paragraph_index))
        .collect()
}

fn issue_from_value(value: Value, default_paragraph_index: usize) -> Option<Issue> {
    let obj = value.as_object()?;

    let issue = non_empty_str(obj.get("issue"))?;
    let severity = Severity::parse_lenient(obj.get("severity")?.as_str()?);
    let suggestion = obj.get("suggestion")?.as_str()?.to_string();

    let paragraph_index = obj
        .get("paragraph_index")
        .and_then(Value::as_u64)
        .map(|i| i as usize)
        .unwrap_or(default_paragraph_index);

    let confidence = obj
        .get("confidence")
        .and_then(Value::as_f64)
        .map(|c| c.clamp(0.0, 1.0) as f32);

    Some(Issue {
        paragraph_index,
        issue,
        severity,
        suggestion,
        citation: obj
            .get("citation")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        alt_clause: obj.get("alt_clause").and_then(Value::as_str).map(str::to_string),
        clause_type: obj.get("clause_type").and_then(Value::as_str).map(str::to_string),
        confidence,
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?;
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
