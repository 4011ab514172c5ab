use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Keys a model response must contain to count as an analysis.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "company_name",
    "problem",
    "solution",
    "market_size",
    "business_model",
    "team_info",
    "funding_ask",
    "revenue_projection",
];

const FENCE: &str = "```";

// The whole string must be one amount: an optional ISO currency code or
// symbol, digits, and an optional scale word. Ranges, prose and unknown
// scale words do not match.
static FUNDING_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?-i:[A-Z]{3})\s*)?[$€£]?\s*(?P<amount>[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?P<fraction>\.[0-9]+)?\s*(?P<scale>thousand|million|billion|mm|bn|k|m|b)?\s*$",
    )
    .unwrap()
});

/// Structured fields pulled out of a pitch deck.
///
/// Free-text fields keep whatever JSON the model produced for them (almost
/// always a string). `funding_ask` is a JSON number, or `None` when the deck
/// does not state one. A number from the model is kept exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub company_name: Value,
    pub problem: Value,
    pub solution: Value,
    pub market_size: Value,
    pub business_model: Value,
    pub team_info: Value,
    pub funding_ask: Option<Number>,
    pub revenue_projection: Value,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisSchemaError {
    #[error("model returned an empty response")]
    Empty,
    #[error("model response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("model response is not a JSON object")]
    NotAnObject,
    #[error("model response is missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),
    #[error("funding_ask is not a number: {0}")]
    InvalidFundingAsk(String),
}

impl Analysis {
    /// Validates raw model output. Markdown code fences around the JSON are
    /// tolerated; a missing key or unparseable body is an error, never a default.
    pub fn from_model_output(raw: &str) -> Result<Self, AnalysisSchemaError> {
        let body = strip_code_fence(raw);
        if body.is_empty() {
            return Err(AnalysisSchemaError::Empty);
        }

        let value: Value = serde_json::from_str(body)
            .map_err(|e| AnalysisSchemaError::InvalidJson(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(AnalysisSchemaError::NotAnObject);
        };

        Self::from_object(map)
    }

    fn from_object(mut map: Map<String, Value>) -> Result<Self, AnalysisSchemaError> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|key| !map.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AnalysisSchemaError::MissingKeys(missing));
        }

        let funding_ask = parse_funding_ask(&map["funding_ask"])?;
        let mut take = |key: &str| map.remove(key).unwrap_or(Value::Null);

        Ok(Self {
            company_name: take("company_name"),
            problem: take("problem"),
            solution: take("solution"),
            market_size: take("market_size"),
            business_model: take("business_model"),
            team_info: take("team_info"),
            funding_ask,
            revenue_projection: take("revenue_projection"),
        })
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(start) = trimmed.find(FENCE) else {
        return trimmed;
    };

    // Drop the opening fence and its language tag, e.g. ```json
    let body = trimmed[start + FENCE.len()..]
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = match body.rfind(FENCE) {
        Some(end) => &body[..end],
        None => body,
    };
    body.trim()
}

fn parse_funding_ask(value: &Value) -> Result<Option<Number>, AnalysisSchemaError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(Some(n.clone())),
        Value::String(s) => parse_funding_text(s),
        other => Err(AnalysisSchemaError::InvalidFundingAsk(other.to_string())),
    }
}

/// Reads a single amount such as "$2,000,000", "2M" or "USD 1.5 million".
/// Text without any digits ("N/A", "not mentioned") means no ask was stated.
/// Anything else with digits in it is rejected rather than guessed at.
fn parse_funding_text(text: &str) -> Result<Option<Number>, AnalysisSchemaError> {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return Ok(None);
    }

    let invalid = || AnalysisSchemaError::InvalidFundingAsk(text.to_string());
    let caps = FUNDING_AMOUNT.captures(text).ok_or_else(invalid)?;
    let digits = format!(
        "{}{}",
        caps["amount"].replace(',', ""),
        caps.name("fraction").map_or("", |m| m.as_str())
    );
    let amount: f64 = digits.parse().map_err(|_| invalid())?;

    let multiplier = match caps
        .name("scale")
        .map(|m| m.as_str().to_ascii_lowercase())
        .as_deref()
    {
        Some("k" | "thousand") => 1e3,
        Some("m" | "mm" | "million") => 1e6,
        Some("b" | "bn" | "billion") => 1e9,
        _ => 1.0,
    };

    // Scaled amounts are rounded to whole currency units.
    let value = if multiplier > 1.0 {
        (amount * multiplier).round()
    } else {
        amount
    };

    to_number(value).map(Some).ok_or_else(invalid)
}

// Whole amounts stay integers so "2M" serialises as 2000000, not 2000000.0.
fn to_number(amount: f64) -> Option<Number> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if amount.fract() == 0.0 && amount.abs() < MAX_EXACT {
        Some(Number::from(amount as i64))
    } else {
        Number::from_f64(amount)
    }
}
