const MAX_VISIBLE_LENGTH: usize = 160;

const SENSITIVE_MARKERS: [(&str, &str); 4] = [
    ("Bearer ", "Bearer [REDACTED]"),
    ("key=", "key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

/// Shortens model input or output for logging and masks credentials that
/// gateway error bodies sometimes echo back.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let sanitized = if total_chars > MAX_VISIBLE_LENGTH {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{visible}... ({total_chars} chars total)")
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in SENSITIVE_MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let idx = search_from + found;
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(idx..end, replacement);
            search_from = idx + replacement.len();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_marked() {
        assert_eq!(sanitize_prompt("  \n "), "[EMPTY]");
    }

    #[test]
    fn long_input_is_truncated_on_char_boundary() {
        let input = "é".repeat(MAX_VISIBLE_LENGTH + 10);
        let result = sanitize_prompt(&input);
        assert!(result.ends_with(&format!("({} chars total)", MAX_VISIBLE_LENGTH + 10)));
    }

    #[test]
    fn api_key_query_parameter_is_redacted() {
        let result = sanitize_prompt("GET /v1/models?key=AIzaSecret&alt=json");
        assert_eq!(result, "GET /v1/models?key=[REDACTED]&alt=json");
    }

    #[test]
    fn every_bearer_token_is_redacted() {
        let result = sanitize_prompt("Bearer abc then Bearer def");
        assert_eq!(result, "Bearer [REDACTED] then Bearer [REDACTED]");
    }
}
