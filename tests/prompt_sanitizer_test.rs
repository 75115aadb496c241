use docsift::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_prompt("  hello there  "), "hello there");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length_note() {
    let prompt = "a".repeat(250);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.contains("(250 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_value() {
    let sanitized = sanitize_prompt("use Bearer sk-12345 for auth");

    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(!sanitized.contains("sk-12345"));
}

#[test]
fn given_api_key_parameter_when_sanitizing_then_redacts_value() {
    let sanitized = sanitize_prompt("call it with api_key=abc123&x=1");

    assert!(sanitized.contains("api_key=[REDACTED]"));
    assert!(!sanitized.contains("abc123"));
}

#[test]
fn given_multiple_secrets_when_sanitizing_then_redacts_all_of_them() {
    let sanitized = sanitize_prompt("password=one and password=two");

    assert!(!sanitized.contains("one"));
    assert!(!sanitized.contains("two"));
    assert_eq!(sanitized.matches("[REDACTED]").count(), 2);
}
