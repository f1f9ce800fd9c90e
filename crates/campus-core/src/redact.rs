// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret redaction for provider error bodies and diagnostic output.

use std::sync::LazyLock;

use regex::Regex;

static REDACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // OpenAI-style project and user keys: sk-proj-..., sk-...
        Regex::new(r"sk-[a-zA-Z0-9_\-]{20,}").unwrap(),
        // Bearer tokens echoed back in headers or error bodies
        Regex::new(r"Bearer\s+[a-zA-Z0-9._\-]{10,}").unwrap(),
    ]
});

const REDACTED: &str = "[REDACTED]";

/// Redact known secret formats plus any exact `secrets` from `input`.
pub fn redact(input: &str, secrets: &[&str]) -> String {
    let mut result = input.to_string();

    for pattern in REDACTION_PATTERNS.iter() {
        result = pattern.replace_all(&result, REDACTED).to_string();
    }

    // Longest first so a secret that contains another is not half-masked.
    let mut sorted: Vec<&str> = secrets.iter().copied().filter(|s| !s.is_empty()).collect();
    sorted.sort_by_key(|s| std::cmp::Reverse(s.len()));
    for secret in sorted {
        result = result.replace(secret, REDACTED);
    }

    result
}

/// Mask a credential for display, keeping only its last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}
