//! Lenient JSON parsing.
//!
//! Language models frequently return near-miss JSON: wrapped in markdown
//! fences, prefixed with prose, using single quotes or unquoted keys, or
//! carrying trailing commas. `parse_lenient` first tries strict parsing and
//! then retries after a best-effort syntactic repair. Anything still
//! unparseable after repair stays an error; the repair never invents or
//! drops data.

use serde::de::DeserializeOwned;

/// Parse `text` as JSON, repairing common syntax problems on failure.
pub fn parse_lenient<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(text).or_else(|_| serde_json::from_str(&repair_json(text)))
}

/// Apply the best-effort syntactic repair without parsing.
pub fn repair_json(input: &str) -> String {
    let stripped = strip_code_fences(input.trim());
    let sliced = slice_to_outer_value(stripped);
    normalize_tokens(sliced)
}

/// Remove a surrounding markdown code fence, including an info string
/// such as ```json.
fn strip_code_fences(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Cut leading/trailing prose around the outermost JSON object or array.
fn slice_to_outer_value(s: &str) -> &str {
    let start = s.find(['{', '[']);
    let end = s.rfind(['}', ']']);
    match (start, end) {
        (Some(start), Some(end)) if end >= start => &s[start..=end],
        _ => s,
    }
}

/// Token-level normalization: single-quoted strings become double-quoted,
/// bare words become quoted strings (Python literals map to their JSON
/// counterparts), and trailing commas are dropped.
fn normalize_tokens(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                // Copy a well-formed string verbatim, honoring escapes.
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let d = chars[i];
                    out.push(d);
                    i += 1;
                    if d == '\\' {
                        if i < chars.len() {
                            out.push(chars[i]);
                            i += 1;
                        }
                    } else if d == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                // Re-quote a single-quoted string as a JSON string.
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let d = chars[i];
                    i += 1;
                    if d == '\'' {
                        break;
                    } else if d == '\\' && i < chars.len() && chars[i] == '\'' {
                        out.push('\'');
                        i += 1;
                    } else if d == '\\' && i < chars.len() {
                        out.push('\\');
                        out.push(chars[i]);
                        i += 1;
                    } else if d == '"' {
                        out.push('\\');
                        out.push('"');
                    } else {
                        out.push(d);
                    }
                }
                out.push('"');
            }
            ',' => {
                // Drop the comma if only whitespace separates it from a
                // closing bracket.
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if j < chars.len() && (chars[j] == '}' || chars[j] == ']') {
                    i += 1;
                } else {
                    out.push(',');
                    i += 1;
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut j = i;
                let mut word = String::new();
                while j < chars.len()
                    && (chars[j].is_ascii_alphanumeric() || chars[j] == '_' || chars[j] == '-')
                {
                    word.push(chars[j]);
                    j += 1;
                }
                match word.as_str() {
                    "true" | "false" | "null" => out.push_str(&word),
                    "True" => out.push_str("true"),
                    "False" => out.push_str("false"),
                    "None" => out.push_str("null"),
                    _ => {
                        out.push('"');
                        out.push_str(&word);
                        out.push('"');
                    }
                }
                i = j;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}
