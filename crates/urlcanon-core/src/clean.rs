use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a leading `<letters>://` scheme prefix.
static SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+://").expect("scheme regex must compile"));

/// Pre-clean a raw URL string: trim surrounding whitespace, delete embedded
/// tab/CR/LF bytes anywhere (stripped, not escaped), and prefix `http://`
/// when no scheme is present. Runs before any decoding.
pub fn preclean(raw: &str) -> String {
    let trimmed = raw.trim();

    let mut cleaned = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        if matches!(ch, '\t' | '\r' | '\n') {
            continue;
        }
        cleaned.push(ch);
    }

    if SCHEME_RE.is_match(&cleaned) {
        cleaned
    } else {
        format!("http://{cleaned}")
    }
}
