use serde::{Deserialize, Serialize};

use crate::{assemble, clean, host, path, percent, split};

/// Knobs for one canonicalization call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Drop the bare `?` left behind by an empty query.
    pub remove_empty_query_delimiter: bool,
    /// Reorder query bindings by key (ordinal) before rendering.
    pub sort_query_params: bool,
}

/// Canonicalize one URL-like string into its stable byte-exact form.
///
/// The pipeline runs strictly forward: pre-clean, whole-URL fixed-point
/// percent-decode, tolerant split, host/path normalization, and a final
/// assembly that re-escapes unsafe bytes. Returns an empty string when the
/// input has no recognizable URL structure (fail closed). Never panics and
/// performs no I/O; calls are independent and freely concurrent.
pub fn canonicalize(raw: &str, options: &Options) -> String {
    let cleaned = clean::preclean(raw);
    let decoded = percent::decode_repeated(cleaned.as_bytes());

    let mut url = match split::split(&decoded) {
        Some(url) => url,
        None => return String::new(),
    };

    if let Some(h) = url.host.take() {
        let normalized = host::normalize(&h);
        if normalized.is_empty() {
            return String::new();
        }
        url.host = Some(normalized);
    }
    url.path = path::normalize(&url.path);

    assemble::assemble(&url, options)
}
