use crate::percent;

/// One query binding: a key with one or more values in encounter order.
/// Keys and values are stored decoded; encoding happens only at render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParam {
    pub key: Vec<u8>,
    pub values: Vec<Vec<u8>>,
}

/// Parse raw query bytes into ordered bindings. `&` separates pairs, the
/// first `=` separates key from value (a pair without `=` gets an empty
/// value), and repeated keys accumulate at the position of their first
/// occurrence. Each key and value gets exactly one percent-decode round —
/// unlike the whole-URL decoder, this is never iterated.
pub fn parse(raw: &[u8]) -> Vec<QueryParam> {
    let mut params: Vec<QueryParam> = Vec::new();

    for pair in raw.split(|&b| b == b'&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.iter().position(|&b| b == b'=') {
            Some(idx) => (&pair[..idx], &pair[idx + 1..]),
            None => (pair, &pair[pair.len()..]),
        };
        let (key, _) = percent::decode_once(key);
        let (value, _) = percent::decode_once(value);

        match params.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.values.push(value),
            None => params.push(QueryParam {
                key,
                values: vec![value],
            }),
        }
    }

    params
}

/// Render bindings back to query-string form, percent-encoding every key
/// and value independently. A key bound to multiple values renders as
/// repeated `key=value` pairs; an empty value renders as the bare key.
/// With `sort_by_key`, bindings are reordered by ordinal key comparison.
pub fn render(params: &[QueryParam], sort_by_key: bool) -> String {
    let mut ordered: Vec<&QueryParam> = params.iter().collect();
    if sort_by_key {
        ordered.sort_by(|a, b| a.key.cmp(&b.key));
    }

    let mut parts: Vec<String> = Vec::new();
    for param in ordered {
        let key = percent::encode_component(&param.key);
        for value in &param.values {
            if value.is_empty() {
                if !key.is_empty() {
                    parts.push(key.clone());
                }
            } else {
                parts.push(format!("{key}={}", percent::encode_component(value)));
            }
        }
    }

    parts.join("&")
}
