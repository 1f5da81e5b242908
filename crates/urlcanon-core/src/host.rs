use std::net::{Ipv4Addr, Ipv6Addr};

/// Normalize a host: ASCII case-fold, trim stray dots, collapse dot runs,
/// then canonicalize IP literals across decimal/hex/octal/mixed notations.
/// Non-ASCII bytes pass through untouched; the final escape pass
/// percent-encodes them.
pub fn normalize(host: &[u8]) -> Vec<u8> {
    let folded = host.to_ascii_lowercase();
    let trimmed = collapse_dots(&folded);

    if let Some(ip) = canonical_ip(&trimmed) {
        return ip.into_bytes();
    }
    trimmed
}

/// Collapse runs of `.` to a single `.` and strip a leading/trailing dot.
fn collapse_dots(host: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::with_capacity(host.len());
    for &b in host {
        if b == b'.' && out.last() == Some(&b'.') {
            continue;
        }
        out.push(b);
    }
    let start = usize::from(out.first() == Some(&b'.'));
    let end = if out.len() > start && out.last() == Some(&b'.') {
        out.len() - 1
    } else {
        out.len()
    };
    out[start..end].to_vec()
}

/// Ordered chain of total IP-literal recognizers. Each either fully matches
/// and converts, or declines; a declined host stays a plain hostname.
///
/// All of these notations have historically been accepted by HTTP clients
/// and OS resolvers, which makes them a URL-filter bypass vector
/// (`http://3279880203/` is `195.127.0.11`).
fn canonical_ip(host: &[u8]) -> Option<String> {
    let host = std::str::from_utf8(host).ok()?;
    if host.is_empty() {
        return None;
    }

    // Standard textual forms are kept, in canonical rendering.
    if let Ok(v4) = host.parse::<Ipv4Addr>() {
        return Some(v4.to_string());
    }
    if let Some(v6) = bracketed_ipv6(host) {
        return Some(v6);
    }

    let stripped = strip_leading_zeros(host);
    packed_hex(&stripped)
        .or_else(|| packed_octal(&stripped))
        .or_else(|| packed_decimal(&stripped))
        .or_else(|| dotted_parts(&stripped))
}

fn bracketed_ipv6(host: &str) -> Option<String> {
    let inner = host.strip_prefix('[')?.strip_suffix(']')?;
    let v6 = inner.parse::<Ipv6Addr>().ok()?;
    Some(format!("[{v6}]"))
}

/// Drop superfluous leading zeros from purely-numeric dot components, so an
/// all-digit host is not misread as octal downstream.
fn strip_leading_zeros(host: &str) -> String {
    let parts: Vec<&str> = host
        .split('.')
        .map(|part| {
            if part.len() > 1 && part.bytes().all(|b| b.is_ascii_digit()) {
                let trimmed = part.trim_start_matches('0');
                if trimmed.is_empty() {
                    "0"
                } else {
                    trimmed
                }
            } else {
                part
            }
        })
        .collect();
    parts.join(".")
}

/// `0x…` over the whole host: one packed 32-bit value in base 16.
fn packed_hex(host: &str) -> Option<String> {
    let digits = host.strip_prefix("0x")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Ipv4Addr::from(value).to_string())
}

/// All digits 0–7: one packed 32-bit value in base 8. Runs before the
/// decimal recognizer, matching the historical resolver chain.
fn packed_octal(host: &str) -> Option<String> {
    if host.is_empty() || !host.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
        return None;
    }
    let value = u32::from_str_radix(host, 8).ok()?;
    Some(Ipv4Addr::from(value).to_string())
}

/// Pure digits: one packed 32-bit decimal value.
fn packed_decimal(host: &str) -> Option<String> {
    if host.is_empty() || !host.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = host.parse::<u32>().ok()?;
    Some(Ipv4Addr::from(value).to_string())
}

/// Exactly four dot-separated parts, each independently hex (`0x…`), octal
/// (leading zero), or decimal, every octet ≤ 255.
fn dotted_parts(host: &str) -> Option<String> {
    if !host
        .bytes()
        .all(|b| b.is_ascii_hexdigit() || b == b'x' || b == b'.')
    {
        return None;
    }
    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() != 4 {
        return None;
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = parse_octet(part)?;
    }
    Some(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]).to_string())
}

fn parse_octet(part: &str) -> Option<u8> {
    let value = if let Some(hex) = part.strip_prefix("0x") {
        if hex.is_empty() {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()?
    } else if part.len() > 1 && part.starts_with('0') {
        u32::from_str_radix(part, 8).ok()?
    } else if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse::<u32>().ok()?
    } else {
        return None;
    };
    u8::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(host: &[u8]) -> Vec<u8> {
        normalize(host)
    }

    #[test]
    fn test_case_folded() {
        assert_eq!(norm(b"www.GOOgle.com"), b"www.google.com");
    }

    #[test]
    fn test_dots_trimmed_and_collapsed() {
        assert_eq!(norm(b"www.google.com..."), b"www.google.com");
        assert_eq!(norm(b".example..com."), b"example.com");
    }

    #[test]
    fn test_standard_ipv4_kept() {
        assert_eq!(norm(b"195.127.0.11"), b"195.127.0.11");
    }

    #[test]
    fn test_ipv6_canonical_rendering() {
        assert_eq!(norm(b"[2001:DB8::1]"), b"[2001:db8::1]");
        assert_eq!(norm(b"[::1]"), b"[::1]");
    }

    #[test]
    fn test_packed_decimal() {
        assert_eq!(norm(b"3279880203"), b"195.127.0.11");
    }

    #[test]
    fn test_packed_hex() {
        assert_eq!(norm(b"0xc37f000b"), b"195.127.0.11");
        assert_eq!(norm(b"0XC37F000B"), b"195.127.0.11");
    }

    #[test]
    fn test_packed_octal() {
        assert_eq!(norm(b"0177"), b"0.0.0.127");
    }

    #[test]
    fn test_octal_recognizer_precedes_decimal() {
        // All-0-7 digits hit the octal recognizer first: 10₈ = 8.
        assert_eq!(norm(b"10"), b"0.0.0.8");
    }

    #[test]
    fn test_dotted_hex_parts() {
        assert_eq!(norm(b"0x12.0x34.0x56.0x78"), b"18.52.86.120");
    }

    #[test]
    fn test_dotted_mixed_parts() {
        assert_eq!(norm(b"0x7f.0.0.01"), b"127.0.0.1");
    }

    #[test]
    fn test_leading_zeros_stripped_before_conversion() {
        assert_eq!(norm(b"010.0.0.1"), b"10.0.0.1");
    }

    #[test]
    fn test_octet_out_of_range_declines() {
        assert_eq!(norm(b"1.2.3.300"), b"1.2.3.300");
    }

    #[test]
    fn test_hex_overflow_declines() {
        assert_eq!(norm(b"0x1c37f000b"), b"0x1c37f000b");
    }

    #[test]
    fn test_decimal_overflow_declines() {
        assert_eq!(norm(b"99999999999"), b"99999999999");
    }

    #[test]
    fn test_three_parts_decline() {
        assert_eq!(norm(b"1.2.3"), b"1.2.3");
    }

    #[test]
    fn test_plain_hostname_untouched() {
        assert_eq!(norm(b"example.com"), b"example.com");
    }

    #[test]
    fn test_non_ascii_bytes_pass_through() {
        assert_eq!(norm(b"\xD0\xBF.com"), b"\xD0\xBF.com");
    }

    #[test]
    fn test_hex_part_without_prefix_declines() {
        // `ab.cd.ef.12` has hex digits but no 0x markers: not an IP.
        assert_eq!(norm(b"ab.cd.ef.12"), b"ab.cd.ef.12");
    }
}
