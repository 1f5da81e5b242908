use std::io::Write;

const SCHEMA_VERSION: u32 = 1;

/// JSON Lines record for one canonicalization result.
#[derive(serde::Serialize)]
pub struct JsonRecord<'a> {
    pub schema_version: u32,
    pub input: &'a str,
    pub canonical: &'a str,
}

/// Write one result as a JSON line.
pub fn write_json(input: &str, canonical: &str, mut w: impl Write) -> std::io::Result<()> {
    let record = JsonRecord {
        schema_version: SCHEMA_VERSION,
        input,
        canonical,
    };
    serde_json::to_writer(&mut w, &record)?;
    writeln!(w)?;
    Ok(())
}

/// Write one result as a plain line. Unparsable inputs produce an empty
/// line, keeping output lines aligned with input lines.
pub fn write_plain(canonical: &str, mut w: impl Write) -> std::io::Result<()> {
    writeln!(w, "{canonical}")
}
