use anyhow::Context;
use poi_metadata::codec::encode_record;
use poi_metadata::MetadataRecord;
use std::path::Path;

/// Parses a JSON object keyed by kind name, e.g. `{"cuisine": "thai"}`.
pub fn parse_json(text: &str) -> anyhow::Result<MetadataRecord> {
    let record: MetadataRecord = serde_json::from_str(text)
        .context("expected a JSON object mapping metadata kind names to strings")?;
    Ok(record)
}

pub fn run(input: &Path, out: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let record = parse_json(&text)?;
    let bytes = encode_record(&record)?;

    std::fs::write(out, &bytes)
        .with_context(|| format!("failed to write {}", out.display()))?;
    tracing::info!("Wrote {} entries ({} bytes) to {:?}", record.len(), bytes.len(), out);

    println!("Encoded {} entries -> {} ({} bytes)", record.len(), out.display(), bytes.len());
    Ok(())
}
