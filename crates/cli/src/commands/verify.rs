use anyhow::Context;
use poi_metadata::codec::{decode_record, fingerprint};
use std::path::Path;

pub fn run(path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match decode_record(&bytes) {
        Ok(record) => {
            println!("\n✅ VALID\n");
            println!("Entries:     {}", record.len());
            println!("Fingerprint: {}\n", hex::encode(fingerprint(&record)));
            Ok(())
        }
        Err(e) => {
            println!("\n❌ CORRUPTED\n");
            println!("Reason: {}\n", e);
            Err(e.into())
        }
    }
}
