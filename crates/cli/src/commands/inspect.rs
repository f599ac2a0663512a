use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use anyhow::Context;
use poi_metadata::codec::decode_record;
use poi_metadata::MetadataRecord;
use std::path::Path;

/// One row per present entry, in code order.
pub fn build_table(record: &MetadataRecord) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Code", "Kind", "Value"]);

    for (kind, value) in record.iter() {
        table.add_row(vec![kind.code().to_string(), kind.to_string(), value.to_string()]);
    }
    table
}

pub fn run(path: &Path, json: bool) -> anyhow::Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let record = decode_record(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    tracing::info!("Decoded {} entries from {:?}", record.len(), path);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("\nMetadata Record ({} bytes, {} entries)", bytes.len(), record.len());
    println!("--------------------");
    println!("{}\n", build_table(&record));

    Ok(())
}
