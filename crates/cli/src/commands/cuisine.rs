use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use poi_metadata::cuisine::{cuisine_to_display_key, normalize_cuisine, split_cuisines};

/// (raw, normalized, display key) for every `;`-separated cuisine in `tag`.
pub fn expand(tag: &str) -> Vec<(String, String, String)> {
    split_cuisines(tag)
        .into_iter()
        .map(|raw| {
            let normalized = normalize_cuisine(&raw);
            let display_key = cuisine_to_display_key(&normalized);
            (raw, normalized, display_key)
        })
        .collect()
}

pub fn run(tag: &str) -> anyhow::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Raw", "Normalized", "Display Key"]);

    for (raw, normalized, display_key) in expand(tag) {
        table.add_row(vec![raw, normalized, display_key]);
    }

    println!("{table}");
    Ok(())
}
