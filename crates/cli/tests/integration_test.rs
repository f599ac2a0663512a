use poi_metadata::codec::{decode_record, encode_record};
use poi_metadata::{MetadataKind, MetadataRecord};
use poi_metadata_cli::commands::{cuisine, encode, inspect, verify};
use tempfile::tempdir;

#[test]
fn test_encode_inspect_verify_workflow() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("poi.json");
    let blob_path = dir.path().join("poi.bin");

    std::fs::write(
        &json_path,
        r#"{"cuisine": "italian;pizza", "phone_number": "+39 06 1234", "stars": "3"}"#,
    )
    .unwrap();

    let result = encode::run(&json_path, &blob_path);
    assert!(result.is_ok(), "encode failed: {:?}", result);

    let record = decode_record(&std::fs::read(&blob_path).unwrap()).unwrap();
    assert_eq!(record.len(), 3);
    assert_eq!(record.get(MetadataKind::Cuisine), Some("italian;pizza"));

    assert!(inspect::run(&blob_path, false).is_ok());
    assert!(inspect::run(&blob_path, true).is_ok());
    assert!(verify::run(&blob_path).is_ok());
}

#[test]
fn test_verify_rejects_corrupt_blob() {
    let dir = tempdir().unwrap();
    let blob_path = dir.path().join("bad.bin");

    let mut record = MetadataRecord::new();
    record.insert(MetadataKind::Email, "info@example.org");
    let mut bytes = encode_record(&record).unwrap();
    bytes.truncate(bytes.len() - 3);
    std::fs::write(&blob_path, &bytes).unwrap();

    assert!(verify::run(&blob_path).is_err());
    assert!(inspect::run(&blob_path, false).is_err());
}

#[test]
fn test_encode_rejects_unknown_kind() {
    assert!(encode::parse_json(r#"{"colour": "red"}"#).is_err());
    assert!(encode::parse_json(r#"["cuisine"]"#).is_err());

    let record = encode::parse_json(r#"{"building_levels": "4"}"#).unwrap();
    assert_eq!(record.get(MetadataKind::BuildingLevels), Some("4"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.bin");
    assert!(inspect::run(&missing, false).is_err());

    let err = verify::run(&missing).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"), "got: {}", err);
}

#[test]
fn test_inspect_table_rows() {
    let mut record = MetadataRecord::new();
    record.insert(MetadataKind::Website, "https://example.org");
    record.insert(MetadataKind::Cuisine, "thai");

    let rendered = inspect::build_table(&record).to_string();
    assert!(rendered.contains("cuisine"));
    assert!(rendered.contains("https://example.org"));
    assert!(rendered.find("cuisine").unwrap() < rendered.find("website").unwrap());
}

#[test]
fn test_cuisine_expand() {
    let rows = cuisine::expand("Fine Dining, Vegan;;Pizza");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].1, "fine_dining_vegan");
    assert_eq!(rows[0].2, "cuisine_fine_dining_vegan");
    assert_eq!(rows[1].0, "");
    assert_eq!(rows[2].2, "cuisine_pizza");
    assert!(cuisine::run("italian").is_ok());
}
