use pretty_assertions::assert_eq;
use qag_core::domain::{CitationReview, QaTriple};
use qag_core::review::review_document;
use qag_core::writer::{
    dataset_records, document_id_for, DatasetRecord, DatasetWriter, OutputFormat,
};
use tempfile::tempdir;

const DOC: &str = "The sky is blue. Water boils at 100 degrees Celsius at sea level.";
const GENERATED_AT: &str = "2026-02-10T12:30:45Z";

fn reviewed() -> Vec<CitationReview> {
    let triples = vec![
        QaTriple {
            question: "At what temperature does water boil?".to_string(),
            answer: "100 degrees Celsius at sea level.".to_string(),
            citation: "Water boils at 100 degrees Celsius".to_string(),
        },
        QaTriple {
            question: "When does water freeze?".to_string(),
            answer: "Not supported.".to_string(),
            citation: "Water freezes at 100 degrees".to_string(),
        },
    ];
    review_document(DOC, &triples).reviews
}

#[test]
fn records_carry_document_identity_and_validity() {
    let records = dataset_records(DOC, "physics.md", GENERATED_AT, &reviewed());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].document_id, document_id_for(DOC));
    assert_eq!(records[0].source_label, "physics.md");
    assert!(records[0].citation_valid);
    assert!(!records[1].citation_valid);
    assert_eq!(records[1].generated_at, GENERATED_AT);
    // Identity is stable and content-derived.
    assert_eq!(document_id_for(DOC).len(), 64);
    assert_ne!(document_id_for(DOC), document_id_for("other text"));
}

#[test]
fn writes_all_three_formats_with_stamped_filenames() {
    let dir = tempdir().unwrap();
    let writer = DatasetWriter::new(dir.path().to_path_buf());
    let records = dataset_records(DOC, "physics.md", GENERATED_AT, &reviewed());

    let outputs = writer
        .write_multiple_formats(&records, "physics", GENERATED_AT, &OutputFormat::ALL)
        .unwrap();
    assert_eq!(outputs.len(), 3);

    for (ext, path) in &outputs {
        assert!(path.exists(), "missing output for {ext}");
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("physics_20260210_123045.{ext}")
        );
    }

    // CSV: header plus one row per record, every field quoted.
    let csv_text = std::fs::read_to_string(&outputs["csv"]).unwrap();
    assert_eq!(csv_text.lines().count(), 3);
    assert!(csv_text.starts_with("\"document_id\","));
    assert!(csv_text.contains("\"Water boils at 100 degrees Celsius\""));

    // JSON: a pretty array that round-trips.
    let json_text = std::fs::read_to_string(&outputs["json"]).unwrap();
    let decoded: Vec<DatasetRecord> = serde_json::from_str(&json_text).unwrap();
    assert_eq!(decoded, records);

    // JSONL: one object per line.
    let jsonl_text = std::fs::read_to_string(&outputs["jsonl"]).unwrap();
    let lines: Vec<&str> = jsonl_text.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: DatasetRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first, records[0]);
}

#[test]
fn empty_record_set_is_rejected() {
    let dir = tempdir().unwrap();
    let writer = DatasetWriter::new(dir.path().to_path_buf());
    let err = writer
        .write(&[], "physics", GENERATED_AT, OutputFormat::Csv)
        .unwrap_err();
    assert_eq!(err.code, "DATASET_EMPTY");
}

#[test]
fn non_rfc3339_timestamp_is_rejected() {
    let dir = tempdir().unwrap();
    let writer = DatasetWriter::new(dir.path().to_path_buf());
    let records = dataset_records(DOC, "physics.md", GENERATED_AT, &reviewed());
    let err = writer
        .write(&records, "physics", "2026-02-10 12:30", OutputFormat::Csv)
        .unwrap_err();
    assert_eq!(err.code, "DATASET_TIMESTAMP_INVALID");
}
