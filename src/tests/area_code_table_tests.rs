use crate::{AreaCodeTable, TableLoadError};

use super::get_classifier;

#[test]
fn compiled_table_loads() {
    let classifier = get_classifier();
    let table = classifier.table();
    assert!(!table.is_empty());
    assert!(table.len() > 300);
}

#[test]
fn lookup_hits_every_partition() {
    let classifier = get_classifier();
    let table = classifier.table();

    let entry = table.lookup("03").expect("03 should exist");
    assert_eq!(entry.region, "東京都");
    assert!(!entry.is_kinki);

    let entry = table.lookup("075").expect("075 should exist");
    assert_eq!(entry.region, "京都府");
    assert!(entry.is_kinki);

    let entry = table.lookup("0742").expect("0742 should exist");
    assert_eq!(entry.region, "奈良県");
    assert!(entry.is_kinki);

    let entry = table.lookup("09913").expect("09913 should exist");
    assert_eq!(entry.region, "鹿児島県鹿児島郡三島村");
}

#[test]
fn lookup_is_partitioned_by_length() {
    let classifier = get_classifier();
    let table = classifier.table();

    // exact-match within one partition only; other lengths never bleed in
    assert!(table.lookup("07").is_none());
    assert!(table.lookup("0751").is_none());
    assert!(table.lookup("0").is_none());
    assert!(table.lookup("031234").is_none());
    assert!(table.lookup("").is_none());
}

#[test]
fn empty_table_never_matches() {
    let table = AreaCodeTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(table.lookup("03").is_none());
    assert!(table.lookup("075").is_none());
}

#[test]
fn from_json_str_accepts_partial_documents() {
    let table = AreaCodeTable::from_json_str(r#"{"twoDigit": {"06": {"region": "大阪府"}}}"#)
        .expect("partial document should parse");
    assert_eq!(table.len(), 1);
    let entry = table.lookup("06").expect("06 should exist");
    // isKinki defaults to false when the document omits it
    assert!(!entry.is_kinki);
}

#[test]
fn from_json_str_rejects_malformed_documents() {
    let err = AreaCodeTable::from_json_str("not json").expect_err("should fail");
    assert!(matches!(err, TableLoadError::Json(_)));
}

#[test]
fn load_from_path_reads_the_shipped_resource() {
    let table =
        AreaCodeTable::load_from_path("resources/area-codes.json").expect("resource should load");
    assert_eq!(table.lookup("078").expect("078 should exist").region, "兵庫県");
}

#[test]
fn load_from_path_reports_missing_files() {
    let err = AreaCodeTable::load_from_path("no/such/table.json").expect_err("should fail");
    assert!(matches!(err, TableLoadError::Io(_)));
}

#[test]
fn load_from_path_or_empty_degrades() {
    let table = AreaCodeTable::load_from_path_or_empty("no/such/table.json");
    assert!(table.is_empty());
}
