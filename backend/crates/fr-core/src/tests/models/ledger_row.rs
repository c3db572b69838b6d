use crate::LedgerRow;
use crate::models::ledger_row::LEDGER_COLUMNS;
use crate::tests::jane_doe;

use chrono::{TimeZone, Utc};

#[test]
fn test_row_has_one_cell_per_column_in_order() {
    let received_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 5).unwrap();

    let row = LedgerRow::new(&jane_doe(), received_at);

    assert_eq!(row.cells().len(), LEDGER_COLUMNS.len());
    assert_eq!(
        row.cells(),
        &[
            "2026-03-01T09:30:05.000Z",
            "Logo",
            "Jane Doe",
            "jane@x.com",
            "",
            "",
            "",
            "",
            ""
        ]
    );
}

#[test]
fn test_row_writes_optional_fields_when_present() {
    let mut request = jane_doe();
    request.pages = Some("5".into());
    request.project_type = Some("Redesign".into());
    request.deadline = Some("June".into());

    let row = LedgerRow::new(&request, Utc::now());

    assert_eq!(row.cells()[5], "5");
    assert_eq!(row.cells()[6], "Redesign");
    assert_eq!(row.cells()[8], "June");
}

#[test]
fn test_row_serializes_as_flat_array() {
    let row = LedgerRow::new(&jane_doe(), Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());

    let json = serde_json::to_value(&row).unwrap();

    assert!(json.is_array());
    assert_eq!(json[0], "2026-01-02T03:04:05.000Z");
    assert_eq!(json[4], "");
}
