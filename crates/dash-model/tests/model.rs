use dash_model::{DashError, QualityCounter, REQUIRED_COLUMNS, required_column_names};

#[test]
fn missing_columns_error_carries_full_required_list() {
    let error = DashError::missing_columns(vec!["name".to_string(), "Total_Order".to_string()]);
    let DashError::MissingColumns { missing, required } = &error else {
        panic!("expected MissingColumns, got {error}");
    };
    assert_eq!(missing.len(), 2);
    assert_eq!(required, &required_column_names());
    assert_eq!(required.len(), REQUIRED_COLUMNS.len());
}

#[test]
fn quality_report_serializes_for_machine_output() {
    let mut counter = QualityCounter::new();
    counter.record_skip("Total_Order", "N/A");
    let report = counter.into_report();

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["issues"][0]["column"], "Total_Order");
    assert_eq!(json["issues"][0]["skipped"], 1);
}
