use dash_ingest::read_upload;
use dash_model::DashError;
use dash_validate::validate;

#[test]
fn upload_missing_every_key_column_lists_them_all() {
    let csv = "id,amount\n1,2\n";
    let table = read_upload(csv.as_bytes(), "upload.csv").expect("parse upload");

    let error = validate(table).expect_err("schema must be rejected");
    let DashError::MissingColumns { missing, required } = error else {
        panic!("expected MissingColumns");
    };
    assert_eq!(missing, required);
}

#[test]
fn parsed_upload_with_full_schema_validates() {
    let csv = "name,camp_name,action_date,Total_Order,Total_Payout\n\
               alice,spring,2024-01-01,10,5\n";
    let table = read_upload(csv.as_bytes(), "upload.csv").expect("parse upload");

    let validated = validate(table).expect("full schema");
    assert_eq!(validated.record_count(), 1);
}

#[test]
fn rejected_table_error_message_is_user_displayable() {
    let csv = "name,camp_name,action_date,Total_Order\nalice,spring,2024-01-01,10\n";
    let table = read_upload(csv.as_bytes(), "upload.csv").expect("parse upload");

    let message = validate(table).expect_err("missing payout").to_string();
    assert!(message.contains("Total_Payout"));
    assert!(message.contains("upload must include"));
}
