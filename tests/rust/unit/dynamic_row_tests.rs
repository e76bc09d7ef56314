//! Schema-less fetches: sanitized keys, preserved order, raw values.

use serde_json::json;

use rowmap::access::DataAccess;
use rowmap::result_set::MemoryRows;

#[test]
fn dynamic_rows_keep_select_order_with_sanitized_keys() {
    let access = DataAccess::new();
    let mut source = MemoryRows::new(["Id", "Assistant First Name", "count()"])
        .push_row(vec![json!(1), json!("Jane"), json!(12)])
        .push_row(vec![json!(2), json!("June"), json!(3)]);

    let rows = access
        .select("select * from assistants")
        .fetch_dynamic(&mut source)
        .unwrap();

    assert_eq!(rows.len(), 2);
    let keys: Vec<&String> = rows[0].keys().collect();
    assert_eq!(keys, vec!["Id", "Assistant_First_Name", "count__"]);
    assert_eq!(rows[1]["Assistant_First_Name"], json!("June"));
}

#[test]
fn dynamic_values_are_passed_through_untransformed() {
    let access = DataAccess::new();
    let mut source = MemoryRows::new(["payload", "flag"])
        .push_row(vec![json!({"answer": 42}), json!("true")]);

    let rows = access.select("q").fetch_dynamic(&mut source).unwrap();

    // No coercion: the object stays an object, the stringy boolean stays a
    // string.
    assert_eq!(rows[0]["payload"], json!({"answer": 42}));
    assert_eq!(rows[0]["flag"], json!("true"));
}

#[test]
fn duplicate_column_names_are_disambiguated() {
    let access = DataAccess::new();
    let mut source =
        MemoryRows::new(["Id", "Id"]).push_row(vec![json!(1), json!(2)]);

    let rows = access.select("q").fetch_dynamic(&mut source).unwrap();

    assert_eq!(rows[0]["Id"], json!(1));
    assert_eq!(rows[0]["Id_1"], json!(2));
}
