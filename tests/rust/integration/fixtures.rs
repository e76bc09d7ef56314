//! Customer/order entities and canned result sets for the pipeline tests.

use serde_json::json;

use rowmap::impl_row_entity;
use rowmap::result_set::MemoryRows;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl_row_entity!(Customer {
    "Id" => id,
    "FirstName" => first_name,
    "LastName" => last_name,
});

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub order_number: String,
    pub total_amount: f64,
}

impl_row_entity!(Order {
    "Id" => id,
    "CustomerId" => customer_id,
    "OrderNumber" => order_number,
    "TotalAmount" => total_amount,
});

/// Customers joined to one order each; both entities lead with `Id`.
pub fn customer_order_rows() -> MemoryRows {
    MemoryRows::new([
        "Id",
        "FirstName",
        "LastName",
        "Id",
        "CustomerId",
        "OrderNumber",
        "TotalAmount",
    ])
    .push_row(vec![
        json!(1),
        json!("Ada"),
        json!("Lovelace"),
        json!(10),
        json!(1),
        json!("SO-1001"),
        json!(120.5),
    ])
    .push_row(vec![
        json!(2),
        json!("Grace"),
        json!("Hopper"),
        json!(11),
        json!(2),
        json!("SO-1002"),
        json!(80.0),
    ])
}

pub fn customer_rows() -> MemoryRows {
    MemoryRows::new(["Id", "FirstName", "LastName"])
        .push_row(vec![json!(1), json!("Ada"), json!("Lovelace")])
        .push_row(vec![json!(2), json!("Grace"), json!("Hopper")])
}
