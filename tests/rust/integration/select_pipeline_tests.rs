//! End-to-end fetches through the `DataAccess` facade.

use anyhow::Result;
use serde_json::json;

use rowmap::access::DataAccess;
use rowmap::entity_map::TypeDescriptor;
use rowmap::result_set::MemoryRows;

use crate::fixtures::{customer_order_rows, customer_rows, Customer, Order};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn single_entity_fetch_with_auto_described_target() -> Result<()> {
    init_logging();
    let access = DataAccess::new();
    let mut source = customer_rows();

    let customers = access
        .select("dbo.GetCustomers")
        .validate_columns(true)
        .fetch::<Customer, _>(&mut source)?;

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].first_name, "Ada");
    assert_eq!(customers[1].last_name, "Hopper");
    Ok(())
}

#[test]
fn joined_fetch_partitions_duplicate_id_columns() -> Result<()> {
    init_logging();
    let access = DataAccess::new();
    let mut source = customer_order_rows();

    let pairs = access
        .select("dbo.GetCustomersWithOrders")
        .map(TypeDescriptor::of::<Customer>().build()?)?
        .map(TypeDescriptor::of::<Order>().build()?)?
        .partition_on(&["Id"])
        .validate_columns(true)
        .fetch_joined::<(Customer, Order), _>(&mut source)?;

    assert_eq!(pairs.len(), 2);

    let (customer, order) = &pairs[0];
    assert_eq!(customer.id, 1);
    assert_eq!(order.id, 10);
    assert_eq!(order.order_number, "SO-1001");
    assert_eq!(order.total_amount, 120.5);

    let (customer, order) = &pairs[1];
    assert_eq!(customer.last_name, "Hopper");
    assert_eq!(order.customer_id, customer.id);
    Ok(())
}

#[test]
fn aliased_and_ignored_columns_flow_through_a_joined_fetch() -> Result<()> {
    init_logging();
    let access = DataAccess::new();
    let mut source = MemoryRows::new(["Id", "FirstName", "LastName", "OrderNumber", "Grand Total"])
        .push_row(vec![
            json!(1),
            json!("Ada"),
            json!("Lovelace"),
            json!("SO-9"),
            json!(5.25),
        ]);

    let pairs = access
        .select("dbo.GetCustomerTotals")
        .map(TypeDescriptor::of::<Customer>().build()?)?
        .map(
            TypeDescriptor::of::<Order>()
                .alias("TotalAmount", "Grand Total")?
                .ignore("Id")?
                .ignore("CustomerId")?
                .build()?,
        )?
        .partition_on(&["OrderNumber"])
        .validate_columns(true)
        .fetch_joined::<(Customer, Order), _>(&mut source)?;

    let (_, order) = &pairs[0];
    assert_eq!(order.total_amount, 5.25);
    assert_eq!(order.order_number, "SO-9");
    // Ignored columns stay at their defaults.
    assert_eq!(order.id, 0);
    Ok(())
}

#[test]
fn dynamic_fetch_runs_alongside_the_typed_path() -> Result<()> {
    init_logging();
    let access = DataAccess::new();
    let mut source = customer_rows();

    let rows = access.select("select * from customers").fetch_dynamic(&mut source)?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["FirstName"], json!("Ada"));
    Ok(())
}

#[test]
fn exhausted_source_yields_an_empty_collection() -> Result<()> {
    init_logging();
    let access = DataAccess::new();
    let mut source = MemoryRows::new(["Id", "FirstName", "LastName"]);

    let customers = access
        .select("dbo.GetCustomers")
        .fetch::<Customer, _>(&mut source)?;

    assert!(customers.is_empty());
    Ok(())
}
