use anyhow::Context;
use chrono::{Duration, Local};
use rust_decimal::Decimal;

use warehouse_core::ProductId;
use warehouse_inventory::{CatalogContext, ReportConfig, WarehouseReport};
use warehouse_products::Product;

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let config = ReportConfig::from_env();
    let today = Local::now().date_naive();

    let mut context = CatalogContext::new();
    stock_sample_catalogue(&mut context, &config.warehouse_name, today)
        .context("failed to stock sample catalogue")?;

    let warehouse = context.warehouse(&config.warehouse_name);
    tracing::info!(warehouse = %warehouse.name(), products = warehouse.len(), "warehouse stocked");

    let report = WarehouseReport::build(warehouse, today);
    let rendered = serde_json::to_string_pretty(&report).context("failed to render report")?;
    println!("{rendered}");

    Ok(())
}

fn stock_sample_catalogue(
    context: &mut CatalogContext,
    warehouse_name: &str,
    today: chrono::NaiveDate,
) -> anyhow::Result<()> {
    let electronics = context.category("electronics")?;
    let dairy = context.category("DAIRY")?;
    let bakery = context.category(" bakery ")?;

    let laptop = Product::electronics(
        ProductId::new(),
        "Laptop",
        electronics.clone(),
        Decimal::new(12999, 0),
        24,
        Decimal::new(21, 1),
    )?;
    let television = Product::electronics(
        ProductId::new(),
        "Television",
        electronics,
        Decimal::new(8495, 0),
        36,
        Decimal::new(145, 1),
    )?;
    let milk = Product::food(
        ProductId::new(),
        "Milk",
        dairy,
        Decimal::new(1890, 2),
        today - Duration::days(2),
        Decimal::new(1, 0),
    )?;
    let bread = Product::food(
        ProductId::new(),
        "Sourdough",
        bakery,
        Decimal::new(4900, 2),
        today + Duration::days(4),
        Decimal::new(75, 2),
    )?;

    let laptop_id = laptop.uuid();
    let warehouse = context.warehouse(warehouse_name);
    for product in [laptop, television, milk, bread] {
        warehouse.add_product(product);
    }
    warehouse
        .update_product_price(laptop_id, Decimal::new(11999, 0))
        .with_context(|| format!("failed to reprice {laptop_id}"))?;

    Ok(())
}
