//! Whole-directory persistence round trips.

#![allow(clippy::unwrap_used)]

use tempfile::TempDir;

use tillpoint_core::{Money, PaymentMethod};
use tillpoint_pos::{Cart, NewCustomer, PosConfig, Shop, seed};

fn populated_shop(dir: &TempDir) -> Shop {
    let mut shop = Shop::open(PosConfig::new(dir.path())).unwrap();
    seed::seed_if_empty(&mut shop.catalog).unwrap();

    let customer = shop
        .customers
        .add_customer(NewCustomer {
            name: "Priya Sharma".to_owned(),
            phone: "98765 43210".to_owned(),
            email: "priya@example.com".to_owned(),
            address: "12 Market Road".to_owned(),
        })
        .unwrap();

    shop.shopping_lists
        .add_item(customer, "Rice (1kg)", 2, "the good brand")
        .unwrap();
    shop.shopping_lists
        .add_item(customer, "Dragon Fruit", 1, "if they ever stock it")
        .unwrap();

    let mut cart = Cart::new();
    let rice = shop.catalog.find_by_name("Rice (1kg)").unwrap().clone();
    cart.add(&rice, 3).unwrap();
    shop.checkout(&cart, customer, PaymentMethod::Cash).unwrap();

    shop
}

#[test]
fn reload_reproduces_every_dataset_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let shop = populated_shop(&dir);
    let reloaded = Shop::open(PosConfig::new(dir.path())).unwrap();

    assert_eq!(reloaded.catalog.products(), shop.catalog.products());
    assert_eq!(reloaded.ledger.rows(), shop.ledger.rows());
    assert_eq!(reloaded.customers.customers(), shop.customers.customers());

    let customer = shop.customers.customers().first().unwrap().id;
    assert_eq!(
        reloaded.shopping_lists.items(customer),
        shop.shopping_lists.items(customer)
    );

    // Monetary fields survive without precision loss.
    assert_eq!(
        reloaded.customers.find_by_id(customer).unwrap().total_purchases,
        Money::parse("240.00").unwrap()
    );
}

#[test]
fn counters_recover_from_tables_when_sidecar_is_lost() {
    let dir = tempfile::tempdir().unwrap();
    let _shop = populated_shop(&dir);

    std::fs::remove_file(dir.path().join("counters.json")).unwrap();

    let mut shop = Shop::open(PosConfig::new(dir.path())).unwrap();
    let next_product = shop
        .catalog
        .add_product(tillpoint_pos::NewProduct {
            name: "Ghee (500g)".to_owned(),
            category: "Dairy".to_owned(),
            unit_price: Money::parse("260.00").unwrap(),
            initial_stock: 12,
            min_stock_level: 3,
            supplier: "Supplier D".to_owned(),
        })
        .unwrap();
    assert_eq!(next_product.to_string(), "P011");

    let next_customer = shop
        .customers
        .add_customer(NewCustomer {
            name: "Arun Patel".to_owned(),
            ..NewCustomer::default()
        })
        .unwrap();
    assert_eq!(next_customer.to_string(), "C002");

    let mut cart = Cart::new();
    let ghee = shop.catalog.find_by_id(next_product).unwrap().clone();
    cart.add(&ghee, 1).unwrap();
    let receipt = shop
        .checkout(&cart, next_customer, PaymentMethod::Card)
        .unwrap();
    assert_eq!(receipt.sale_id.to_string(), "S0002");
}

#[test]
fn negative_amount_in_table_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let _shop = populated_shop(&dir);

    // Hand-edit a customer's running total below zero.
    let path = dir.path().join("customers.csv");
    let tampered = std::fs::read_to_string(&path)
        .unwrap()
        .replace("240.00", "-240.00");
    std::fs::write(&path, tampered).unwrap();

    let err = Shop::open(PosConfig::new(dir.path())).unwrap_err();
    assert!(matches!(err, tillpoint_pos::PosError::Persistence(_)));
}

#[test]
fn fresh_directory_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("shop_data");
    let shop = Shop::open(PosConfig::new(data_dir.clone())).unwrap();

    assert!(shop.catalog.is_empty());
    assert!(shop.ledger.rows().is_empty());
    assert!(shop.customers.customers().is_empty());

    // The data directory itself was created.
    assert!(data_dir.is_dir());
}
