//! A full self-checkout session, narrated.
//!
//! This example walks one shopper through the whole screen flow: scanning
//! items out of a product catalog, redeeming a discount code, failing a card
//! capture once, retrying, and printing the receipt. Transition events are
//! emitted through `tracing`; run with `RUST_LOG=info` to see them.
//!
//! Run with: cargo run --example checkout_flow

use kiosk::{
    DiscountCatalog, DiscountRule, Item, KioskSession, PaymentMethod, ProductCatalog, Result,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn store_products() -> ProductCatalog {
    let mut catalog = ProductCatalog::new();
    catalog.insert("123456789", Item::new("Bread", dec!(2.99)));
    catalog.insert("987654321", Item::new("Milk", dec!(3.49)));
    catalog.insert("456789123", Item::new("Eggs", dec!(4.99)));
    catalog.insert("789123456", Item::new("Bananas", dec!(1.99)));
    catalog.insert("321654987", Item::new("Coffee", dec!(5.99)));
    catalog.insert("654987321", Item::new("Cereal", dec!(4.49)));
    catalog
}

fn store_discounts() -> DiscountCatalog {
    let mut catalog = DiscountCatalog::new();
    catalog.insert("SAVE10", DiscountRule::Flat(dec!(1.00)));
    catalog.insert("SPRING25", DiscountRule::Flat(dec!(2.50)));
    catalog.insert("5PERCENTOFF", DiscountRule::PercentOff(dec!(5)));
    catalog
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let products = store_products();
    let discounts = store_discounts();

    let mut session = KioskSession::new();
    println!("=== Self-Checkout Session {} ===\n", session.id());

    session.begin_shopping()?;
    session.continuous_scanning()?;

    for barcode in ["123456789", "987654321", "456789123"] {
        match products.lookup(barcode) {
            Some(item) => {
                println!("Scanned: {} - ${}", item.name, item.price);
                session.scan_item(item)?;
            }
            None => println!("Unrecognized barcode {barcode}, please try again"),
        }
    }
    session.finish_scanning()?;

    session.open_discounts()?;
    if let Some(discount) = discounts.lookup("SAVE10", session.state().subtotal) {
        println!("Applied discount: {} - ${}", discount.code, discount.amount);
        session.apply_discount(discount)?;
    }

    session.proceed_to_payment()?;
    println!("\nAmount due: ${}", session.state().total_due);

    // First capture attempt fails; the machine loops back to Payment.
    session.select_payment(PaymentMethod::Card)?;
    session.process_payment(false)?;
    println!("Card declined, retrying...");

    session.select_payment(PaymentMethod::Card)?;
    session.process_payment(true)?;

    let receipt = session.print_receipt()?;

    println!("\n{:=^40}", " RECEIPT ");
    for item in &receipt.items {
        println!("  {:<20} ${}", item.name, item.price);
    }
    println!("{:-<40}", "");
    println!("  {:<20} ${}", "Subtotal", receipt.subtotal);
    for discount in &receipt.discounts {
        println!("  {:<20} -${}", discount.code, discount.amount);
    }
    println!("  {:<20} ${}", "Total", receipt.total);
    println!("  Paid by {}", receipt.payment_method);
    println!("{:=<40}", "");

    println!(
        "\nSession complete: {} (screens visited: {})",
        session.is_transaction_complete(),
        session.log().path().len()
    );

    Ok(())
}
