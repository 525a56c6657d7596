//! Collaborator-side lookup tables.
//!
//! The scanner hands the core a barcode and the discount pad hands it a
//! code; these catalogs resolve them into [`Item`] and [`Discount`] values.
//! They sit outside the state machine — the session never consults them
//! itself, and a miss is an ordinary `None`, not an error.

use crate::ledger::{Discount, Item};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Barcode → product lookup, fed by the store's product database.
#[derive(Clone, Debug, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Item>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product under its barcode, replacing any previous entry.
    pub fn insert(&mut self, barcode: impl Into<String>, item: Item) {
        self.products.insert(barcode.into(), item);
    }

    /// Resolve a barcode. Unrecognized barcodes are a miss, never an error.
    pub fn lookup(&self, barcode: &str) -> Option<Item> {
        self.products.get(barcode).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// How a discount code computes its amount.
#[derive(Clone, Debug, PartialEq)]
pub enum DiscountRule {
    /// A fixed amount off.
    Flat(Decimal),
    /// A percentage of the subtotal at redemption time.
    PercentOff(Decimal),
}

impl DiscountRule {
    /// The concrete amount this rule takes off a given subtotal.
    pub fn amount_for(&self, subtotal: Decimal) -> Decimal {
        match self {
            Self::Flat(amount) => *amount,
            Self::PercentOff(percent) => subtotal * *percent / Decimal::ONE_HUNDRED,
        }
    }
}

/// Code → discount rule lookup.
#[derive(Clone, Debug, Default)]
pub struct DiscountCatalog {
    rules: HashMap<String, DiscountRule>,
}

impl DiscountCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a discount code, replacing any previous rule.
    pub fn insert(&mut self, code: impl Into<String>, rule: DiscountRule) {
        self.rules.insert(code.into(), rule);
    }

    /// Resolve a code against the current subtotal.
    ///
    /// Percentage rules are priced at redemption time, so the same code
    /// yields different amounts as the cart grows.
    pub fn lookup(&self, code: &str, subtotal: Decimal) -> Option<Discount> {
        let rule = self.rules.get(code)?;
        Some(Discount::new(code, rule.amount_for(subtotal)))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn product_lookup_hits_and_misses() {
        let mut catalog = ProductCatalog::new();
        catalog.insert("123456789", Item::new("Bread", dec!(2.99)));

        let item = catalog.lookup("123456789").unwrap();
        assert_eq!(item.name, "Bread");
        assert!(catalog.lookup("000000000").is_none());
    }

    #[test]
    fn flat_rule_ignores_subtotal() {
        let rule = DiscountRule::Flat(dec!(1.00));
        assert_eq!(rule.amount_for(dec!(6.48)), dec!(1.00));
        assert_eq!(rule.amount_for(Decimal::ZERO), dec!(1.00));
    }

    #[test]
    fn percent_rule_prices_at_redemption_time() {
        let mut catalog = DiscountCatalog::new();
        catalog.insert("5PERCENTOFF", DiscountRule::PercentOff(dec!(5)));

        let small = catalog.lookup("5PERCENTOFF", dec!(10.00)).unwrap();
        assert_eq!(small.amount, dec!(0.50));

        let large = catalog.lookup("5PERCENTOFF", dec!(100.00)).unwrap();
        assert_eq!(large.amount, dec!(5.00));
    }

    #[test]
    fn unknown_code_is_a_miss() {
        let catalog = DiscountCatalog::new();
        assert!(catalog.lookup("NOPE", dec!(10.00)).is_none());
    }
}
