//! The transaction ledger: cart, discounts and payment outcome.
//!
//! The ledger is only ever mutated through Navigator-gated session
//! operations — guard-then-mutate is the single legal access pattern. That
//! discipline is enforced by visibility: every mutating primitive here is
//! `pub(crate)`, so code outside the crate can observe the ledger but never
//! write to it directly.

mod transaction;

pub use transaction::{Discount, Item, PaymentMethod, PaymentStatus, Transaction};

use crate::error::{KioskError, Result};
use rust_decimal::Decimal;

/// Owns the [`Transaction`] aggregate for one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionLedger {
    transaction: Transaction,
}

impl TransactionLedger {
    /// A ledger holding a fresh, empty transaction.
    pub fn new() -> Self {
        Self::default()
    }

    // --- mutation primitives, reachable only through guarded actions ---

    /// Append a scanned item and fold its price into the subtotal.
    pub(crate) fn add_item(&mut self, item: Item) {
        self.transaction.subtotal += item.price;
        self.transaction.items.push(item);
    }

    /// Remove the most recently scanned item, unwinding its price.
    pub(crate) fn remove_last(&mut self) -> Result<Item> {
        let item = self.transaction.items.pop().ok_or(KioskError::EmptyCart)?;
        self.transaction.subtotal -= item.price;
        Ok(item)
    }

    /// Remove the item at `index` (scan order), unwinding its price.
    pub(crate) fn remove_at(&mut self, index: usize) -> Result<Item> {
        if index >= self.transaction.items.len() {
            return Err(KioskError::ItemOutOfRange { index });
        }
        let item = self.transaction.items.remove(index);
        self.transaction.subtotal -= item.price;
        Ok(item)
    }

    /// Append a discount and fold its amount into the discount total.
    pub(crate) fn add_discount(&mut self, discount: Discount) {
        self.transaction.total_discount += discount.amount;
        self.transaction.discounts.push(discount);
    }

    /// Record the chosen payment method, opening a fresh attempt cycle.
    ///
    /// Selecting a method clears any `Failed` status left by the previous
    /// capture attempt.
    pub(crate) fn set_payment_method(&mut self, method: PaymentMethod) {
        self.transaction.payment_method = Some(method);
        self.transaction.payment_status = PaymentStatus::Unset;
    }

    /// Record the outcome of the current capture attempt.
    pub(crate) fn set_payment_status(&mut self, status: PaymentStatus) {
        self.transaction.payment_status = status;
    }

    /// Mark the receipt as produced.
    pub(crate) fn mark_receipt_printed(&mut self) {
        self.transaction.receipt_printed = true;
    }

    /// Discard the transaction, returning the ledger to its empty state.
    pub(crate) fn reset(&mut self) {
        self.transaction = Transaction::default();
    }

    // --- pure accessors ---

    /// Running sum of scanned item prices.
    pub fn subtotal(&self) -> Decimal {
        self.transaction.subtotal
    }

    /// Running sum of applied discount amounts.
    pub fn total_discount(&self) -> Decimal {
        self.transaction.total_discount
    }

    /// `subtotal - total_discount`, unclamped.
    pub fn total_due(&self) -> Decimal {
        self.transaction.total_due()
    }

    /// Borrow the live transaction.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// An owned copy of the transaction as it stands.
    pub fn snapshot(&self) -> Transaction {
        self.transaction.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn add_item_maintains_subtotal() {
        let mut ledger = TransactionLedger::new();
        ledger.add_item(Item::new("Bread", dec!(2.99)));
        ledger.add_item(Item::new("Milk", dec!(3.49)));

        assert_eq!(ledger.subtotal(), dec!(6.48));
        assert_eq!(ledger.transaction().items.len(), 2);
    }

    #[test]
    fn remove_last_unwinds_subtotal() {
        let mut ledger = TransactionLedger::new();
        ledger.add_item(Item::new("Bread", dec!(2.99)));
        ledger.add_item(Item::new("Milk", dec!(3.49)));

        let removed = ledger.remove_last().unwrap();
        assert_eq!(removed.name, "Milk");
        assert_eq!(ledger.subtotal(), dec!(2.99));
    }

    #[test]
    fn remove_last_on_empty_cart_is_rejected() {
        let mut ledger = TransactionLedger::new();
        assert!(matches!(ledger.remove_last(), Err(KioskError::EmptyCart)));
        assert_eq!(ledger.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn remove_at_checks_bounds() {
        let mut ledger = TransactionLedger::new();
        ledger.add_item(Item::new("Bread", dec!(2.99)));

        assert!(matches!(
            ledger.remove_at(3),
            Err(KioskError::ItemOutOfRange { index: 3 })
        ));

        let removed = ledger.remove_at(0).unwrap();
        assert_eq!(removed.name, "Bread");
        assert_eq!(ledger.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn add_discount_maintains_total() {
        let mut ledger = TransactionLedger::new();
        ledger.add_discount(Discount::new("SAVE10", dec!(1.00)));
        ledger.add_discount(Discount::new("SPRING25", dec!(2.50)));

        assert_eq!(ledger.total_discount(), dec!(3.50));
    }

    #[test]
    fn total_due_is_unclamped() {
        let mut ledger = TransactionLedger::new();
        ledger.add_item(Item::new("Gum", dec!(0.99)));
        ledger.add_discount(Discount::new("SPRING25", dec!(2.50)));

        assert_eq!(ledger.total_due(), dec!(-1.51));
    }

    #[test]
    fn selecting_a_method_opens_a_fresh_attempt_cycle() {
        let mut ledger = TransactionLedger::new();
        ledger.set_payment_method(PaymentMethod::Card);
        ledger.set_payment_status(PaymentStatus::Failed);

        ledger.set_payment_method(PaymentMethod::EWallet);
        assert_eq!(ledger.transaction().payment_status, PaymentStatus::Unset);
        assert_eq!(
            ledger.transaction().payment_method,
            Some(PaymentMethod::EWallet)
        );
    }

    #[test]
    fn reset_discards_everything() {
        let mut ledger = TransactionLedger::new();
        ledger.add_item(Item::new("Bread", dec!(2.99)));
        ledger.add_discount(Discount::new("SAVE10", dec!(1.00)));
        ledger.set_payment_method(PaymentMethod::Card);
        ledger.set_payment_status(PaymentStatus::Successful);
        ledger.mark_receipt_printed();

        ledger.reset();
        assert_eq!(ledger, TransactionLedger::new());
    }

    #[test]
    fn snapshot_is_detached_from_the_ledger() {
        let mut ledger = TransactionLedger::new();
        ledger.add_item(Item::new("Bread", dec!(2.99)));

        let snapshot = ledger.snapshot();
        ledger.add_item(Item::new("Milk", dec!(3.49)));

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(ledger.transaction().items.len(), 2);
    }
}
