//! Transactional data accumulated during one shopping session.

use crate::error::KioskError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scanned product. Immutable once in the cart.
///
/// `price` is a non-negative decimal amount in the kiosk's currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: Decimal,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// An applied discount. Immutable once applied.
///
/// `amount` is the non-negative value taken off the subtotal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub code: String,
    pub amount: Decimal,
}

impl Discount {
    pub fn new(code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            code: code.into(),
            amount,
        }
    }
}

/// How the shopper chose to pay.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Pays by scanning a QR code.
    EWallet,
    /// Pays at the card reader.
    Card,
}

impl PaymentMethod {
    /// The method's wire name, as the payment UI spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EWallet => "e-wallet",
            Self::Card => "card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaymentMethod {
    type Err = KioskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e-wallet" => Ok(Self::EWallet),
            "card" => Ok(Self::Card),
            other => Err(KioskError::InvalidPaymentMethod(other.to_string())),
        }
    }
}

/// Outcome of the current payment attempt cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// No capture attempted in this cycle.
    #[default]
    Unset,
    Successful,
    /// Capture failed; stays `Failed` until the next method selection.
    Failed,
}

/// The accumulated transaction for one shopping session.
///
/// Invariants, maintained by [`TransactionLedger`]:
/// - `subtotal` always equals the sum of `items[..].price`
/// - `total_discount` always equals the sum of `discounts[..].amount`
/// - `receipt_printed` turns true exactly once, after a successful payment
///
/// The amount due is deliberately *not* clamped at zero: discounts
/// exceeding the subtotal yield a negative due amount, which is the
/// integrator's policy call to handle.
///
/// [`TransactionLedger`]: crate::ledger::TransactionLedger
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Scanned items, in scan order.
    pub items: Vec<Item>,
    /// Applied discounts, in application order.
    pub discounts: Vec<Discount>,
    /// Running sum of item prices.
    pub subtotal: Decimal,
    /// Running sum of discount amounts.
    pub total_discount: Decimal,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub receipt_printed: bool,
}

impl Transaction {
    /// The amount still owed: `subtotal - total_discount`, unclamped.
    pub fn total_due(&self) -> Decimal {
        self.subtotal - self.total_discount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_transaction_owes_nothing() {
        let tx = Transaction::default();
        assert_eq!(tx.total_due(), Decimal::ZERO);
        assert_eq!(tx.payment_status, PaymentStatus::Unset);
        assert!(tx.payment_method.is_none());
        assert!(!tx.receipt_printed);
    }

    #[test]
    fn total_due_goes_negative_when_discounts_exceed_subtotal() {
        let tx = Transaction {
            subtotal: dec!(1.00),
            total_discount: dec!(2.50),
            ..Transaction::default()
        };
        assert_eq!(tx.total_due(), dec!(-1.50));
    }

    #[test]
    fn payment_method_round_trips_through_from_str() {
        for method in [PaymentMethod::EWallet, PaymentMethod::Card] {
            assert_eq!(method.name().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn unknown_method_name_is_rejected() {
        let err = "cash".parse::<PaymentMethod>().unwrap_err();
        assert!(matches!(err, KioskError::InvalidPaymentMethod(name) if name == "cash"));
    }

    #[test]
    fn transaction_serializes_to_json() {
        let tx = Transaction {
            items: vec![Item::new("Bread", dec!(2.99))],
            subtotal: dec!(2.99),
            ..Transaction::default()
        };

        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }
}
