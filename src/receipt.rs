//! Receipt snapshots.
//!
//! A receipt is a pure, immutable projection of the ledger at the moment the
//! transaction completed. [`build`] is only callable once the machine sits on
//! `Complete` with a successful payment; the printer collaborator consumes
//! the snapshot and the core does not care how printing happens.

use crate::core::Screen;
use crate::error::{KioskError, Result};
use crate::ledger::{Discount, Item, PaymentMethod, Transaction};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable receipt for one completed transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<Item>,
    pub subtotal: Decimal,
    pub discounts: Vec<Discount>,
    pub total_discount: Decimal,
    /// `subtotal - total_discount`, unclamped.
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    /// Wall-clock print time, supplied by the caller; opaque to invariants.
    pub timestamp: DateTime<Utc>,
}

/// Project a completed transaction into a [`Receipt`].
///
/// Fails with [`KioskError::TransactionNotComplete`] unless the machine is
/// on [`Screen::Complete`] with a successfully captured payment. For a fixed
/// input the output is deterministic; only the caller-supplied timestamp
/// varies between calls.
pub fn build(screen: Screen, transaction: &Transaction, timestamp: DateTime<Utc>) -> Result<Receipt> {
    use crate::ledger::PaymentStatus;

    if screen != Screen::Complete || transaction.payment_status != PaymentStatus::Successful {
        return Err(KioskError::TransactionNotComplete);
    }
    let payment_method = transaction
        .payment_method
        .ok_or(KioskError::TransactionNotComplete)?;

    Ok(Receipt {
        items: transaction.items.clone(),
        subtotal: transaction.subtotal,
        discounts: transaction.discounts.clone(),
        total_discount: transaction.total_discount,
        total: transaction.total_due(),
        payment_method,
        timestamp,
    })
}
