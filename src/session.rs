//! One shopper's kiosk session.
//!
//! A [`KioskSession`] ties a [`Navigator`] to a [`TransactionLedger`] and
//! exposes the guarded operations of the transition table. Every operation
//! follows the same shape: consult the table, mutate the ledger, move the
//! screen, emit one structured event. A rejected action does none of the
//! mutation — the guard check and the effects are atomic from the caller's
//! point of view.
//!
//! Sessions are plain values with no global state: a store with six lanes
//! runs six independent sessions that share nothing.

use crate::core::{Action, Navigator, Screen, TransitionEvent, TransitionLog};
use crate::error::Result;
use crate::ledger::{
    Discount, Item, PaymentMethod, PaymentStatus, Transaction, TransactionLedger,
};
use crate::receipt::{self, Receipt};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only snapshot of a session, for UI rendering.
///
/// Querying it is side-effect free; two calls without an intervening action
/// return identical values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KioskState {
    pub screen: Screen,
    pub cart_items: usize,
    pub subtotal: Decimal,
    pub discounts_applied: usize,
    pub total_discount: Decimal,
    pub total_due: Decimal,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub receipt_printed: bool,
    pub scanner_active: bool,
}

/// A single shopper session driving the kiosk state machine.
#[derive(Debug)]
pub struct KioskSession {
    id: Uuid,
    navigator: Navigator,
    ledger: TransactionLedger,
    scanner_active: bool,
    log: TransitionLog,
}

impl KioskSession {
    /// A fresh session: home screen, empty transaction, scanner idle.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            navigator: Navigator::new(),
            ledger: TransactionLedger::new(),
            scanner_active: false,
            log: TransitionLog::new(),
        }
    }

    // --- guarded operations ---

    /// Start shopping: `Home -> Scanning` with a fresh, empty transaction.
    pub fn begin_shopping(&mut self) -> Result<()> {
        let to = self.guard(Action::BeginShopping)?;
        self.ledger.reset();
        self.commit(Action::BeginShopping, to);
        Ok(())
    }

    /// Add a scanned item to the cart. Only legal while scanning.
    pub fn scan_item(&mut self, item: Item) -> Result<()> {
        let to = self.guard(Action::ScanItem)?;
        self.ledger.add_item(item);
        self.commit(Action::ScanItem, to);
        Ok(())
    }

    /// Remove the most recently scanned item, returning it.
    pub fn remove_last_item(&mut self) -> Result<Item> {
        let to = self.guard(Action::RemoveLastItem)?;
        let item = match self.ledger.remove_last() {
            Ok(item) => item,
            Err(err) => {
                self.observe(Action::RemoveLastItem, self.screen(), false);
                return Err(err);
            }
        };
        self.commit(Action::RemoveLastItem, to);
        Ok(item)
    }

    /// Remove the item at `index` in scan order, returning it.
    pub fn remove_item(&mut self, index: usize) -> Result<Item> {
        let to = self.guard(Action::RemoveItem)?;
        let item = match self.ledger.remove_at(index) {
            Ok(item) => item,
            Err(err) => {
                self.observe(Action::RemoveItem, self.screen(), false);
                return Err(err);
            }
        };
        self.commit(Action::RemoveItem, to);
        Ok(item)
    }

    /// Arm the hardware scanner, moving to `Scanning` if not already there.
    pub fn continuous_scanning(&mut self) -> Result<()> {
        let to = self.guard(Action::ContinuousScanning)?;
        self.scanner_active = true;
        self.commit(Action::ContinuousScanning, to);
        Ok(())
    }

    /// Disarm the hardware scanner. The screen does not change.
    pub fn finish_scanning(&mut self) -> Result<()> {
        let to = self.guard(Action::FinishScanning)?;
        self.scanner_active = false;
        self.commit(Action::FinishScanning, to);
        Ok(())
    }

    /// Open discount entry: `Scanning -> Discounts`. Stops the scanner.
    pub fn open_discounts(&mut self) -> Result<()> {
        let to = self.guard(Action::OpenDiscounts)?;
        self.scanner_active = false;
        self.commit(Action::OpenDiscounts, to);
        Ok(())
    }

    /// Apply a discount. Only legal on the discounts screen.
    pub fn apply_discount(&mut self, discount: Discount) -> Result<()> {
        let to = self.guard(Action::ApplyDiscount)?;
        self.ledger.add_discount(discount);
        self.commit(Action::ApplyDiscount, to);
        Ok(())
    }

    /// Return from discounts to scanning, re-arming the scanner.
    pub fn resume_scanning(&mut self) -> Result<()> {
        let to = self.guard(Action::ResumeScanning)?;
        self.scanner_active = true;
        self.commit(Action::ResumeScanning, to);
        Ok(())
    }

    /// Move to payment selection from `Scanning` or `Discounts`.
    /// Stops the scanner.
    pub fn proceed_to_payment(&mut self) -> Result<()> {
        let to = self.guard(Action::ProceedToPayment)?;
        self.scanner_active = false;
        self.commit(Action::ProceedToPayment, to);
        Ok(())
    }

    /// Choose a payment method, routing to the matching capture screen
    /// (`ScanQR` for e-wallet, `CardReader` for card) and opening a fresh
    /// payment attempt cycle.
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<()> {
        let action = Action::SelectPayment(method);
        let to = self.guard(action)?;
        self.ledger.set_payment_method(method);
        self.commit(action, to);
        Ok(())
    }

    /// Record the capture outcome reported by the payment terminal.
    ///
    /// Success lands on `Complete`; failure returns to `Payment` so the
    /// shopper can pick a method again — a designed retry loop, not error
    /// recovery. Returns the outcome it was given.
    pub fn process_payment(&mut self, success: bool) -> Result<bool> {
        let action = Action::ProcessPayment { success };
        let to = self.guard(action)?;
        let status = if success {
            PaymentStatus::Successful
        } else {
            PaymentStatus::Failed
        };
        self.ledger.set_payment_status(status);
        self.commit(action, to);
        Ok(success)
    }

    /// Produce the receipt snapshot: `Complete -> Receipt`.
    ///
    /// The snapshot is built before anything mutates, so a rejection has no
    /// partial effects. The returned [`Receipt`] goes to the printer
    /// collaborator.
    pub fn print_receipt(&mut self) -> Result<Receipt> {
        let to = self.guard(Action::PrintReceipt)?;
        let receipt = match receipt::build(self.screen(), self.ledger.transaction(), Utc::now()) {
            Ok(receipt) => receipt,
            Err(err) => {
                self.observe(Action::PrintReceipt, self.screen(), false);
                return Err(err);
            }
        };
        self.ledger.mark_receipt_printed();
        self.commit(Action::PrintReceipt, to);
        Ok(receipt)
    }

    /// Abandon the session: discard the transaction and return `Home`.
    ///
    /// Legal from every screen, including `Receipt`, where it is the
    /// explicit reset that starts the next shopper's session.
    pub fn cancel(&mut self) -> Result<()> {
        let to = self.guard(Action::Cancel)?;
        self.ledger.reset();
        self.scanner_active = false;
        self.commit(Action::Cancel, to);
        Ok(())
    }

    // --- side-effect-free queries ---

    /// This session's identity, carried on every emitted event.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    /// True once the receipt is out and the session is over.
    pub fn is_transaction_complete(&self) -> bool {
        self.screen() == Screen::Receipt
    }

    /// Whether the hardware scanner is currently armed.
    pub fn scanner_active(&self) -> bool {
        self.scanner_active
    }

    /// Borrow the live transaction.
    pub fn transaction(&self) -> &Transaction {
        self.ledger.transaction()
    }

    /// The journal of every attempted transition, rejections included.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Snapshot the session for UI rendering.
    pub fn state(&self) -> KioskState {
        let tx = self.ledger.transaction();
        KioskState {
            screen: self.screen(),
            cart_items: tx.items.len(),
            subtotal: self.ledger.subtotal(),
            discounts_applied: tx.discounts.len(),
            total_discount: self.ledger.total_discount(),
            total_due: self.ledger.total_due(),
            payment_method: tx.payment_method,
            payment_status: tx.payment_status,
            receipt_printed: tx.receipt_printed,
            scanner_active: self.scanner_active,
        }
    }

    // --- internals ---

    /// Consult the transition table. On rejection, records the refused
    /// attempt and returns the error with the session untouched.
    fn guard(&mut self, action: Action) -> Result<Screen> {
        match self.navigator.screen_for(&action) {
            Ok(to) => Ok(to),
            Err(err) => {
                self.observe(action, self.screen(), false);
                Err(err)
            }
        }
    }

    /// Apply a destination resolved by [`Self::guard`] and record it.
    fn commit(&mut self, action: Action, to: Screen) {
        self.observe(action, to, true);
        self.navigator.move_to(to);
    }

    fn observe(&mut self, action: Action, to: Screen, accepted: bool) {
        let from = self.navigator.current();
        let event = TransitionEvent {
            session: self.id,
            action: action.name(),
            from,
            to,
            accepted,
            timestamp: Utc::now(),
        };
        if accepted {
            tracing::info!(
                session = %event.session,
                action = event.action,
                from = %event.from,
                to = %event.to,
                accepted = event.accepted,
                "transition"
            );
        } else {
            tracing::warn!(
                session = %event.session,
                action = event.action,
                from = %event.from,
                to = %event.to,
                accepted = event.accepted,
                "transition rejected"
            );
        }
        self.log = self.log.record(event);
    }
}

impl Default for KioskSession {
    fn default() -> Self {
        Self::new()
    }
}
