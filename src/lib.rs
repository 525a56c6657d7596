//! Kiosk: a typed state machine for retail self-checkout sessions.
//!
//! The crate models the control flow of a self-checkout terminal: the
//! screens a shopper moves through and the transaction accumulated along the
//! way. The legal-transition set is declared once, in the navigator's
//! transition table, and every mutating operation is a guarded transition —
//! guard check, ledger mutation and screen move are atomic from the caller's
//! point of view, so a rejection never leaves partial effects.
//!
//! Hardware is someone else's problem: scanners feed [`Item`]s in, the
//! payment terminal reports a success/failure signal, and the printer
//! consumes the [`Receipt`] snapshot.
//!
//! # Core Concepts
//!
//! - **Screen**: one of eight UI modes; exactly one active at a time
//! - **Guarded transition**: a state change permitted only when the
//!   transition table allows it from the current screen
//! - **Ledger**: the cart, discounts and payment outcome for one session
//! - **Session**: one shopper driving one machine; sessions share nothing
//!
//! # Example
//!
//! ```rust
//! use kiosk::{Item, KioskSession, PaymentMethod, Screen};
//! use rust_decimal::Decimal;
//!
//! let mut session = KioskSession::new();
//! session.begin_shopping()?;
//! session.scan_item(Item::new("Bread", Decimal::new(299, 2)))?;
//! session.proceed_to_payment()?;
//! session.select_payment(PaymentMethod::Card)?;
//! session.process_payment(true)?;
//!
//! let receipt = session.print_receipt()?;
//! assert_eq!(receipt.total, Decimal::new(299, 2));
//! assert_eq!(session.screen(), Screen::Receipt);
//! assert!(session.is_transaction_complete());
//! # Ok::<(), kiosk::KioskError>(())
//! ```

pub mod catalog;
pub mod core;
pub mod error;
pub mod ledger;
pub mod receipt;
pub mod session;

// Re-export the types a collaborator touches day to day.
pub use catalog::{DiscountCatalog, DiscountRule, ProductCatalog};
pub use core::{Action, Navigator, Screen, TransitionEvent, TransitionLog};
pub use error::{KioskError, Result};
pub use ledger::{Discount, Item, PaymentMethod, PaymentStatus, Transaction, TransactionLedger};
pub use receipt::Receipt;
pub use session::{KioskSession, KioskState};
