//! Error taxonomy for kiosk sessions.
//!
//! Every rejection here is locally recoverable: the caller gets the error,
//! the session state is left untouched, and the shopper can try something
//! else. A kiosk must never crash mid-transaction, so nothing in this crate
//! escalates to a panic.

use crate::core::Screen;
use thiserror::Error;

/// Errors returned by kiosk session operations.
#[derive(Debug, Error)]
pub enum KioskError {
    /// The action is not legal on the current screen.
    #[error("action '{action}' is not allowed on the {screen} screen")]
    IllegalTransition {
        action: &'static str,
        screen: Screen,
    },

    /// A screen name from a collaborator did not match any kiosk screen.
    #[error("'{0}' is not a kiosk screen")]
    InvalidScreen(String),

    /// A payment method name from a collaborator is not supported.
    #[error("'{0}' is not a supported payment method")]
    InvalidPaymentMethod(String),

    /// A receipt was requested before the payment completed.
    #[error("receipt requested before the transaction completed")]
    TransactionNotComplete,

    /// An item removal was requested while the cart is empty.
    #[error("the cart is empty")]
    EmptyCart,

    /// An item removal named a cart position that does not exist.
    #[error("no item in the cart at position {index}")]
    ItemOutOfRange { index: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KioskError>;
