//! The kiosk screens.
//!
//! Exactly one screen is active at any time; the [`Navigator`] owns which
//! one. Inside the crate an illegal screen is unrepresentable, so the
//! defensive screen validation lives on the [`FromStr`] boundary where
//! collaborator strings enter.
//!
//! [`Navigator`]: crate::core::Navigator

use crate::error::KioskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named mode of the kiosk UI.
///
/// The set is closed: these eight screens are the whole interface of a
/// self-checkout lane, from the idle home screen to the printed receipt.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Screen {
    /// Idle screen between shoppers.
    Home,
    /// Items are being scanned into the cart.
    Scanning,
    /// Discount entry.
    Discounts,
    /// Payment method selection.
    Payment,
    /// E-wallet QR capture.
    ScanQR,
    /// Card insert/tap capture.
    CardReader,
    /// Payment captured, receipt not yet printed.
    Complete,
    /// Receipt produced; the session is over.
    Receipt,
}

impl Screen {
    /// The screen's wire name, as the kiosk UI layer spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Scanning => "scanning",
            Self::Discounts => "discounts",
            Self::Payment => "payment",
            Self::ScanQR => "scanQR",
            Self::CardReader => "cardReader",
            Self::Complete => "complete",
            Self::Receipt => "receipt",
        }
    }

    /// Whether this screen ends the session.
    ///
    /// `Receipt` is absorbing: the only action accepted there is `cancel`,
    /// which starts a fresh session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Receipt)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = KioskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "scanning" => Ok(Self::Scanning),
            "discounts" => Ok(Self::Discounts),
            "payment" => Ok(Self::Payment),
            "scanQR" => Ok(Self::ScanQR),
            "cardReader" => Ok(Self::CardReader),
            "complete" => Ok(Self::Complete),
            "receipt" => Ok(Self::Receipt),
            other => Err(KioskError::InvalidScreen(other.to_string())),
        }
    }
}
