//! Actions a shopper (or a hardware collaborator) can attempt.
//!
//! Each variant corresponds to one row of the transition table in
//! [`Navigator`]; variants carry exactly the data routing needs and nothing
//! else. The payloads that only matter to the ledger (the scanned item, the
//! discount) are passed to the session operation directly.
//!
//! [`Navigator`]: crate::core::Navigator

use crate::ledger::PaymentMethod;

/// An attempted kiosk operation, as seen by the transition table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Start a shopping session from the home screen.
    BeginShopping,
    /// Add a scanned item to the cart.
    ScanItem,
    /// Remove the most recently scanned item.
    RemoveLastItem,
    /// Remove the item at a given cart position.
    RemoveItem,
    /// Arm the hardware scanner, moving to the scanning screen if needed.
    ContinuousScanning,
    /// Disarm the hardware scanner without changing screens.
    FinishScanning,
    /// Open the discount entry screen.
    OpenDiscounts,
    /// Apply a discount to the transaction.
    ApplyDiscount,
    /// Return from discounts to scanning.
    ResumeScanning,
    /// Move to payment method selection.
    ProceedToPayment,
    /// Choose how to pay; routes to the matching capture screen.
    SelectPayment(PaymentMethod),
    /// Report the outcome of a payment capture attempt.
    ProcessPayment { success: bool },
    /// Produce the receipt after a successful payment.
    PrintReceipt,
    /// Abandon the transaction and return home.
    Cancel,
}

impl Action {
    /// The action's name for events and errors, independent of payload.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BeginShopping => "beginShopping",
            Self::ScanItem => "scanItem",
            Self::RemoveLastItem => "removeLastItem",
            Self::RemoveItem => "removeItem",
            Self::ContinuousScanning => "continuousScanning",
            Self::FinishScanning => "finishScanning",
            Self::OpenDiscounts => "openDiscounts",
            Self::ApplyDiscount => "applyDiscount",
            Self::ResumeScanning => "resumeScanning",
            Self::ProceedToPayment => "proceedToPayment",
            Self::SelectPayment(_) => "selectPayment",
            Self::ProcessPayment { .. } => "processPayment",
            Self::PrintReceipt => "printReceipt",
            Self::Cancel => "cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_ignores_payload() {
        assert_eq!(
            Action::SelectPayment(PaymentMethod::Card).name(),
            Action::SelectPayment(PaymentMethod::EWallet).name(),
        );
        assert_eq!(
            Action::ProcessPayment { success: true }.name(),
            Action::ProcessPayment { success: false }.name(),
        );
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Action::BeginShopping.name(), "beginShopping");
        assert_eq!(Action::Cancel.name(), "cancel");
    }
}
