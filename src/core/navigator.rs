//! The navigator: current screen plus the one transition table.
//!
//! The original kiosk re-derived its guards per method with ad-hoc screen
//! checks; here the legal-transition set is declared once, in
//! [`Navigator::screen_for`], and every session operation consults it before
//! touching the ledger. Resolution is pure — the screen only moves when the
//! session applies the resolved destination.

use crate::core::{Action, Screen};
use crate::error::{KioskError, Result};
use crate::ledger::PaymentMethod;

/// Owns the active [`Screen`] and enforces the transition table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    /// A fresh navigator on the home screen.
    pub fn new() -> Self {
        Self {
            current: Screen::Home,
        }
    }

    /// The active screen (pure).
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Resolve an action against the transition table (pure).
    ///
    /// Returns the destination screen if the action is legal from the
    /// current screen, or [`KioskError::IllegalTransition`] otherwise.
    /// Actions that keep the screen unchanged resolve to the current screen.
    ///
    /// `Receipt` is absorbing: once there, only [`Action::Cancel`] resolves.
    pub fn screen_for(&self, action: &Action) -> Result<Screen> {
        use Screen::*;

        let to = match (self.current, action) {
            (_, Action::Cancel) => Home,

            // Everything below is off the table once the receipt is out.
            (Receipt, _) => return Err(self.reject(action)),

            (Home, Action::BeginShopping) => Scanning,
            (Scanning, Action::ScanItem) => Scanning,
            (Scanning, Action::RemoveLastItem) => Scanning,
            (Scanning, Action::RemoveItem) => Scanning,
            (_, Action::ContinuousScanning) => Scanning,
            (current, Action::FinishScanning) => current,
            (Scanning, Action::OpenDiscounts) => Discounts,
            (Discounts, Action::ApplyDiscount) => Discounts,
            (Discounts, Action::ResumeScanning) => Scanning,
            (Scanning | Discounts, Action::ProceedToPayment) => Payment,
            (Payment, Action::SelectPayment(method)) => match method {
                PaymentMethod::EWallet => ScanQR,
                PaymentMethod::Card => CardReader,
            },
            (ScanQR | CardReader, Action::ProcessPayment { success: true }) => Complete,
            (ScanQR | CardReader, Action::ProcessPayment { success: false }) => Payment,
            (Complete, Action::PrintReceipt) => Receipt,

            _ => return Err(self.reject(action)),
        };

        Ok(to)
    }

    /// Move to a screen previously resolved by [`Self::screen_for`].
    pub(crate) fn move_to(&mut self, screen: Screen) {
        self.current = screen;
    }

    fn reject(&self, action: &Action) -> KioskError {
        KioskError::IllegalTransition {
            action: action.name(),
            screen: self.current,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(screen: Screen) -> Navigator {
        let mut nav = Navigator::new();
        nav.move_to(screen);
        nav
    }

    #[test]
    fn starts_at_home() {
        assert_eq!(Navigator::new().current(), Screen::Home);
    }

    #[test]
    fn begin_shopping_only_from_home() {
        assert_eq!(
            at(Screen::Home).screen_for(&Action::BeginShopping).unwrap(),
            Screen::Scanning
        );
        assert!(at(Screen::Payment)
            .screen_for(&Action::BeginShopping)
            .is_err());
    }

    #[test]
    fn scan_item_stays_on_scanning() {
        assert_eq!(
            at(Screen::Scanning).screen_for(&Action::ScanItem).unwrap(),
            Screen::Scanning
        );
    }

    #[test]
    fn scan_item_rejected_elsewhere() {
        for screen in [Screen::Home, Screen::Discounts, Screen::Payment] {
            let err = at(screen).screen_for(&Action::ScanItem).unwrap_err();
            assert!(matches!(
                err,
                KioskError::IllegalTransition {
                    action: "scanItem",
                    ..
                }
            ));
        }
    }

    #[test]
    fn select_payment_routes_by_method() {
        let nav = at(Screen::Payment);
        assert_eq!(
            nav.screen_for(&Action::SelectPayment(PaymentMethod::EWallet))
                .unwrap(),
            Screen::ScanQR
        );
        assert_eq!(
            nav.screen_for(&Action::SelectPayment(PaymentMethod::Card))
                .unwrap(),
            Screen::CardReader
        );
    }

    #[test]
    fn process_payment_routes_by_outcome() {
        for screen in [Screen::ScanQR, Screen::CardReader] {
            let nav = at(screen);
            assert_eq!(
                nav.screen_for(&Action::ProcessPayment { success: true })
                    .unwrap(),
                Screen::Complete
            );
            assert_eq!(
                nav.screen_for(&Action::ProcessPayment { success: false })
                    .unwrap(),
                Screen::Payment
            );
        }
    }

    #[test]
    fn proceed_to_payment_from_scanning_or_discounts_only() {
        assert!(at(Screen::Scanning)
            .screen_for(&Action::ProceedToPayment)
            .is_ok());
        assert!(at(Screen::Discounts)
            .screen_for(&Action::ProceedToPayment)
            .is_ok());
        assert!(at(Screen::Home)
            .screen_for(&Action::ProceedToPayment)
            .is_err());
        assert!(at(Screen::Complete)
            .screen_for(&Action::ProceedToPayment)
            .is_err());
    }

    #[test]
    fn cancel_resolves_from_every_screen() {
        for screen in [
            Screen::Home,
            Screen::Scanning,
            Screen::Discounts,
            Screen::Payment,
            Screen::ScanQR,
            Screen::CardReader,
            Screen::Complete,
            Screen::Receipt,
        ] {
            assert_eq!(at(screen).screen_for(&Action::Cancel).unwrap(), Screen::Home);
        }
    }

    #[test]
    fn receipt_is_absorbing_except_cancel() {
        let nav = at(Screen::Receipt);
        assert!(nav.screen_for(&Action::BeginShopping).is_err());
        assert!(nav.screen_for(&Action::ContinuousScanning).is_err());
        assert!(nav.screen_for(&Action::FinishScanning).is_err());
        assert!(nav.screen_for(&Action::PrintReceipt).is_err());
        assert!(nav.screen_for(&Action::Cancel).is_ok());
    }

    #[test]
    fn continuous_scanning_converges_on_scanning() {
        for screen in [Screen::Home, Screen::Scanning, Screen::Payment] {
            assert_eq!(
                at(screen).screen_for(&Action::ContinuousScanning).unwrap(),
                Screen::Scanning
            );
        }
    }

    #[test]
    fn finish_scanning_keeps_the_screen() {
        for screen in [Screen::Scanning, Screen::Discounts, Screen::Payment] {
            assert_eq!(at(screen).screen_for(&Action::FinishScanning).unwrap(), screen);
        }
    }

    #[test]
    fn resume_scanning_only_from_discounts() {
        assert_eq!(
            at(Screen::Discounts)
                .screen_for(&Action::ResumeScanning)
                .unwrap(),
            Screen::Scanning
        );
        assert!(at(Screen::Scanning)
            .screen_for(&Action::ResumeScanning)
            .is_err());
    }

    #[test]
    fn print_receipt_only_from_complete() {
        assert_eq!(
            at(Screen::Complete).screen_for(&Action::PrintReceipt).unwrap(),
            Screen::Receipt
        );
        for screen in [Screen::Scanning, Screen::Payment, Screen::ScanQR] {
            assert!(at(screen).screen_for(&Action::PrintReceipt).is_err());
        }
    }

    #[test]
    fn resolution_does_not_move_the_screen() {
        let nav = at(Screen::Scanning);
        nav.screen_for(&Action::OpenDiscounts).unwrap();
        assert_eq!(nav.current(), Screen::Scanning);
    }
}
