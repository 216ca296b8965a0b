use crate::card;
use crate::history::{InMemoryHistory, TransactionHistory};
use crate::request::TransactionRequest;
use crate::response::TransactionResponse;
use chrono::Utc;
use rust_decimal::Decimal;

/// Validation toggles supplied by the caller, one per optional check.
///
/// `gift` is accepted for interface compatibility but never read: gift-card
/// status is re-derived from the request itself on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationConfig {
    pub gift: bool,
    pub check_duplicate: bool,
    pub validate_expiration: bool,
    pub require_cardholder_name: bool,
    pub waive_fee: bool,
    pub always_require_signature: bool,
}

/// Runs the ordered validation pipeline over incoming requests.
///
/// Owns the duplicate-detection history; requests that pass the mandatory
/// field checks are recorded (and never evicted), even when a later optional
/// check declines them.
pub struct TransactionValidator<H: TransactionHistory = InMemoryHistory> {
    history: H,
}

impl Default for TransactionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionValidator {
    pub fn new() -> Self {
        Self {
            history: InMemoryHistory::new(),
        }
    }
}

impl<H: TransactionHistory> TransactionValidator<H> {
    pub fn with_history(history: H) -> Self {
        Self { history }
    }

    /// Validates a request and produces an approval or a decline.
    ///
    /// Checks run in a fixed order and short-circuit on the first failure;
    /// every failure is a `Declined` response carrying the reason, fee 0,
    /// and the caller's `always_require_signature` preference. Approvals
    /// always require a signature.
    pub fn process(
        &mut self,
        request: TransactionRequest,
        config: &ValidationConfig,
    ) -> TransactionResponse {
        let declined =
            |message: &str| TransactionResponse::declined(message, config.always_require_signature);

        let amount = match request.amount {
            Some(amount) if amount >= Decimal::ZERO => amount,
            _ => return declined("Amount invalid or not specified."),
        };

        if !card::is_gift_card(&request) {
            match &request.card_number {
                Some(number) if number.len() == 16 => {}
                _ => return declined("Card number is invalid or not specified."),
            }
        }

        let expiration = match request.expiration_date {
            Some(date) => date,
            None => return declined("Expiration date is invalid or not specified"),
        };

        if config.check_duplicate && self.history.contains(&request) {
            return declined("Duplicate transaction already exists.");
        }

        // Recorded before the remaining checks: a request declined for an
        // expired card or a malformed name still counts as seen.
        self.history.record(request.clone());

        if config.validate_expiration && expiration < Utc::now().date_naive() {
            return declined("Card expired.");
        }

        if config.require_cardholder_name {
            match &request.cardholder_name {
                Some(name) if name.chars().filter(|&c| c == ' ').count() == 1 => {}
                _ => return declined("Cardholder name invalid or not provided."),
            }
        }

        let fee = if config.waive_fee {
            Decimal::ZERO
        } else {
            let number = request
                .card_number
                .as_deref()
                .or(request.account_number.as_deref())
                .unwrap_or("");
            let brand = card::determine_brand(&request, number);
            card::calculate_fee(&request, amount, brand)
        };

        TransactionResponse::approved(fee)
    }

    pub fn history(&self) -> &H {
        &self.history
    }
}
