use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A single payment transaction request.
///
/// Every field is optional at the wire level; the validator decides which
/// absences are decline-worthy. Duplicate detection relies on the derived
/// `PartialEq`: two requests are duplicates iff all fields match.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct TransactionRequest {
    pub amount: Option<Decimal>,
    pub card_number: Option<String>,
    pub account_number: Option<String>,
    pub cvv: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub cardholder_name: Option<String>,
}
