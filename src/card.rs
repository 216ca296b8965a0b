use crate::request::TransactionRequest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardBrand {
    Visa,
    MasterCard,
    Discover,
    Unknown,
}

/// Gift-card account numbers are exactly this long.
const GIFT_ACCOUNT_LEN: usize = 18;

/// Brand prefixes, checked first-match in order. Gift cards use 6-digit
/// account prefixes, regular cards 4-digit number prefixes.
const GIFT_PREFIXES: [(&str, CardBrand); 3] = [
    ("001615", CardBrand::Visa),
    ("061680", CardBrand::MasterCard),
    ("100101", CardBrand::Discover),
];
const CARD_PREFIXES: [(&str, CardBrand); 3] = [
    ("1024", CardBrand::Visa),
    ("2048", CardBrand::MasterCard),
    ("4096", CardBrand::Discover),
];

/// Returns true iff the request looks like a gift-card transaction: an
/// 18-character account number whose tail matches the CVV.
pub fn is_gift_card(request: &TransactionRequest) -> bool {
    match (&request.account_number, &request.cvv) {
        (Some(account), Some(cvv)) => {
            account.len() == GIFT_ACCOUNT_LEN && account.ends_with(cvv.as_str())
        }
        _ => false,
    }
}

/// Classifies the card number (or gift-card account number) by prefix.
pub fn determine_brand(request: &TransactionRequest, card_number: &str) -> CardBrand {
    let prefixes = if is_gift_card(request) {
        &GIFT_PREFIXES
    } else {
        &CARD_PREFIXES
    };
    for (prefix, brand) in prefixes {
        if card_number.starts_with(prefix) {
            return *brand;
        }
    }
    CardBrand::Unknown
}

/// Processing fee: amount times the per-brand multiplier. Gift cards carry
/// a steeper table than regular cards.
pub fn calculate_fee(request: &TransactionRequest, amount: Decimal, brand: CardBrand) -> Decimal {
    let multiplier = if is_gift_card(request) {
        match brand {
            CardBrand::Visa => dec!(0.05),
            CardBrand::MasterCard => dec!(0.10),
            CardBrand::Discover => dec!(0.15),
            CardBrand::Unknown => dec!(0.25),
        }
    } else {
        match brand {
            CardBrand::Visa => dec!(0.04),
            CardBrand::MasterCard => dec!(0.08),
            CardBrand::Discover => dec!(0.12),
            CardBrand::Unknown => dec!(0.16),
        }
    };
    amount * multiplier
}
