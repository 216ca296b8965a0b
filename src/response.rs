use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Approved,
    Declined,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TransactionResponse {
    pub status: TransactionStatus,
    pub message: String,
    pub fee: Decimal,
    pub signature_required: bool,
}

impl TransactionResponse {
    /// A declined response never carries a fee.
    pub fn declined(message: &str, signature_required: bool) -> Self {
        Self {
            status: TransactionStatus::Declined,
            message: message.to_string(),
            fee: Decimal::ZERO,
            signature_required,
        }
    }

    /// Approved transactions always require a signature.
    pub fn approved(fee: Decimal) -> Self {
        Self {
            status: TransactionStatus::Approved,
            message: "Transaction approved.".to_string(),
            fee,
            signature_required: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_declined_zeroes_fee() {
        let response = TransactionResponse::declined("Card expired.", true);
        assert_eq!(response.status, TransactionStatus::Declined);
        assert_eq!(response.fee, Decimal::ZERO);
        assert!(response.signature_required);
    }

    #[test]
    fn test_approved_forces_signature() {
        let response = TransactionResponse::approved(dec!(4.00));
        assert_eq!(response.status, TransactionStatus::Approved);
        assert_eq!(response.message, "Transaction approved.");
        assert_eq!(response.fee, dec!(4.00));
        assert!(response.signature_required);
    }

    #[test]
    fn test_status_serialization() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer
            .serialize(TransactionResponse::approved(dec!(1.5)))
            .unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(out.contains("approved,Transaction approved.,1.5,true"));
    }
}
