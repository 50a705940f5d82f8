//! Domain model for a scheduled vendor payment.
use serde::{Deserialize, Serialize};
use shared::{PaymentType, VendorCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub vendor_name: String,
    pub vendor_category: VendorCategory,
    pub payment_type: PaymentType,
    pub amount: f64,
    pub date: String,
    pub cheque_number: String,
    pub bank_name: String,
}

impl Payment {
    /// Generate a unique payment ID (UUID v4).
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Check every record invariant at once: non-empty ID and vendor name,
    /// strictly positive finite amount, YYYY-MM-DD shaped date, and cheque
    /// detail fields empty unless the payment type is Cheque.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && !self.vendor_name.is_empty()
            && self.amount.is_finite()
            && self.amount > 0.0
            && is_date_shaped(&self.date)
            && (self.payment_type.carries_cheque_details()
                || (self.cheque_number.is_empty() && self.bank_name.is_empty()))
    }
}

impl From<Payment> for shared::Payment {
    fn from(payment: Payment) -> Self {
        shared::Payment {
            id: payment.id,
            vendor_name: payment.vendor_name,
            vendor_category: payment.vendor_category,
            payment_type: payment.payment_type,
            amount: payment.amount,
            date: payment.date,
            cheque_number: payment.cheque_number,
            bank_name: payment.bank_name,
        }
    }
}

impl From<shared::Payment> for Payment {
    fn from(payment: shared::Payment) -> Self {
        Payment {
            id: payment.id,
            vendor_name: payment.vendor_name,
            vendor_category: payment.vendor_category,
            payment_type: payment.payment_type,
            amount: payment.amount,
            date: payment.date,
            cheque_number: payment.cheque_number,
            bank_name: payment.bank_name,
        }
    }
}

/// Shape check for YYYY-MM-DD date strings.
///
/// Calendar validity is deliberately not checked; "2024-13-40" passes.
pub fn is_date_shaped(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed_payment() -> Payment {
        Payment {
            id: Payment::generate_id(),
            vendor_name: "Acme Traders".to_string(),
            vendor_category: VendorCategory::Fmcg,
            payment_type: PaymentType::Cheque,
            amount: 100.50,
            date: "2024-03-05".to_string(),
            cheque_number: "CHQ1".to_string(),
            bank_name: "HDFC".to_string(),
        }
    }

    #[test]
    fn test_is_date_shaped() {
        assert!(is_date_shaped("2024-03-05"));
        assert!(is_date_shaped("2024-13-40")); // shape only, not calendar validity
        assert!(!is_date_shaped("2024-3-5"));
        assert!(!is_date_shaped("05-03-2024"));
        assert!(!is_date_shaped("2024/03/05"));
        assert!(!is_date_shaped("2024-03-05T00:00:00"));
        assert!(!is_date_shaped(""));
    }

    #[test]
    fn test_is_well_formed_accepts_valid_record() {
        assert!(well_formed_payment().is_well_formed());
    }

    #[test]
    fn test_is_well_formed_rejects_broken_invariants() {
        let mut p = well_formed_payment();
        p.vendor_name = String::new();
        assert!(!p.is_well_formed());

        let mut p = well_formed_payment();
        p.amount = 0.0;
        assert!(!p.is_well_formed());

        let mut p = well_formed_payment();
        p.amount = -5.0;
        assert!(!p.is_well_formed());

        let mut p = well_formed_payment();
        p.date = "5 March 2024".to_string();
        assert!(!p.is_well_formed());

        // cheque details on a non-cheque payment
        let mut p = well_formed_payment();
        p.payment_type = PaymentType::BankTransfer;
        assert!(!p.is_well_formed());
        p.cheque_number = String::new();
        p.bank_name = String::new();
        assert!(p.is_well_formed());
    }

    #[test]
    fn test_dto_round_trip() {
        let domain = well_formed_payment();
        let dto: shared::Payment = domain.clone().into();
        let back: Payment = dto.into();
        assert_eq!(back, domain);
    }
}
