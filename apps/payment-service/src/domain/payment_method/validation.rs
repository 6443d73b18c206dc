//! Payment method validation.
//!
//! Validation collects every problem rather than stopping at the first, so
//! clients can show all field errors at once.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::{BankAccount, CardDetails, CardNetwork, PaymentInstrument};

const MIN_CARD_DIGITS: usize = 13;
const MAX_CARD_DIGITS: usize = 19;
const MASK_PREFIX: &str = "****-****-****-";

/// Outcome of validating an instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Human-readable problems; empty when the instrument is usable.
    pub errors: Vec<String>,
    /// Detected card network, for cards.
    pub card_network: Option<CardNetwork>,
    /// Masked card number, for cards.
    pub masked_number: Option<String>,
}

impl ValidationReport {
    /// True when no errors were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

/// Validate an instrument as of `today`.
#[must_use]
pub fn validate_instrument(instrument: &PaymentInstrument, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::default();
    match instrument {
        PaymentInstrument::Card(card) => validate_card(card, today, &mut report),
        PaymentInstrument::Upi { vpa } => {
            if !is_valid_vpa(vpa) {
                report.error("UPI VPA must look like name@bank");
            }
        }
        PaymentInstrument::Netbanking(account) => {
            if account.bank_name.trim().is_empty() {
                report.error("bank name is required for netbanking");
            }
            if !account.ifsc.is_empty() && !is_valid_ifsc(&account.ifsc) {
                report.error("IFSC code is invalid");
            }
        }
        PaymentInstrument::BankTransfer(account) => validate_bank_transfer(account, &mut report),
        PaymentInstrument::Wallet {
            provider,
            wallet_id,
        } => {
            if provider.trim().is_empty() {
                report.error("wallet provider is required");
            }
            if wallet_id.trim().is_empty() {
                report.error("wallet id is required");
            }
        }
        PaymentInstrument::Saved { token, .. } => {
            if token.trim().is_empty() {
                report.error("payment method token is empty");
            }
        }
    }
    report
}

fn validate_card(card: &CardDetails, today: NaiveDate, report: &mut ValidationReport) {
    let digits = card.digits();
    report.masked_number = Some(mask_card_number(&digits));

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        report.error("card number must contain only digits");
    } else if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        report.error(format!(
            "card number must be {MIN_CARD_DIGITS} to {MAX_CARD_DIGITS} digits"
        ));
    } else if !luhn_check(&digits) {
        report.error("card number failed checksum validation");
    } else {
        report.card_network = detect_card_network(&digits);
        if report.card_network.is_none() {
            report.error("card network is not supported");
        }
    }

    let cvv_len = report.card_network.map_or(3, CardNetwork::cvv_length);
    if card.cvv.len() != cvv_len || !card.cvv.chars().all(|c| c.is_ascii_digit()) {
        report.error(format!("CVV must be {cvv_len} digits"));
    }

    if !(1..=12).contains(&card.expiry_month) {
        report.error("expiry month must be between 1 and 12");
    } else {
        let expiry = (card.full_expiry_year(), card.expiry_month);
        if expiry < (today.year(), today.month()) {
            report.error("card has expired");
        }
    }

    if card.holder_name.trim().is_empty() {
        report.error("cardholder name is required");
    }
}

fn validate_bank_transfer(account: &BankAccount, report: &mut ValidationReport) {
    let number = account.account_number.trim();
    if !(9..=18).contains(&number.len()) || !number.chars().all(|c| c.is_ascii_digit()) {
        report.error("account number must be 9 to 18 digits");
    }
    if !is_valid_ifsc(&account.ifsc) {
        report.error("IFSC code is invalid");
    }
    if account.holder_name.trim().is_empty() {
        report.error("account holder name is required");
    }
}

/// Luhn (mod 10) checksum over a string of ASCII digits.
///
/// Returns false for empty input or any non-digit character.
#[must_use]
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0u32;
    for (idx, c) in digits.chars().rev().enumerate() {
        let Some(mut d) = c.to_digit(10) else {
            return false;
        };
        if idx % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}

/// Detect the card network from the issuer identification prefix.
#[must_use]
pub fn detect_card_network(digits: &str) -> Option<CardNetwork> {
    let prefix = |n: usize| digits.get(..n).and_then(|p| p.parse::<u32>().ok());

    if digits.starts_with('4') {
        return Some(CardNetwork::Visa);
    }
    if digits.starts_with('5') || prefix(4).is_some_and(|p| (2221..=2720).contains(&p)) {
        return Some(CardNetwork::Mastercard);
    }
    if matches!(prefix(2), Some(34 | 37)) {
        return Some(CardNetwork::Amex);
    }
    if prefix(4) == Some(6011)
        || prefix(2) == Some(65)
        || prefix(3).is_some_and(|p| (644..=649).contains(&p))
    {
        return Some(CardNetwork::Discover);
    }
    if matches!(prefix(2), Some(30 | 36 | 38)) {
        return Some(CardNetwork::Diners);
    }
    if prefix(2) == Some(35) {
        return Some(CardNetwork::Jcb);
    }
    if matches!(prefix(2), Some(60 | 81 | 82)) {
        return Some(CardNetwork::Rupay);
    }
    None
}

/// Mask a card number down to its last four digits, `****-****-****-1234`.
///
/// Numbers shorter than six characters are masked entirely.
#[must_use]
pub fn mask_card_number(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() < 6 {
        return format!("{MASK_PREFIX}****");
    }
    let last4: String = chars[chars.len() - 4..].iter().collect();
    format!("{MASK_PREFIX}{last4}")
}

/// UPI virtual payment address, `handle@provider`.
#[must_use]
pub fn is_valid_vpa(vpa: &str) -> bool {
    static VPA: OnceLock<Option<Regex>> = OnceLock::new();
    VPA.get_or_init(|| Regex::new(r"^[a-zA-Z0-9._-]{2,256}@[a-zA-Z][a-zA-Z0-9]{1,63}$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(vpa))
}

/// Indian Financial System Code: four bank letters, a zero, six branch characters.
#[must_use]
pub fn is_valid_ifsc(ifsc: &str) -> bool {
    static IFSC: OnceLock<Option<Regex>> = OnceLock::new();
    IFSC.get_or_init(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(ifsc))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;
    use crate::domain::payment_method::MethodKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn card(number: &str, cvv: &str, month: u32, year: i32) -> PaymentInstrument {
        PaymentInstrument::Card(CardDetails {
            number: number.to_string(),
            expiry_month: month,
            expiry_year: year,
            cvv: cvv.to_string(),
            holder_name: "Meera Nair".to_string(),
        })
    }

    fn check_digit(payload: &str) -> char {
        (0..=9u32)
            .map(|d| char::from_digit(d, 10).unwrap())
            .find(|d| luhn_check(&format!("{payload}{d}")))
            .unwrap()
    }

    #[test_case("4111111111111111", true ; "visa test number")]
    #[test_case("4111111111111112", false ; "bad check digit")]
    #[test_case("378282246310005", true ; "amex test number")]
    #[test_case("6011111111111117", true ; "discover test number")]
    #[test_case("", false ; "empty")]
    #[test_case("4111-1111", false ; "non digit")]
    fn luhn(number: &str, expected: bool) {
        assert_eq!(luhn_check(number), expected);
    }

    #[test_case("4111111111111111", Some(CardNetwork::Visa))]
    #[test_case("5555555555554444", Some(CardNetwork::Mastercard))]
    #[test_case("2223003122003222", Some(CardNetwork::Mastercard))]
    #[test_case("378282246310005", Some(CardNetwork::Amex))]
    #[test_case("6011111111111117", Some(CardNetwork::Discover))]
    #[test_case("6445644564456445", Some(CardNetwork::Discover))]
    #[test_case("30569309025904", Some(CardNetwork::Diners))]
    #[test_case("3530111333300000", Some(CardNetwork::Jcb))]
    #[test_case("6080000000000001", Some(CardNetwork::Rupay))]
    #[test_case("8200000000000000", Some(CardNetwork::Rupay))]
    #[test_case("9999999999999999", None)]
    fn network_detection(number: &str, expected: Option<CardNetwork>) {
        assert_eq!(detect_card_network(number), expected);
    }

    #[test_case("4111111111111111", "****-****-****-1111")]
    #[test_case("4111 1111 1111 1234", "****-****-****-1234")]
    #[test_case("12345", "****-****-****-****")]
    fn masking(number: &str, expected: &str) {
        assert_eq!(mask_card_number(number), expected);
    }

    #[test]
    fn valid_visa() {
        let report = validate_instrument(&card("4111111111111111", "123", 12, 2027), today());
        assert!(report.is_valid(), "{:?}", report.errors);
        assert_eq!(report.card_network, Some(CardNetwork::Visa));
        assert_eq!(report.masked_number.as_deref(), Some("****-****-****-1111"));
    }

    #[test]
    fn amex_needs_four_digit_cvv() {
        let report = validate_instrument(&card("378282246310005", "123", 12, 2027), today());
        assert_eq!(report.errors, vec!["CVV must be 4 digits".to_string()]);
        let report = validate_instrument(&card("378282246310005", "1234", 12, 2027), today());
        assert!(report.is_valid());
    }

    #[test]
    fn expiry_rules() {
        // current month is still valid
        assert!(validate_instrument(&card("4111111111111111", "123", 6, 25), today()).is_valid());

        let expired = validate_instrument(&card("4111111111111111", "123", 5, 2025), today());
        assert_eq!(expired.errors, vec!["card has expired".to_string()]);

        let bad_month = validate_instrument(&card("4111111111111111", "123", 13, 2030), today());
        assert_eq!(
            bad_month.errors,
            vec!["expiry month must be between 1 and 12".to_string()]
        );
    }

    #[test]
    fn collects_every_error() {
        let report = validate_instrument(&card("4111111111111112", "12", 0, 2020), today());
        assert_eq!(report.errors.len(), 3);
        assert!(report.card_network.is_none());
        assert_eq!(report.masked_number.as_deref(), Some("****-****-****-1112"));
    }

    #[test_case("alice@okhdfc", true)]
    #[test_case("a.b-c_9@upi", true)]
    #[test_case("alice", false)]
    #[test_case("a@b", false)]
    #[test_case("alice@ok hdfc", false)]
    fn vpa(vpa: &str, expected: bool) {
        assert_eq!(is_valid_vpa(vpa), expected);
    }

    #[test_case("HDFC0001234", true)]
    #[test_case("SBIN0ABC123", true)]
    #[test_case("HDFC1001234", false ; "fifth char must be zero")]
    #[test_case("hdfc0001234", false ; "lowercase")]
    #[test_case("HDFC000123", false ; "too short")]
    fn ifsc(code: &str, expected: bool) {
        assert_eq!(is_valid_ifsc(code), expected);
    }

    #[test]
    fn bank_transfer_requirements() {
        let report = validate_instrument(
            &PaymentInstrument::BankTransfer(BankAccount {
                account_number: "12ab".to_string(),
                ifsc: "BAD".to_string(),
                holder_name: String::new(),
                bank_name: String::new(),
            }),
            today(),
        );
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn netbanking_only_needs_bank_name() {
        let account = BankAccount {
            account_number: String::new(),
            ifsc: String::new(),
            holder_name: String::new(),
            bank_name: "ICICI".to_string(),
        };
        assert!(validate_instrument(&PaymentInstrument::Netbanking(account), today()).is_valid());
    }

    #[test]
    fn wallet_and_saved() {
        let wallet = PaymentInstrument::Wallet {
            provider: "paytm".to_string(),
            wallet_id: String::new(),
        };
        assert_eq!(
            validate_instrument(&wallet, today()).errors,
            vec!["wallet id is required".to_string()]
        );

        let saved = PaymentInstrument::Saved {
            kind: MethodKind::Card,
            token: "tok_abc".to_string(),
        };
        assert!(validate_instrument(&saved, today()).is_valid());
    }

    proptest! {
        #[test]
        fn computed_check_digit_passes(payload in "[0-9]{12,18}") {
            let number = format!("{payload}{}", check_digit(&payload));
            prop_assert!(luhn_check(&number));
        }

        #[test]
        fn single_digit_change_is_detected(
            payload in "[0-9]{12,18}",
            pos in any::<prop::sample::Index>(),
            bump in 1u32..10,
        ) {
            let number = format!("{payload}{}", check_digit(&payload));
            let mut digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
            let idx = pos.index(digits.len());
            digits[idx] = (digits[idx] + bump) % 10;
            let altered: String = digits.iter().filter_map(|d| char::from_digit(*d, 10)).collect();
            prop_assert!(!luhn_check(&altered));
        }
    }
}
