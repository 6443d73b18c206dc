//! Payment instruments.

use std::fmt;

/// Kind of payment instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// Credit or debit card.
    Card,
    /// Unified Payments Interface.
    Upi,
    /// Bank netbanking redirect.
    Netbanking,
    /// Third-party wallet.
    Wallet,
    /// Direct bank transfer.
    BankTransfer,
}

impl MethodKind {
    /// Lowercase label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Netbanking => "netbanking",
            Self::Wallet => "wallet",
            Self::BankTransfer => "bank_transfer",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card network, detected from the card number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    /// Visa.
    Visa,
    /// Mastercard.
    Mastercard,
    /// American Express.
    Amex,
    /// RuPay.
    Rupay,
    /// Diners Club.
    Diners,
    /// Discover.
    Discover,
    /// JCB.
    Jcb,
}

impl CardNetwork {
    /// Number of digits in a valid CVV for this network.
    #[must_use]
    pub const fn cvv_length(self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Rupay => "rupay",
            Self::Diners => "diners",
            Self::Discover => "discover",
            Self::Jcb => "jcb",
        }
    }
}

/// Card data as submitted by the client.
#[derive(Clone, PartialEq, Eq)]
pub struct CardDetails {
    /// Primary account number; spaces and dashes are tolerated.
    pub number: String,
    /// Expiry month, 1-12.
    pub expiry_month: u32,
    /// Expiry year; two-digit years are read as 20YY.
    pub expiry_year: i32,
    /// Card verification value.
    pub cvv: String,
    /// Name printed on the card.
    pub holder_name: String,
}

impl CardDetails {
    /// The number with separators removed.
    #[must_use]
    pub fn digits(&self) -> String {
        self.number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect()
    }

    /// Last four digits, if the number has at least four characters.
    #[must_use]
    pub fn last4(&self) -> Option<String> {
        last_four(&self.digits())
    }

    /// Four-digit expiry year.
    #[must_use]
    pub const fn full_expiry_year(&self) -> i32 {
        if self.expiry_year < 100 {
            2000 + self.expiry_year
        } else {
            self.expiry_year
        }
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &"[REDACTED]")
            .field("last4", &self.last4())
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("cvv", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Bank account used for netbanking or transfers.
#[derive(Clone, PartialEq, Eq)]
pub struct BankAccount {
    /// Account number.
    pub account_number: String,
    /// Indian Financial System Code of the branch.
    pub ifsc: String,
    /// Name on the account.
    pub holder_name: String,
    /// Bank display name.
    pub bank_name: String,
}

impl BankAccount {
    /// Last four characters of the account number.
    #[must_use]
    pub fn last4(&self) -> Option<String> {
        last_four(self.account_number.trim())
    }
}

impl fmt::Debug for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankAccount")
            .field("account_number", &"[REDACTED]")
            .field("ifsc", &self.ifsc)
            .field("bank_name", &self.bank_name)
            .finish_non_exhaustive()
    }
}

fn last_four(value: &str) -> Option<String> {
    value
        .char_indices()
        .rev()
        .nth(3)
        .map(|(idx, _)| value[idx..].to_string())
}

/// A concrete way to pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentInstrument {
    /// Card payment.
    Card(CardDetails),
    /// UPI collect against a virtual payment address.
    Upi {
        /// Virtual payment address, `handle@bank`.
        vpa: String,
    },
    /// Netbanking redirect to the customer's bank.
    Netbanking(BankAccount),
    /// Wallet debit.
    Wallet {
        /// Wallet provider name.
        provider: String,
        /// Customer's wallet identifier.
        wallet_id: String,
    },
    /// Bank transfer.
    BankTransfer(BankAccount),
    /// Previously tokenised instrument.
    Saved {
        /// Kind of the underlying instrument.
        kind: MethodKind,
        /// Gateway token.
        token: String,
    },
}

impl PaymentInstrument {
    /// Kind of this instrument.
    #[must_use]
    pub const fn kind(&self) -> MethodKind {
        match self {
            Self::Card(_) => MethodKind::Card,
            Self::Upi { .. } => MethodKind::Upi,
            Self::Netbanking(_) => MethodKind::Netbanking,
            Self::Wallet { .. } => MethodKind::Wallet,
            Self::BankTransfer(_) => MethodKind::BankTransfer,
            Self::Saved { kind, .. } => *kind,
        }
    }

    /// Last four digits for cards and bank accounts.
    #[must_use]
    pub fn last4(&self) -> Option<String> {
        match self {
            Self::Card(card) => card.last4(),
            Self::Netbanking(account) | Self::BankTransfer(account) => account.last4(),
            _ => None,
        }
    }

    /// Card network for card instruments.
    #[must_use]
    pub fn card_network(&self) -> Option<CardNetwork> {
        match self {
            Self::Card(card) => super::detect_card_network(&card.digits()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str) -> CardDetails {
        CardDetails {
            number: number.to_string(),
            expiry_month: 1,
            expiry_year: 30,
            cvv: "123".to_string(),
            holder_name: "R. Iyer".to_string(),
        }
    }

    #[test]
    fn digits_strip_separators() {
        assert_eq!(card("4111 1111-1111 1111").digits(), "4111111111111111");
        assert_eq!(card("4111 1111 1111 1234").last4().as_deref(), Some("1234"));
        assert_eq!(card("12").last4(), None);
    }

    #[test]
    fn two_digit_year_is_this_century() {
        assert_eq!(card("4111").full_expiry_year(), 2030);
    }

    #[test]
    fn debug_redacts_sensitive_fields() {
        let debug = format!("{:?}", PaymentInstrument::Card(card("4111111111111111")));
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123\""));
        assert!(debug.contains("[REDACTED]"));

        let account = BankAccount {
            account_number: "001234567890".to_string(),
            ifsc: "HDFC0001234".to_string(),
            holder_name: "R. Iyer".to_string(),
            bank_name: "HDFC".to_string(),
        };
        assert!(!format!("{account:?}").contains("001234567890"));
        assert_eq!(account.last4().as_deref(), Some("7890"));
    }

    #[test]
    fn saved_instrument_reports_its_kind() {
        let saved = PaymentInstrument::Saved {
            kind: MethodKind::Upi,
            token: "tok_1".to_string(),
        };
        assert_eq!(saved.kind(), MethodKind::Upi);
        assert_eq!(saved.last4(), None);
    }
}
