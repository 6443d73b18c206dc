//! Payment Methods
//!
//! Instruments a customer can pay with and the rules that decide whether an
//! instrument is usable: Luhn checksum, card network detection by IIN prefix,
//! CVV length, expiry, UPI VPA and IFSC formats.

mod instrument;
mod validation;

pub use instrument::{BankAccount, CardDetails, CardNetwork, MethodKind, PaymentInstrument};
pub use validation::{
    ValidationReport, detect_card_network, is_valid_ifsc, is_valid_vpa, luhn_check,
    mask_card_number, validate_instrument,
};
