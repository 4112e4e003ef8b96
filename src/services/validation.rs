use crate::models::purchase::{CardInfo, PurchaseRequest};
use crate::utils::money::to_minor_units;

pub const SUPPORTED_CURRENCIES: [&str; 4] = ["CAD", "EUR", "GBP", "USD"];

pub const UNSUPPORTED_CURRENCY_MESSAGE: &str =
    "The specified currency is not supported by Netbanx at this time.";
pub const NEGATIVE_AMOUNT_MESSAGE: &str = "The purchase amount must not be negative.";
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "The purchase amount is too large.";

/// Case-sensitive: `usd` is rejected.
pub fn is_supported_currency(currency: &str) -> bool {
    SUPPORTED_CURRENCIES.contains(&currency)
}

fn required_card_fields(card: &CardInfo) -> [(&str, &'static str); 5] {
    [
        (card.name.as_str(), "Card name is required."),
        (card.number.as_str(), "Card number is required."),
        (card.exp_month.as_str(), "Card expiration month is required."),
        (card.exp_year.as_str(), "Card expiration year is required."),
        (card.cvc.as_str(), "Card CVC is required."),
    ]
}

/// Collects every problem with the request; empty when it may be sent.
pub fn validate_purchase(request: &PurchaseRequest) -> Vec<String> {
    let mut errors: Vec<String> = required_card_fields(&request.card_info)
        .into_iter()
        .filter(|(value, _)| value.trim().is_empty())
        .map(|(_, message)| message.to_string())
        .collect();

    if !is_supported_currency(&request.currency) {
        errors.push(UNSUPPORTED_CURRENCY_MESSAGE.to_string());
    }

    if request.price.is_sign_negative() && !request.price.is_zero() {
        errors.push(NEGATIVE_AMOUNT_MESSAGE.to_string());
    } else if to_minor_units(request.price).is_none() {
        errors.push(AMOUNT_TOO_LARGE_MESSAGE.to_string());
    }

    errors
}
