//! Translation of Netbanx error numbers into customer-facing text.

use std::sync::Arc;

use crate::models::netbanx::ApiError;
use crate::models::outcome::API_UNAVAILABLE_MESSAGE;

/// Post-processing applied to every decline reason after the table lookup.
pub type ErrorMessageFilter = Arc<dyn Fn(String, &ApiError) -> String + Send + Sync>;

/// Canonical text for a known error number.
pub fn reason_for_code(code: &str) -> Option<&'static str> {
    let reason = match code {
        "1000" | "1002" | "1003" | "1007" => "An internal error occurred.",
        "5010" => "The submitted country code is invalid.",
        "5016" => "The account you provided cannot be found.",
        "5017" => "The account you provided is disabled.",
        "5023" => "The request is not parseable.",
        "5042" | "5068" => "Incomplete data was passed to Netbanx.",
        "5269" => "The merchant ID is invalid.",
        "5270" => "The specified API credentials are invalid.",
        "5271" | "5272" => "Requested response format not supported.",
        "5273" => "Invalid API URL specified.",
        "5375" => "The authentication credentials provided have expired.",
        "5276" => "The authentication credentials provided have been disabled.",
        "5277" => "The authentication credentials provided have been locked out.",
        "5278" | "5279" | "5280" => "The authentication credentials provided were not accepted.",
        "3002" | "3017" => "Invalid card number.",
        "3004" => "Postal code is required.",
        "3005" | "3019" => "Invalid CVV value.",
        "3006" | "3012" => "Credit card has expired.",
        "3007" => "AVS check failed.",
        "3008" => "The merchant account is not configured for this card type.",
        "3009" | "3011" | "3013" | "3014" | "3015" | "3016" | "3018" | "3020" | "3022"
        | "3023" | "3024" | "3029" | "3030" | "3032" => "Transaction declined.",
        "3021" => "Confirmation number could not be found.",
        "3025" => "Processing gateway reported invalid data.",
        "3026" => "Account type is invalid.",
        "3027" => "Processing gateway reported your account limit has been exceeded.",
        "3028" => "Processing gateway reported a system error.",
        "3031" => "The requested transaction is not on hold.",
        _ => return None,
    };
    Some(reason)
}

/// Reason for a processor error. Unknown codes fall back to the
/// processor's own message, untouched.
pub fn describe_error(error: &ApiError) -> String {
    error
        .number()
        .as_deref()
        .and_then(reason_for_code)
        .map(str::to_string)
        .or_else(|| error.message.clone().filter(|m| !m.is_empty()))
        .unwrap_or_else(|| API_UNAVAILABLE_MESSAGE.to_string())
}
