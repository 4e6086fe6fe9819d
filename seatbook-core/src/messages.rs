//! User-Facing Failure Messages
//!
//! Every failed call ends the user action with one fixed string. The
//! failure enums here classify what went wrong and render that string
//! through `Display`.

use thiserror::Error;

use crate::dto::{ApiErrorBody, BUSY_CODE};
use crate::tickets::TicketCount;

const BOOK_FAILED: &str = "Failed to book seats. Please try again.";
const SIGNUP_FAILED: &str = "Signup failed";

pub const SIGNUP_SUCCESS: &str = "Account created successfully!";

/// Success text after a booking went through
pub fn booking_success(count: TicketCount) -> String {
    format!("Successfully booked {} seat(s)!", count)
}

/// Why loading the booked seats failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("Please login to view booked seats.")]
    MissingToken,

    #[error("Please login to view booked seats.")]
    Unauthorized,

    #[error("Session expired. Please login again.")]
    Forbidden,

    #[error("Server error. Please try again later.")]
    Server,

    /// Any other status, network error or unreadable body
    #[error("Failed to load booked seats. Please try again.")]
    Other,
}

impl FetchFailure {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => FetchFailure::Unauthorized,
            403 => FetchFailure::Forbidden,
            500 => FetchFailure::Server,
            _ => FetchFailure::Other,
        }
    }

    /// A missing token never reached the server, so the list stays as is
    pub fn clears_seats(&self) -> bool {
        !matches!(self, FetchFailure::MissingToken)
    }
}

/// Why a booking failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookFailure {
    #[error("Please login to book seats.")]
    MissingToken,

    /// 400 with the busy-transaction code
    #[error("The booking system is currently busy. Please try again in a moment.")]
    Busy,

    /// 400 for any other reason; shows the server's message when it sent one
    #[error("{}", .message.as_deref().unwrap_or(BOOK_FAILED))]
    Rejected { message: Option<String> },

    #[error("Please login again to book seats.")]
    Unauthorized,

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("An unexpected error occurred. Please try again.")]
    Unexpected,
}

impl BookFailure {
    /// Classify a non-success response
    pub fn from_response(status: u16, body: Option<ApiErrorBody>) -> Self {
        match status {
            400 => {
                let body = body.unwrap_or_default();
                if body.code.as_deref() == Some(BUSY_CODE) {
                    BookFailure::Busy
                } else {
                    BookFailure::Rejected {
                        message: body.message.filter(|m| !m.is_empty()),
                    }
                }
            }
            401 => BookFailure::Unauthorized,
            _ => BookFailure::Unexpected,
        }
    }

    pub fn clears_seats(&self) -> bool {
        !matches!(self, BookFailure::MissingToken)
    }
}

/// Why a signup failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupFailure {
    #[error("{}", .0.as_deref().unwrap_or(SIGNUP_FAILED))]
    Rejected(Option<String>),

    /// Network error or a body that was not JSON
    #[error("Something went wrong. Please try again.")]
    Unreachable,
}

impl SignupFailure {
    pub fn rejected(body: Option<ApiErrorBody>) -> Self {
        SignupFailure::Rejected(body.and_then(|b| b.message).filter(|m| !m.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: Option<&str>, code: Option<&str>) -> Option<ApiErrorBody> {
        Some(ApiErrorBody {
            message: message.map(String::from),
            code: code.map(String::from),
        })
    }

    #[test]
    fn test_fetch_status_table() {
        assert_eq!(
            FetchFailure::from_status(500).to_string(),
            "Server error. Please try again later."
        );
        assert_eq!(
            FetchFailure::from_status(403).to_string(),
            "Session expired. Please login again."
        );
        assert_eq!(
            FetchFailure::from_status(401).to_string(),
            "Please login to view booked seats."
        );
        assert_eq!(
            FetchFailure::from_status(502).to_string(),
            "Failed to load booked seats. Please try again."
        );
        assert!(FetchFailure::Server.clears_seats());
        assert!(!FetchFailure::MissingToken.clears_seats());
    }

    #[test]
    fn test_book_busy_code() {
        let failure = BookFailure::from_response(400, body(Some("tx"), Some("P2028")));
        assert_eq!(failure, BookFailure::Busy);
        assert_eq!(
            failure.to_string(),
            "The booking system is currently busy. Please try again in a moment."
        );
    }

    #[test]
    fn test_book_rejected_uses_server_message() {
        let failure = BookFailure::from_response(400, body(Some("Not enough seats available"), None));
        assert_eq!(failure.to_string(), "Not enough seats available");

        let failure = BookFailure::from_response(400, None);
        assert_eq!(failure.to_string(), "Failed to book seats. Please try again.");

        let failure = BookFailure::from_response(400, body(Some(""), Some("P2002")));
        assert_eq!(failure.to_string(), "Failed to book seats. Please try again.");
    }

    #[test]
    fn test_book_other_statuses() {
        assert_eq!(
            BookFailure::from_response(401, None).to_string(),
            "Please login again to book seats."
        );
        assert_eq!(BookFailure::from_response(403, None), BookFailure::Unexpected);
        assert_eq!(BookFailure::from_response(500, None), BookFailure::Unexpected);
        assert_eq!(
            BookFailure::Timeout.to_string(),
            "Request timed out. Please try again."
        );
        assert!(!BookFailure::MissingToken.clears_seats());
        assert!(BookFailure::Timeout.clears_seats());
    }

    #[test]
    fn test_signup_messages() {
        assert_eq!(
            SignupFailure::rejected(body(Some("Email already in use"), None)).to_string(),
            "Email already in use"
        );
        assert_eq!(SignupFailure::rejected(None).to_string(), "Signup failed");
        assert_eq!(
            SignupFailure::Unreachable.to_string(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn test_booking_success_text() {
        assert_eq!(
            booking_success(TicketCount::clamped(4)),
            "Successfully booked 4 seat(s)!"
        );
    }
}
