//! Booking API Data Transfer Objects
//!
//! Request and response shapes of the remote booking and auth service.
//! Field names follow the service's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::seats::Seat;
use crate::tickets::TicketCount;

/// `GET` all seats booked by anyone
pub const ALL_SEATS_PATH: &str = "/api/bookings/allseats";
/// `POST` a new booking
pub const BOOK_PATH: &str = "/api/bookings/book";
/// `POST` a new account
pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// Default base URL of the booking service
pub const DEFAULT_BOOKING_URL: &str = "http://localhost:5000";

/// Client-side timeout for a booking request
pub const BOOK_TIMEOUT_MS: u64 = 15_000;

/// Backend error code reported when the booking transaction is busy
pub const BUSY_CODE: &str = "P2028";

/// `Authorization` value for the seat listing: the bare token
pub fn raw_authorization(token: &str) -> String {
    token.to_string()
}

/// `Authorization` value for booking: bearer scheme
pub fn bearer_authorization(token: &str) -> String {
    format!("Bearer {}", token)
}

// ============ Seats ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllSeatsResponse {
    pub success: bool,
    #[serde(default)]
    pub booked_seats: Vec<Seat>,
}

// ============ Booking ============

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub number_of_seats: TicketCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub success: bool,
    #[serde(default)]
    pub booking: Option<Booking>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default)]
    pub booked_seats: Vec<BookedSeat>,
}

/// Join record wrapping the seat that was reserved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedSeat {
    pub seat: Seat,
}

impl BookResponse {
    /// Seats reserved by this booking
    pub fn seats(&self) -> Vec<Seat> {
        self.booking
            .as_ref()
            .map(|b| b.booked_seats.iter().map(|bs| bs.seat.clone()).collect())
            .unwrap_or_default()
    }
}

// ============ Auth ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    /// All three fields are required
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// ============ Errors ============

/// Body of a failed response, as far as the front-end cares
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
