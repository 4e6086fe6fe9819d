//! # Seatbook Core
//!
//! Domain types shared by the Seatbook browser front-end and the native
//! tools. Nothing in here performs I/O, so the same code drives the Leptos
//! views and the terminal client.
//!
//! ## Modules
//!
//! - [`seats`]: The fixed hall layout and per-seat status
//! - [`tickets`]: Ticket count input handling (clamped to 1..=7)
//! - [`landing`]: Landing page copy and links
//! - [`dto`]: Request/response shapes of the booking and auth API
//! - [`messages`]: Failure classification and user-facing strings
//! - [`session`]: Booking dashboard state and its transitions

pub mod dto;
pub mod landing;
pub mod messages;
pub mod seats;
pub mod session;
pub mod tickets;

pub use dto::{
    AllSeatsResponse, ApiErrorBody, BookRequest, BookResponse, BookedSeat, Booking,
    SignupRequest, SignupResponse,
};
pub use messages::{BookFailure, FetchFailure, SignupFailure};
pub use seats::{Seat, SeatId, SeatMap, SeatStatus};
pub use session::BookingSession;
pub use tickets::{InvalidTicketCount, TicketCount};
