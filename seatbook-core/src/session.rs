//! Booking Session State
//!
//! State behind the booking dashboard and the transitions that the views
//! drive as calls start and finish. Network calls happen elsewhere; this
//! type only records their outcome.

use crate::dto::{AllSeatsResponse, BookResponse};
use crate::messages::{booking_success, BookFailure, FetchFailure};
use crate::seats::{Seat, SeatMap, SeatRow};
use crate::tickets::TicketCount;

/// Dashboard state for one visit to the booking view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSession {
    pub ticket_count: TicketCount,
    /// Seats reserved by the last successful booking in this session
    pub booked_seats: Vec<Seat>,
    /// Seats reserved by anyone
    pub all_booked_seats: Vec<Seat>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub loading: bool,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of loading all booked seats
    pub fn seats_loaded(&mut self, result: Result<AllSeatsResponse, FetchFailure>) {
        match result {
            Ok(resp) => {
                if resp.success {
                    self.all_booked_seats = resp.booked_seats;
                    self.error = None;
                }
            }
            Err(failure) => {
                self.error = Some(failure.to_string());
                if failure.clears_seats() {
                    self.all_booked_seats.clear();
                }
            }
        }
    }

    /// Apply raw text from the ticket input
    pub fn set_ticket_input(&mut self, raw: &str) {
        self.ticket_count = self.ticket_count.apply_input(raw);
    }

    pub fn can_submit(&self) -> bool {
        let n = self.ticket_count.get();
        !self.loading && (TicketCount::MIN..=TicketCount::MAX).contains(&n)
    }

    /// Start a booking.
    ///
    /// Returns the count to submit, or `None` while a booking is already in
    /// flight.
    pub fn begin_booking(&mut self) -> Option<TicketCount> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.success = None;
        Some(self.ticket_count)
    }

    /// Record the outcome of a booking.
    ///
    /// Returns `true` when the caller should refresh the full seat list. In
    /// that case `loading` stays set until [`Self::refresh_finished`].
    pub fn booking_finished(
        &mut self,
        count: TicketCount,
        result: Result<BookResponse, BookFailure>,
    ) -> bool {
        match result {
            Ok(resp) if !resp.success => {
                self.loading = false;
                false
            }
            Ok(resp) if resp.booking.is_some() => {
                let seats = resp.seats();
                self.all_booked_seats.extend(seats.iter().cloned());
                self.booked_seats = seats;
                self.success = Some(booking_success(count));
                true
            }
            // A success without a booking body is malformed
            Ok(_) => self.booking_failed(BookFailure::Unexpected),
            Err(failure) => self.booking_failed(failure),
        }
    }

    /// Record the seat refresh that follows a successful booking
    pub fn refresh_finished(&mut self, result: Result<AllSeatsResponse, FetchFailure>) {
        self.seats_loaded(result);
        self.loading = false;
    }

    fn booking_failed(&mut self, failure: BookFailure) -> bool {
        self.loading = false;
        self.error = Some(failure.to_string());
        if failure.clears_seats() {
            self.booked_seats.clear();
        }
        false
    }

    /// Grid for the current render
    pub fn grid(&self) -> Vec<SeatRow> {
        SeatMap::HALL.grid(&self.booked_seats, &self.all_booked_seats)
    }
}
