#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use reservation_engine::domain::models::booking::{
    BookedInterval, BookingRequest, Confirmation, Guest,
};
use reservation_engine::domain::models::interval::DateInterval;
use reservation_engine::domain::models::room::{AvailabilityWindow, Room};
use reservation_engine::domain::ports::BookingGateway;
use reservation_engine::error::EngineError;
use std::sync::Mutex;

/// In-memory stand-in for the marketplace booking API. Accepted
/// submissions turn into bookings that block their dates on the next
/// fetch, which is what the real backend does.
pub struct MockGateway {
    pub bookings: Mutex<Vec<BookedInterval>>,
    pub submissions: Mutex<Vec<BookingRequest>>,
    pub reject_with: Mutex<Option<String>>,
}

impl MockGateway {
    pub fn new(bookings: Vec<BookedInterval>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
            submissions: Mutex::new(Vec::new()),
            reject_with: Mutex::new(None),
        }
    }

    /// Simulates another guest booking the room behind this session's back.
    pub fn add_booking(&self, booking: BookedInterval) {
        self.bookings.lock().unwrap().push(booking);
    }

    pub fn reject_next(&self, message: &str) {
        *self.reject_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn accept_again(&self) {
        *self.reject_with.lock().unwrap() = None;
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingGateway for MockGateway {
    async fn fetch_bookings(&self, _room_id: &str) -> Result<Vec<BookedInterval>, EngineError> {
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, EngineError> {
        if let Some(msg) = self.reject_with.lock().unwrap().clone() {
            return Err(EngineError::Submission(msg));
        }

        self.submissions.lock().unwrap().push(request.clone());
        self.bookings.lock().unwrap().push(BookedInterval {
            booking_id: request.id.to_string(),
            range: request.stay,
        });

        Ok(Confirmation {
            message: "Room booked successfully!".to_string(),
        })
    }
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn range(start: NaiveDate, end: NaiveDate) -> DateInterval {
    DateInterval::new(start, end).unwrap()
}

pub fn booked(id: &str, start: NaiveDate, end: NaiveDate) -> BookedInterval {
    BookedInterval {
        booking_id: id.to_string(),
        range: range(start, end),
    }
}

pub fn room(id: &str, price: f64, start: NaiveDate, end: NaiveDate) -> Room {
    Room {
        id: id.to_string(),
        price,
        availability: AvailabilityWindow::new(start, end).unwrap(),
    }
}

pub fn guest() -> Guest {
    Guest {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        photo: None,
    }
}
