use crate::domain::models::booking::{BookedInterval, BookingRequest, Confirmation};
use crate::error::EngineError;
use async_trait::async_trait;

/// Boundary to the marketplace's booking API. Fetched bookings are treated
/// as authoritative; the engine never re-validates their ownership or
/// status.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn fetch_bookings(&self, room_id: &str) -> Result<Vec<BookedInterval>, EngineError>;
    async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, EngineError>;
}
