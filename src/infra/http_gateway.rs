use crate::config::Config;
use crate::domain::models::booking::{BookedInterval, BookingRequest, Confirmation};
use crate::domain::models::interval::DateInterval;
use crate::domain::ports::BookingGateway;
use crate::error::EngineError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

pub struct HttpBookingGateway {
    client: Client,
    base_url: String,
}

impl HttpBookingGateway {
    pub fn new(config: &Config) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Booking range as the API serves it. Timestamps come back with a
/// time-of-day component; the engine works at day granularity.
#[derive(Deserialize)]
struct BookingRangeDto {
    #[serde(rename = "_id")]
    id: Option<String>,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookRoomPayload<'a> {
    room_id: &'a str,
    guest: GuestPayload<'a>,
    start_date: String,
    end_date: String,
    total_price: f64,
}

#[derive(Serialize)]
struct GuestPayload<'a> {
    name: &'a str,
    email: &'a str,
    photo: Option<&'a str>,
}

#[derive(Deserialize)]
struct BookRoomResponse {
    success: bool,
    message: Option<String>,
}

#[async_trait]
impl BookingGateway for HttpBookingGateway {
    async fn fetch_bookings(&self, room_id: &str) -> Result<Vec<BookedInterval>, EngineError> {
        let url = format!("{}/bookings/{}", self.base_url, room_id);

        let ranges: Vec<BookingRangeDto> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(room_id, count = ranges.len(), "fetched bookings");

        ranges
            .into_iter()
            .map(|dto| {
                Ok(BookedInterval {
                    booking_id: dto.id.unwrap_or_default(),
                    range: DateInterval::new(dto.from.date_naive(), dto.to.date_naive())?,
                })
            })
            .collect()
    }

    async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, EngineError> {
        let url = format!("{}/book-room/{}", self.base_url, request.room_id);

        let payload = BookRoomPayload {
            room_id: &request.room_id,
            guest: GuestPayload {
                name: &request.guest.name,
                email: &request.guest.email,
                photo: request.guest.photo.as_deref(),
            },
            start_date: request.stay.start().to_string(),
            end_date: request.stay.end().to_string(),
            total_price: request.total,
        };

        let res = self.client.post(&url).json(&payload).send().await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Booking service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(EngineError::Submission(msg));
        }

        let body: BookRoomResponse = res.json().await?;
        if !body.success {
            let msg = body.message.unwrap_or_else(|| "Booking failed".to_string());
            return Err(EngineError::Submission(msg));
        }

        info!(room_id = %request.room_id, request_id = %request.id, "booking confirmed");

        Ok(Confirmation {
            message: body
                .message
                .unwrap_or_else(|| "Room booked successfully".to_string()),
        })
    }
}
