use crate::domain::models::interval::DateInterval;
use crate::error::EngineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The host-declared window a room is listed for. Read-only input to the
/// engine; both endpoints are bookable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WindowWire", into = "WindowWire")]
pub struct AvailabilityWindow {
    span: DateInterval,
}

impl AvailabilityWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        Ok(Self {
            span: DateInterval::new(start, end)?,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.span.start()
    }

    pub fn end(&self) -> NaiveDate {
        self.span.end()
    }

    pub fn span(&self) -> &DateInterval {
        &self.span
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.span.days()
    }

    pub fn encloses(&self, range: &DateInterval) -> bool {
        self.span.start() <= range.start() && range.end() <= self.span.end()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WindowWire {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<WindowWire> for AvailabilityWindow {
    type Error = EngineError;

    fn try_from(wire: WindowWire) -> Result<Self, Self::Error> {
        AvailabilityWindow::new(wire.start_date, wire.end_date)
    }
}

impl From<AvailabilityWindow> for WindowWire {
    fn from(window: AvailabilityWindow) -> Self {
        Self {
            start_date: window.start(),
            end_date: window.end(),
        }
    }
}

/// The slice of a room record the engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: String,
    /// Nightly rate. Non-negative; enforced by the service that owns room
    /// records.
    pub price: f64,
    pub availability: AvailabilityWindow,
}
