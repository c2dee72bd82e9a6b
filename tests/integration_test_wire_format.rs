mod common;

use common::{d, guest, range};
use reservation_engine::domain::models::booking::BookingRequest;
use reservation_engine::domain::models::room::Room;
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_room_deserializes_from_api_shape() {
    let room: Room = serde_json::from_value(json!({
        "_id": "room-1",
        "price": 120.0,
        "availability": {
            "startDate": "2024-01-01",
            "endDate": "2024-01-31"
        }
    }))
    .unwrap();

    assert_eq!(room.id, "room-1");
    assert_eq!(room.price, 120.0);
    assert_eq!(room.availability.start(), d(2024, 1, 1));
    assert_eq!(room.availability.end(), d(2024, 1, 31));
}

#[test]
fn test_reversed_availability_window_fails_to_deserialize() {
    let result: Result<Room, _> = serde_json::from_value(json!({
        "_id": "room-1",
        "price": 120.0,
        "availability": {
            "startDate": "2024-01-31",
            "endDate": "2024-01-01"
        }
    }));

    assert!(result.is_err());
}

#[test]
fn test_room_round_trips_window_field_names() {
    let room: Room = serde_json::from_value(json!({
        "_id": "room-1",
        "price": 99.5,
        "availability": { "startDate": "2024-03-01", "endDate": "2024-03-10" }
    }))
    .unwrap();

    let value = serde_json::to_value(&room).unwrap();
    assert_eq!(value["_id"], "room-1");
    assert_eq!(value["availability"]["startDate"], "2024-03-01");
    assert_eq!(value["availability"]["endDate"], "2024-03-10");
}

#[test]
fn test_booking_request_serializes_stay_and_guest() {
    let request = BookingRequest {
        id: Uuid::new_v4(),
        room_id: "room-1".to_string(),
        guest: guest(),
        stay: range(d(2024, 1, 5), d(2024, 1, 8)),
        total: 300.0,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["room_id"], "room-1");
    assert_eq!(value["guest"]["email"], "alice@example.com");
    assert_eq!(value["stay"]["start"], "2024-01-05");
    assert_eq!(value["stay"]["end"], "2024-01-08");
    assert_eq!(value["total"], 300.0);
}
