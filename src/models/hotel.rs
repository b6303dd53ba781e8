use serde::{Deserialize, Serialize};

/// Room categories offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "SINGLE")]
    Single,
    #[serde(rename = "DOUBLE")]
    Double,
    #[serde(rename = "SUITE")]
    Suite,
}

impl RoomType {
    /// Get the display title for this room type.
    pub fn title(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    /// Id of the hotel this room belongs to.
    pub hotel: i64,
    pub room_number: String,
    pub room_type: RoomType,
    /// Decimal amount, serialized as a string by the backend.
    pub price_per_night: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub image: Option<String>,
    /// Decimal rating, serialized as a string by the backend.
    pub rating: String,
    /// Embedded read-only on hotel detail/list responses.
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// Payload for creating or updating a hotel (admin only).
#[derive(Debug, Clone, Serialize)]
pub struct NewHotel {
    pub name: String,
    pub description: String,
    pub address: String,
    pub image: Option<String>,
    pub rating: String,
}

/// Payload for creating or updating a room (admin only).
#[derive(Debug, Clone, Serialize)]
pub struct NewRoom {
    pub hotel: i64,
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: String,
    pub capacity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hotel_with_rooms() {
        let json = r#"{
            "id": 3,
            "name": "Harbor View",
            "description": "Rooms over the marina",
            "address": "1 Quay St",
            "image": null,
            "rating": "4.5",
            "rooms": [
                {"id": 10, "hotel": 3, "room_number": "101", "room_type": "SINGLE", "price_per_night": "89.00", "capacity": 1},
                {"id": 11, "hotel": 3, "room_number": "210", "room_type": "SUITE", "price_per_night": "240.00", "capacity": 4}
            ]
        }"#;

        let hotel: Hotel = serde_json::from_str(json).expect("Failed to parse hotel JSON");
        assert_eq!(hotel.name, "Harbor View");
        assert_eq!(hotel.rating, "4.5");
        assert_eq!(hotel.rooms.len(), 2);
        assert_eq!(hotel.rooms[1].room_type, RoomType::Suite);
        assert_eq!(hotel.rooms[1].room_type.title(), "Suite");
    }

    #[test]
    fn test_parse_hotel_without_rooms_field() {
        // List endpoints may omit rooms entirely
        let json = r#"{"id": 1, "name": "Plain Inn", "description": "", "address": "2 Main St", "image": "https://img.example.com/inn.jpg", "rating": "0.0"}"#;
        let hotel: Hotel = serde_json::from_str(json).expect("Failed to parse hotel JSON");
        assert!(hotel.rooms.is_empty());
        assert_eq!(hotel.image.as_deref(), Some("https://img.example.com/inn.jpg"));
    }

    #[test]
    fn test_room_type_roundtrips_backend_spelling() {
        let json = serde_json::to_string(&RoomType::Double).expect("serialize");
        assert_eq!(json, r#""DOUBLE""#);
    }
}
