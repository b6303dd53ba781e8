use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    /// Id of the booking user; assigned by the backend, never client-set.
    pub user: i64,
    pub room: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Payload for `POST reservations/`. The backend rejects overlapping stays
/// and check-in on or after check-out.
#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
    pub room: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reservation_response() {
        let json = r#"{
            "id": 42,
            "user": 7,
            "room": 11,
            "check_in": "2026-08-10",
            "check_out": "2026-08-13",
            "created_at": "2026-08-05T09:30:00Z"
        }"#;
        let reservation: Reservation =
            serde_json::from_str(json).expect("Failed to parse reservation JSON");
        assert_eq!(reservation.room, 11);
        assert_eq!(reservation.nights(), 3);
    }

    #[test]
    fn test_new_reservation_serializes_dates_as_iso() {
        let booking = NewReservation {
            room: 11,
            check_in: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 8, 13).unwrap(),
        };
        let json = serde_json::to_value(&booking).expect("serialize");
        assert_eq!(json["check_in"], "2026-08-10");
        assert_eq!(json["check_out"], "2026-08-13");
    }
}
