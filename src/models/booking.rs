use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Статус брони. Единственный допустимый переход - в Cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Fulfilled,
    Cancelled,
}

// Неизменяемый снимок подтвержденного бронирования
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub movie_id: i64,
    pub movie_title: String,
    pub movie_poster: Option<String>,
    pub theater: String,
    pub theater_location: String,
    pub date: NaiveDate,
    pub time: String,
    pub seats: Vec<String>,
    pub people_count: usize,
    pub total_price: i64,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

// Результат мастера бронирования: все поля брони, кроме тех,
// которые проставляет хранилище при записи (id, статус, время создания)
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub movie_id: i64,
    pub movie_title: String,
    pub movie_poster: Option<String>,
    pub theater: String,
    pub theater_location: String,
    pub date: NaiveDate,
    pub time: String,
    pub seats: Vec<String>,
    pub people_count: usize,
    pub total_price: i64,
}
