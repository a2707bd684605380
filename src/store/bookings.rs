use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::BookingError;
use crate::models::{Booking, BookingDraft, BookingStatus};
use crate::storage::LocalStorage;

// Ключ снапшота в локальном хранилище
const STORAGE_KEY: &str = "booking-storage";

// Контейнер состояния бронирований. Передается явно, не синглтон.
// Записи никогда не удаляются - отмена только меняет статус.
pub struct BookingStore {
    storage: LocalStorage,
    bookings: Vec<Booking>,
}

impl BookingStore {
    // Поднять список бронирований из снапшота; битый снапшот не фатален
    pub fn load(storage: LocalStorage) -> Self {
        let bookings = match storage.get::<Vec<Booking>>(STORAGE_KEY) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Booking snapshot unreadable, starting empty: {}", e);
                Vec::new()
            }
        };
        BookingStore { storage, bookings }
    }

    /// Записывает подтвержденное бронирование: проставляет идентификатор,
    /// статус и время создания, затем добавляет запись в начало списка.
    pub fn add(&mut self, draft: BookingDraft) -> &Booking {
        let booking = Booking {
            id: format!("booking-{}", Uuid::new_v4()),
            movie_id: draft.movie_id,
            movie_title: draft.movie_title,
            movie_poster: draft.movie_poster,
            theater: draft.theater,
            theater_location: draft.theater_location,
            date: draft.date,
            time: draft.time,
            seats: draft.seats,
            people_count: draft.people_count,
            total_price: draft.total_price,
            status: BookingStatus::Confirmed,
            booked_at: Utc::now(),
        };

        info!(
            "Booking {} confirmed: '{}', {} seats",
            booking.id,
            booking.movie_title,
            booking.seats.len()
        );

        // Новые брони добавляются в начало списка
        self.bookings.insert(0, booking);
        self.persist();
        &self.bookings[0]
    }

    /// Отменяет бронирование по идентификатору.
    /// Повторная отмена уже отмененной брони - no-op, не ошибка.
    pub fn cancel(&mut self, booking_id: &str) -> Result<(), BookingError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or(BookingError::BookingNotFound)?;

        if booking.status == BookingStatus::Cancelled {
            return Ok(());
        }

        booking.status = BookingStatus::Cancelled;
        info!("Booking {} cancelled", booking_id);
        self.persist();
        Ok(())
    }

    pub fn booking_by_id(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    // Все бронирования, новые первыми
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    // Количество просмотренных фильмов (для статистики профиля)
    pub fn watched_count(&self) -> usize {
        self.bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Fulfilled)
            .count()
    }

    fn persist(&self) {
        // Долговечность делегирована хранилищу: при сбое записи
        // состояние в памяти остается актуальным
        if let Err(e) = self.storage.set(STORAGE_KEY, &self.bookings) {
            error!("Failed to persist bookings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn temp_storage() -> LocalStorage {
        let dir = std::env::temp_dir().join(format!("moviebox-bookings-{}", Uuid::new_v4()));
        LocalStorage::new(dir).unwrap()
    }

    fn draft(title: &str) -> BookingDraft {
        BookingDraft {
            movie_id: 550,
            movie_title: title.to_string(),
            movie_poster: Some("/fc.jpg".to_string()),
            theater: "CGV Gangnam".to_string(),
            theater_location: "Seoul, Gangnam-gu".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            time: "20:00".to_string(),
            seats: vec!["A1".to_string(), "A2".to_string()],
            people_count: 2,
            total_price: 24000,
        }
    }

    #[test]
    fn add_prepends_a_confirmed_record() {
        let mut store = BookingStore::load(temp_storage());
        store.add(draft("First"));
        let before = store.bookings().len();

        let id = store.add(draft("Second")).id.clone();

        assert_eq!(store.bookings().len(), before + 1);
        let newest = &store.bookings()[0];
        assert_eq!(newest.id, id);
        assert_eq!(newest.movie_title, "Second");
        assert_eq!(newest.status, BookingStatus::Confirmed);
        assert_eq!(newest.total_price, 24000);
    }

    #[test]
    fn booking_ids_are_unique() {
        let mut store = BookingStore::load(temp_storage());
        let first = store.add(draft("A")).id.clone();
        let second = store.add(draft("B")).id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn cancel_marks_but_never_deletes() {
        let mut store = BookingStore::load(temp_storage());
        let id = store.add(draft("Film")).id.clone();

        store.cancel(&id).unwrap();

        assert_eq!(store.bookings().len(), 1);
        assert_eq!(
            store.booking_by_id(&id).unwrap().status,
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn cancelling_twice_is_a_noop() {
        let mut store = BookingStore::load(temp_storage());
        let id = store.add(draft("Film")).id.clone();

        store.cancel(&id).unwrap();
        store.cancel(&id).unwrap();

        assert_eq!(
            store.booking_by_id(&id).unwrap().status,
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn cancelling_unknown_id_reports_not_found() {
        let mut store = BookingStore::load(temp_storage());
        let result = store.cancel("booking-missing");
        assert_eq!(result, Err(BookingError::BookingNotFound));
    }

    #[test]
    fn cancellation_changes_no_other_field() {
        let mut store = BookingStore::load(temp_storage());
        let original = store.add(draft("Film")).clone();

        store.cancel(&original.id).unwrap();

        let cancelled = store.booking_by_id(&original.id).unwrap();
        assert_eq!(cancelled.seats, original.seats);
        assert_eq!(cancelled.total_price, original.total_price);
        assert_eq!(cancelled.booked_at, original.booked_at);
    }

    #[test]
    fn bookings_survive_a_reload() {
        let storage = temp_storage();
        let id = {
            let mut store = BookingStore::load(storage.clone());
            store.add(draft("Persisted")).id.clone()
        };

        let reloaded = BookingStore::load(storage);
        assert_eq!(reloaded.bookings().len(), 1);
        assert_eq!(reloaded.booking_by_id(&id).unwrap().movie_title, "Persisted");
    }

    #[test]
    fn watched_count_only_counts_fulfilled() {
        let mut store = BookingStore::load(temp_storage());
        store.add(draft("Film"));
        assert_eq!(store.watched_count(), 0);
    }
}
