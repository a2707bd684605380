//! Сквозной сценарий: мастер бронирования от выбора сеанса до записи
//! брони в хранилище и ее отмены.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use moviebox::config::BookingConfig;
use moviebox::error::BookingError;
use moviebox::models::BookingStatus;
use moviebox::services::wizard::{BookingWizard, MovieSummary, WizardStep};
use moviebox::storage::LocalStorage;
use moviebox::store::BookingStore;

fn temp_storage() -> LocalStorage {
    let dir = std::env::temp_dir().join(format!("moviebox-flow-{}", Uuid::new_v4()));
    LocalStorage::new(dir).unwrap()
}

fn open_wizard() -> BookingWizard {
    let config = BookingConfig {
        availability_rate: 1.0,
        ..BookingConfig::default()
    };
    BookingWizard::with_start_date(
        MovieSummary {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/matrix.jpg".to_string()),
        },
        &config,
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        &mut StdRng::seed_from_u64(99),
    )
}

#[test]
fn full_booking_flow_from_wizard_to_store() {
    let storage = temp_storage();
    let mut store = BookingStore::load(storage.clone());
    let mut wizard = open_wizard();

    // Шаг 1: без кинотеатра и времени дальше не пускает
    assert_eq!(wizard.advance(), Err(BookingError::TheaterAndTimeRequired));
    wizard.select_date(NaiveDate::from_ymd_opt(2026, 8, 9).unwrap()).unwrap();
    wizard.select_theater(3).unwrap();
    wizard.select_showtime(2).unwrap();
    assert_eq!(wizard.advance(), Ok(WizardStep::Seats));

    // Шаг 2: два гостя, ровно два места
    wizard.set_party_size(2).unwrap();
    wizard.toggle_seat("C1").unwrap();
    assert_eq!(
        wizard.advance(),
        Err(BookingError::SeatsIncomplete { missing: 1 })
    );
    wizard.toggle_seat("C2").unwrap();
    assert_eq!(wizard.advance(), Ok(WizardStep::Payment));

    // Шаг 3: подтверждение пополняет список броней спереди
    let before = store.bookings().len();
    let draft = wizard.confirm().unwrap();
    let booking = store.add(draft).clone();

    assert_eq!(store.bookings().len(), before + 1);
    assert_eq!(store.bookings()[0].id, booking.id);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.movie_title, "The Matrix");
    assert_eq!(booking.theater, "Lotte Cinema World Tower");
    assert_eq!(booking.date, NaiveDate::from_ymd_opt(2026, 8, 9).unwrap());
    assert_eq!(booking.time, "12:30");
    assert_eq!(booking.seats, vec!["C1".to_string(), "C2".to_string()]);
    assert_eq!(booking.total_price, 24000);

    // Бронь переживает перезапуск хранилища
    let mut reloaded = BookingStore::load(storage);
    assert_eq!(reloaded.bookings().len(), 1);

    // Отмена идемпотентна и ничего не удаляет
    reloaded.cancel(&booking.id).unwrap();
    reloaded.cancel(&booking.id).unwrap();
    assert_eq!(
        reloaded.booking_by_id(&booking.id).unwrap().status,
        BookingStatus::Cancelled
    );
    assert_eq!(reloaded.bookings().len(), 1);
}

#[test]
fn wizard_session_can_go_back_without_losing_anything() {
    let mut wizard = open_wizard();
    wizard.select_theater(1).unwrap();
    wizard.select_showtime(1).unwrap();
    wizard.advance().unwrap();
    wizard.set_party_size(3).unwrap();
    wizard.toggle_seat("A1").unwrap();

    // Возврат на первый шаг и повторный проход вперед
    wizard.back();
    assert_eq!(wizard.step(), WizardStep::VenueTime);
    assert_eq!(wizard.advance(), Ok(WizardStep::Seats));

    // Выбор мест не потерян
    assert_eq!(wizard.seating().selected_ids(), ["A1"]);
    assert_eq!(
        wizard.advance(),
        Err(BookingError::SeatsIncomplete { missing: 2 })
    );
}
