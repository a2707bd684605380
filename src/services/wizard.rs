//! wizard.rs
//!
//! Этот модуль реализует трехшаговый мастер бронирования билетов.
//!
//! Ключевые компоненты:
//! 1.  **WizardStep**: Явное перечисление шагов (кинотеатр/время -> места ->
//!     оплата). Переходы линейны, ветвлений и отдельного терминального
//!     состояния нет - после подтверждения мастер закрывается снаружи.
//! 2.  **BookingWizard**: Состояние мастера: выбранные дата, кинотеатр и
//!     сеанс, количество гостей и план зала. Функция перехода чистая и
//!     отделена от отображения, поэтому легальность переходов проверяется
//!     юнит-тестами без UI.
//! 3.  **confirm**: Сборка черновика брони на шаге оплаты. Полнота данных
//!     гарантирована переходами выше, поэтому здесь только конструирование.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use tracing::debug;

use crate::config::BookingConfig;
use crate::error::BookingError;
use crate::models::{BookingDraft, MovieDetail, ShowTime, Theater};
use crate::services::seating::{SeatToggle, SeatingPlan};

/// Шаги мастера бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Выбор кинотеатра, даты и времени сеанса
    VenueTime,
    /// Выбор количества гостей и мест
    Seats,
    /// Сводка и оплата
    Payment,
}

/// Карточка фильма, ради которого открыт мастер
#[derive(Debug, Clone)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
}

impl From<&MovieDetail> for MovieSummary {
    fn from(detail: &MovieDetail) -> Self {
        MovieSummary {
            id: detail.id,
            title: detail.title.clone(),
            poster_path: detail.poster_path.clone(),
        }
    }
}

pub struct BookingWizard {
    movie: MovieSummary,
    step: WizardStep,
    schedule: Vec<NaiveDate>,
    theaters: Vec<Theater>,
    showtimes: Vec<ShowTime>,
    date: NaiveDate,
    theater_id: Option<u32>,
    showtime_id: Option<u32>,
    seating: SeatingPlan,
    ticket_price: i64,
}

impl BookingWizard {
    /// Открывает мастер на первом шаге: план зала уже сгенерирован,
    /// первая дата расписания выбрана по умолчанию, места не выбраны.
    pub fn new(movie: MovieSummary, config: &BookingConfig, rng: &mut impl Rng) -> Self {
        Self::with_start_date(movie, config, Utc::now().date_naive(), rng)
    }

    /// То же, но с фиксированной начальной датой расписания
    pub fn with_start_date(
        movie: MovieSummary,
        config: &BookingConfig,
        start: NaiveDate,
        rng: &mut impl Rng,
    ) -> Self {
        let schedule: Vec<NaiveDate> = (0..config.schedule_days)
            .map(|offset| start + Duration::days(i64::from(offset)))
            .collect();
        debug!("Opening booking wizard for '{}'", movie.title);

        BookingWizard {
            movie,
            step: WizardStep::VenueTime,
            date: schedule[0],
            schedule,
            theaters: Theater::lineup(),
            showtimes: ShowTime::daily_schedule(),
            theater_id: None,
            showtime_id: None,
            seating: SeatingPlan::generate(config, rng),
            ticket_price: config.ticket_price,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn schedule(&self) -> &[NaiveDate] {
        &self.schedule
    }

    pub fn theaters(&self) -> &[Theater] {
        &self.theaters
    }

    pub fn showtimes(&self) -> &[ShowTime] {
        &self.showtimes
    }

    pub fn seating(&self) -> &SeatingPlan {
        &self.seating
    }

    pub fn party_size(&self) -> usize {
        self.seating.party_size()
    }

    // === Выбор на первом шаге ===

    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        if !self.schedule.contains(&date) {
            return Err(BookingError::DateOutOfSchedule);
        }
        self.date = date;
        Ok(())
    }

    pub fn select_theater(&mut self, theater_id: u32) -> Result<(), BookingError> {
        if !self.theaters.iter().any(|t| t.id == theater_id) {
            return Err(BookingError::UnknownTheater);
        }
        self.theater_id = Some(theater_id);
        Ok(())
    }

    pub fn select_showtime(&mut self, showtime_id: u32) -> Result<(), BookingError> {
        let showtime = self
            .showtimes
            .iter()
            .find(|s| s.id == showtime_id)
            .ok_or(BookingError::UnknownShowTime)?;
        if showtime.is_sold_out() {
            return Err(BookingError::ShowTimeSoldOut);
        }
        self.showtime_id = Some(showtime_id);
        Ok(())
    }

    // === Выбор на втором шаге (делегируется плану зала) ===

    pub fn set_party_size(&mut self, size: usize) -> Result<(), BookingError> {
        self.seating.set_party_size(size)
    }

    pub fn toggle_seat(&mut self, seat_id: &str) -> Result<SeatToggle, BookingError> {
        self.seating.toggle(seat_id)
    }

    // === Переходы ===

    /// Переход к следующему шагу. При невыполненных предусловиях шаг не
    /// меняется, а пользователю возвращается уведомление.
    pub fn advance(&mut self) -> Result<WizardStep, BookingError> {
        match self.step {
            WizardStep::VenueTime => {
                if self.theater_id.is_none() || self.showtime_id.is_none() {
                    return Err(BookingError::TheaterAndTimeRequired);
                }
                self.step = WizardStep::Seats;
            }
            WizardStep::Seats => {
                if !self.seating.selection_complete() {
                    return Err(BookingError::SeatsIncomplete {
                        missing: self.seating.missing(),
                    });
                }
                self.step = WizardStep::Payment;
            }
            // Дальше оплаты идти некуда: подтверждение - отдельное действие
            WizardStep::Payment => {}
        }
        Ok(self.step)
    }

    /// Шаг назад. Всегда разрешен, выбор полностью сохраняется.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Payment => WizardStep::Seats,
            WizardStep::Seats | WizardStep::VenueTime => WizardStep::VenueTime,
        };
        self.step
    }

    pub fn total_price(&self) -> i64 {
        self.ticket_price * self.seating.party_size() as i64
    }

    /// Собирает черновик брони. Доступно только на шаге оплаты;
    /// полнота выбора гарантирована переходом Seats -> Payment.
    pub fn confirm(&self) -> Result<BookingDraft, BookingError> {
        if self.step != WizardStep::Payment {
            return Err(BookingError::NotAtPaymentStep);
        }

        let theater = self
            .theater_id
            .and_then(|id| self.theaters.iter().find(|t| t.id == id))
            .ok_or(BookingError::TheaterAndTimeRequired)?;
        let showtime = self
            .showtime_id
            .and_then(|id| self.showtimes.iter().find(|s| s.id == id))
            .ok_or(BookingError::TheaterAndTimeRequired)?;

        Ok(BookingDraft {
            movie_id: self.movie.id,
            movie_title: self.movie.title.clone(),
            movie_poster: self.movie.poster_path.clone(),
            theater: theater.name.clone(),
            theater_location: theater.location.clone(),
            date: self.date,
            time: showtime.time.clone(),
            seats: self.seating.selected_ids().to_vec(),
            people_count: self.seating.party_size(),
            total_price: self.total_price(),
        })
    }
}
