use rand::Rng;
use tracing::debug;

use crate::config::BookingConfig;
use crate::error::BookingError;
use crate::models::Seat;

/// Исход клика по месту
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    Selected,
    Deselected,
    /// Клик по недоступному месту игнорируется
    Ignored,
}

/// План зала: сетка мест плюс текущий выбор.
///
/// Доступность каждого места разыгрывается один раз при генерации и
/// дальше не меняется; смена количества гостей сбрасывает только выбор,
/// сетка не пересоздается.
#[derive(Debug, Clone)]
pub struct SeatingPlan {
    seats: Vec<Seat>,
    // Выбранные места в порядке выбора, без дубликатов
    selection: Vec<String>,
    party_size: usize,
    max_party_size: usize,
}

impl SeatingPlan {
    /// Генерирует по одному месту на каждую пару (ряд, номер).
    /// Источник случайности передается снаружи, чтобы тесты могли
    /// зафиксировать раскладку.
    pub fn generate(config: &BookingConfig, rng: &mut impl Rng) -> Self {
        let rows = config.rows();
        let mut seats = Vec::with_capacity(rows.len() * config.seats_per_row as usize);
        for row in rows {
            for number in 1..=config.seats_per_row {
                let available = rng.gen_bool(config.availability_rate);
                seats.push(Seat::new(row, number, available));
            }
        }
        debug!(
            "Generated seating plan: {} seats, {} available",
            seats.len(),
            seats.iter().filter(|s| s.available).count()
        );
        SeatingPlan {
            seats,
            selection: Vec::new(),
            party_size: 1,
            max_party_size: config.max_party_size,
        }
    }

    /// Клик по месту.
    ///
    /// Снятие выбора разрешено всегда; выбор нового места - только пока
    /// не набрано количество гостей, иначе пользователю показывается
    /// уведомление и выбор не меняется.
    pub fn toggle(&mut self, seat_id: &str) -> Result<SeatToggle, BookingError> {
        let idx = self
            .seats
            .iter()
            .position(|s| s.id == seat_id)
            .ok_or_else(|| BookingError::UnknownSeat {
                id: seat_id.to_string(),
            })?;

        if !self.seats[idx].available {
            return Ok(SeatToggle::Ignored);
        }

        if self.seats[idx].selected {
            self.seats[idx].selected = false;
            self.selection.retain(|id| id != seat_id);
            return Ok(SeatToggle::Deselected);
        }

        if self.selection.len() >= self.party_size {
            return Err(BookingError::SelectionFull {
                capacity: self.party_size,
            });
        }

        self.seats[idx].selected = true;
        self.selection.push(seat_id.to_string());
        Ok(SeatToggle::Selected)
    }

    /// Меняет количество гостей и полностью сбрасывает выбор мест.
    pub fn set_party_size(&mut self, size: usize) -> Result<(), BookingError> {
        if size == 0 || size > self.max_party_size {
            return Err(BookingError::InvalidPartySize {
                max: self.max_party_size,
            });
        }
        self.party_size = size;
        self.selection.clear();
        for seat in &mut self.seats {
            seat.selected = false;
        }
        Ok(())
    }

    pub fn party_size(&self) -> usize {
        self.party_size
    }

    // Выбранные места в порядке выбора
    pub fn selected_ids(&self) -> &[String] {
        &self.selection
    }

    pub fn selection_complete(&self) -> bool {
        self.selection.len() == self.party_size
    }

    // Сколько мест осталось выбрать
    pub fn missing(&self) -> usize {
        self.party_size.saturating_sub(self.selection.len())
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == seat_id)
    }
}
