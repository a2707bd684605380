use serde::{Deserialize, Serialize};

// Место в зале. Доступность фиксируется при генерации и больше не меняется.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub row: char,
    pub number: u32,
    pub available: bool,
    pub selected: bool,
}

impl Seat {
    pub fn new(row: char, number: u32, available: bool) -> Self {
        Seat {
            id: format!("{}{}", row, number),
            row,
            number,
            available,
            selected: false,
        }
    }
}
