use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theater {
    pub id: u32,
    pub name: String,
    pub location: String,
}

// Сеанс с количеством свободных мест на момент показа расписания
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowTime {
    pub id: u32,
    pub time: String,
    pub available_seats: u32,
    pub total_seats: u32,
}

impl ShowTime {
    pub fn is_sold_out(&self) -> bool {
        self.available_seats == 0
    }
}

fn theater(id: u32, name: &str, location: &str) -> Theater {
    Theater {
        id,
        name: name.to_string(),
        location: location.to_string(),
    }
}

fn showtime(id: u32, time: &str, available_seats: u32, total_seats: u32) -> ShowTime {
    ShowTime {
        id,
        time: time.to_string(),
        available_seats,
        total_seats,
    }
}

impl Theater {
    // Список кинотеатров, доступных для бронирования
    pub fn lineup() -> Vec<Theater> {
        vec![
            theater(1, "CGV Gangnam", "Seoul, Gangnam-gu"),
            theater(2, "CGV Hongdae", "Seoul, Mapo-gu"),
            theater(3, "Lotte Cinema World Tower", "Seoul, Songpa-gu"),
            theater(4, "Megabox COEX", "Seoul, Gangnam-gu"),
        ]
    }
}

impl ShowTime {
    // Дневное расписание сеансов
    pub fn daily_schedule() -> Vec<ShowTime> {
        vec![
            showtime(1, "10:00", 45, 100),
            showtime(2, "12:30", 23, 100),
            showtime(3, "15:00", 67, 100),
            showtime(4, "17:30", 12, 100),
            showtime(5, "20:00", 89, 100),
            showtime(6, "22:30", 56, 100),
        ]
    }
}
