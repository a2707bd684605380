use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub catalog: CatalogConfig,
    pub booking: BookingConfig,
    pub storage: StorageConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки каталога фильмов (TMDB)
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub api_key: String,
    pub language: String,
    pub region: String,
    pub poster_size: String,
    pub backdrop_size: String,
}

// Настройки бронирования: зал, цены, лимиты
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    pub ticket_price: i64,
    pub max_party_size: usize,
    pub seat_rows: String,
    pub seats_per_row: u32,
    pub availability_rate: f64,
    pub schedule_days: u32,
}

// Настройки локального хранилища
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "moviebox=debug".to_string()),
            },
            catalog: CatalogConfig {
                base_url: env::var("TMDB_BASE_URL")
                    .unwrap_or_else(|_| "https://api.themoviedb.org/3/".to_string()),
                image_base_url: env::var("TMDB_IMAGE_BASE_URL")
                    .unwrap_or_else(|_| "https://image.tmdb.org/t/p/".to_string()),
                api_key: env::var("TMDB_API_KEY").expect("TMDB_API_KEY must be set"),
                language: env::var("TMDB_LANGUAGE").unwrap_or_else(|_| "ko-KR".to_string()),
                region: env::var("TMDB_REGION").unwrap_or_else(|_| "KR".to_string()),
                poster_size: env::var("TMDB_POSTER_SIZE").unwrap_or_else(|_| "w500".to_string()),
                backdrop_size: env::var("TMDB_BACKDROP_SIZE")
                    .unwrap_or_else(|_| "w1280".to_string()),
            },
            booking: BookingConfig {
                ticket_price: env::var("TICKET_PRICE")
                    .unwrap_or_else(|_| "12000".to_string())
                    .parse()
                    .expect("TICKET_PRICE must be a valid number"),
                max_party_size: env::var("MAX_PARTY_SIZE")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("MAX_PARTY_SIZE must be a valid number"),
                seat_rows: env::var("SEAT_ROWS").unwrap_or_else(|_| "ABCDEFGH".to_string()),
                seats_per_row: env::var("SEATS_PER_ROW")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("SEATS_PER_ROW must be a valid number"),
                availability_rate: env::var("SEAT_AVAILABILITY_RATE")
                    .unwrap_or_else(|_| "0.7".to_string())
                    .parse()
                    .expect("SEAT_AVAILABILITY_RATE must be a valid number"),
                schedule_days: env::var("SCHEDULE_DAYS")
                    .unwrap_or_else(|_| "7".to_string())
                    .parse()
                    .expect("SCHEDULE_DAYS must be a valid number"),
            },
            storage: StorageConfig {
                data_dir: env::var("STORAGE_DIR").unwrap_or_else(|_| ".moviebox".to_string()),
            },
        }
    }
}

impl BookingConfig {
    // Ряды зала как список символов ('A'..'H')
    pub fn rows(&self) -> Vec<char> {
        self.seat_rows.chars().collect()
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            ticket_price: 12000,
            max_party_size: 5,
            seat_rows: "ABCDEFGH".to_string(),
            seats_per_row: 10,
            availability_rate: 0.7,
            schedule_days: 7,
        }
    }
}
