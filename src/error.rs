use thiserror::Error;

// Ошибки валидации пользовательского ввода в мастере бронирования.
// Показываются пользователю как уведомление; состояние мастера не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Выберите кинотеатр и время сеанса")]
    TheaterAndTimeRequired,

    #[error("Осталось выбрать мест: {missing}")]
    SeatsIncomplete { missing: usize },

    #[error("Можно выбрать не более {capacity} мест")]
    SelectionFull { capacity: usize },

    #[error("Место {id} не найдено")]
    UnknownSeat { id: String },

    #[error("Кинотеатр не найден")]
    UnknownTheater,

    #[error("Сеанс не найден")]
    UnknownShowTime,

    #[error("На этот сеанс нет свободных мест")]
    ShowTimeSoldOut,

    #[error("Дата вне расписания сеансов")]
    DateOutOfSchedule,

    #[error("Количество гостей должно быть от 1 до {max}")]
    InvalidPartySize { max: usize },

    #[error("Подтверждение доступно только на шаге оплаты")]
    NotAtPaymentStep,

    #[error("Бронирование не найдено")]
    BookingNotFound,
}

// Ошибки каталога фильмов
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("movie catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("movie catalog returned status {status}")]
    Status { status: reqwest::StatusCode },
}

// Ошибки локального хранилища
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage snapshot is not valid json: {0}")]
    Serde(#[from] serde_json::Error),
}

// Ошибки авторизации
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Неверный email или пароль")]
    InvalidCredentials,

    #[error("Пользователь с таким email уже существует")]
    EmailTaken,

    #[error("Пароли не совпадают")]
    PasswordMismatch,

    #[error("Войдите в аккаунт, чтобы продолжить")]
    NotAuthenticated,

    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}
