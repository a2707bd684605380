use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviebox::{
    config::Config,
    services::wizard::{BookingWizard, MovieSummary},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MovieBox booking engine");

    let mut state = AppState::new(config).context("Failed to initialize application state")?;

    // Вход тестовым пользователем
    let user = state
        .auth
        .login("user@test.com", "123456", true)
        .context("Seed account login failed")?;
    info!("Signed in as {} <{}>", user.name, user.email);

    // Каталог: единственный awaited-запрос перед открытием мастера
    let now_playing = state
        .catalog
        .now_playing(1)
        .await
        .context("Failed to load now-playing movies")?;
    info!("Loaded {} now-playing movies", now_playing.results.len());

    let movie = now_playing
        .results
        .first()
        .context("Catalog returned an empty page")?;
    let detail = state.catalog.movie_detail(movie.id).await?;
    info!(
        "Booking flow for '{}', {} min, poster {}",
        detail.title,
        detail.runtime.unwrap_or(0),
        state.catalog.poster_url(detail.poster_path.as_deref())
    );

    // Дальше все операции мастера синхронны - один поток управления
    let mut rng = StdRng::from_entropy();
    let mut wizard = BookingWizard::new(MovieSummary::from(&detail), &state.config.booking, &mut rng);

    // Шаг 1: кинотеатр и время (дата по умолчанию - сегодня)
    wizard.select_theater(1)?;
    wizard.select_showtime(5)?;
    wizard.advance()?;

    // Шаг 2: два гостя, первые два свободных места
    wizard.set_party_size(2)?;
    let free: Vec<String> = wizard
        .seating()
        .seats()
        .iter()
        .filter(|s| s.available)
        .take(2)
        .map(|s| s.id.clone())
        .collect();
    if free.len() < 2 {
        warn!("Not enough free seats in the generated hall, exiting");
        return Ok(());
    }
    for seat_id in &free {
        wizard.toggle_seat(seat_id)?;
    }
    wizard.advance()?;

    // Шаг 3: подтверждение и запись брони
    let draft = wizard.confirm()?;
    let booking = state.bookings.add(draft);
    info!(
        "Booking {}: '{}' at {} on {}, seats {:?}, total {} KRW",
        booking.id, booking.movie_title, booking.theater, booking.date, booking.seats, booking.total_price
    );
    let booking_id = booking.id.clone();

    // Отмена идемпотентна: второй вызов ничего не меняет
    state.bookings.cancel(&booking_id)?;
    state.bookings.cancel(&booking_id)?;
    info!(
        "Bookings in store: {} (newest first)",
        state.bookings.bookings().len()
    );

    Ok(())
}
