pub mod booking;
pub mod movie;
pub mod seat;
pub mod theater;
pub mod user;

pub use booking::{Booking, BookingDraft, BookingStatus};
pub use movie::{Genre, Movie, MovieDetail, MoviePage};
pub use seat::Seat;
pub use theater::{ShowTime, Theater};
pub use user::{Account, User};
