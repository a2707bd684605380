pub mod seating;
pub mod wizard;

pub use seating::{SeatToggle, SeatingPlan};
pub use wizard::{BookingWizard, MovieSummary, WizardStep};
