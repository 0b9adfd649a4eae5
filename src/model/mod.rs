pub mod error;
pub mod models;
pub mod record;
pub mod scalar;

pub use error::ModelError;
pub use models::{Attendance, Attendee, Charity, Filename, Game, Marathon, Runner, Segment};
pub use record::{Entity, Presence, Record, TIMESTAMP_FORMAT};
pub use scalar::Scalar;
