pub mod appointment;
pub mod error;
pub mod leave;
pub mod schedule;

pub use appointment::{Appointment, AppointmentStatus};
pub use error::AvailabilityError;
pub use leave::{CreateLeaveRequest, LeaveInterval};
pub use schedule::{DayOfWeek, WeeklySchedule};
