mod flight_record;
mod flight_status;

pub use flight_record::{Flight, FlightDecodeError};
pub use flight_status::FlightStatus;
