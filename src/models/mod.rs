pub mod seat;
pub mod movie;
pub mod booking;

pub use seat::{Direction, Seat, SeatColumn, SeatId, SeatRow, SeatState, SeatType};
pub use movie::Movie;
pub use booking::BookingSession;
