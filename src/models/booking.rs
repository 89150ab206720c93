use serde::Serialize;

use super::Seat;

/// Снимок текущего выбора. Никогда не хранится, всегда пересчитывается из каталога.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSession {
    pub selected_seats: Vec<Seat>,
    pub total_price: u64,
    pub seat_count: usize,
}

impl BookingSession {
    pub fn is_booking_enabled(&self) -> bool {
        self.seat_count > 0
    }
}
