//! grid.rs
//!
//! Построение каталога мест: 60 записей в построчном порядке A1..F10.
//!
//! Каталог строится один раз на сессию. Любое нарушение целостности
//! (дубликат, неверный тип или цена, сбитый порядок) прерывает построение.

use std::collections::HashSet;
use tracing::info;

use crate::config::theater::{OCCUPIED_SEATS, ROWS, SEAT_COUNT};
use crate::error::SeatError;
use crate::models::{Seat, SeatColumn, SeatId, SeatState};

#[derive(Debug, Clone)]
pub struct SeatGrid {
    seats: Vec<Seat>,
}

impl SeatGrid {
    /// Зал с фиксированным списком заранее проданных мест.
    pub fn standard() -> Result<Self, SeatError> {
        Self::new(&OCCUPIED_SEATS)
    }

    pub fn new(occupied: &[&str]) -> Result<Self, SeatError> {
        let occupied: HashSet<SeatId> = occupied
            .iter()
            .map(|id| id.parse::<SeatId>())
            .collect::<Result<_, SeatError>>()?;

        let seats: Vec<Seat> = ROWS
            .iter()
            .flat_map(|&row| SeatColumn::all().map(move |column| SeatId::new(row, column)))
            .map(|id| {
                let state = if occupied.contains(&id) {
                    SeatState::Occupied
                } else {
                    SeatState::Available
                };
                Seat::new(id, state)
            })
            .collect();

        verify(&seats)?;
        info!("Seat grid built: {} seats, {} occupied", seats.len(), occupied.len());

        Ok(Self { seats })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn into_seats(self) -> Vec<Seat> {
        self.seats
    }
}

/// Проверяет целостность каталога: размер, уникальность, порядок и вывод типа/цены из ряда.
pub fn verify(seats: &[Seat]) -> Result<(), SeatError> {
    if seats.len() != SEAT_COUNT {
        return Err(SeatError::CatalogSize(seats.len()));
    }

    let mut seen = HashSet::with_capacity(seats.len());
    for (position, seat) in seats.iter().enumerate() {
        let id = seat.id;

        if !seen.insert(id) {
            return Err(SeatError::DuplicateSeat(id));
        }
        if id.index() != position {
            return Err(SeatError::CatalogOrder { id, position });
        }
        if seat.row != id.row || seat.column != id.column.get() {
            return Err(SeatError::CoordinateMismatch {
                id,
                row: seat.row,
                column: seat.column,
            });
        }

        let expected_type = id.row.seat_type();
        if seat.seat_type != expected_type {
            return Err(SeatError::TypeMismatch {
                id,
                expected: expected_type,
                actual: seat.seat_type,
            });
        }
        if seat.price != expected_type.price() {
            return Err(SeatError::PriceMismatch {
                id,
                expected: expected_type.price(),
                actual: seat.price,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeatRow, SeatType};

    #[test]
    fn builds_sixty_seats_in_row_major_order() {
        let grid = SeatGrid::standard().unwrap();
        let ids: Vec<String> = grid.seats().iter().map(|s| s.id.to_string()).collect();

        assert_eq!(ids.len(), 60);
        assert_eq!(ids[0], "A1");
        assert_eq!(ids[9], "A10");
        assert_eq!(ids[10], "B1");
        assert_eq!(ids[59], "F10");

        let expected: Vec<String> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .flat_map(|row| (1..=10).map(move |col| format!("{row}{col}")))
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn seeds_occupied_seats() {
        let grid = SeatGrid::standard().unwrap();
        let occupied: Vec<String> = grid
            .seats()
            .iter()
            .filter(|s| s.state == SeatState::Occupied)
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(occupied, ["A3", "B5", "C7", "D2", "E8", "F4"]);
    }

    #[test]
    fn empty_seed_list_leaves_everything_available() {
        let grid = SeatGrid::new(&[]).unwrap();
        assert!(grid.seats().iter().all(|s| s.state == SeatState::Available));
    }

    #[test]
    fn malformed_seed_id_is_a_configuration_error() {
        let err = SeatGrid::new(&["A3", "A01"]).unwrap_err();
        assert_eq!(err, SeatError::InvalidSeatIdentifier("A01".to_string()));
        assert!(!err.is_integrity_violation());
    }

    #[test]
    fn rows_e_and_f_are_vip() {
        let grid = SeatGrid::standard().unwrap();
        for seat in grid.seats() {
            let vip = matches!(seat.row, SeatRow::E | SeatRow::F);
            assert_eq!(seat.seat_type == SeatType::Vip, vip, "{}", seat.id);
            assert_eq!(seat.price, if vip { 80_000 } else { 50_000 }, "{}", seat.id);
        }
    }

    #[test]
    fn verify_rejects_broken_catalogs() {
        let seats = SeatGrid::new(&[]).unwrap().into_seats();

        let mut short = seats.clone();
        short.pop();
        assert_eq!(verify(&short), Err(SeatError::CatalogSize(59)));

        let mut duplicated = seats.clone();
        duplicated[1] = duplicated[0].clone();
        assert_eq!(verify(&duplicated), Err(SeatError::DuplicateSeat(seats[0].id)));

        let mut swapped = seats.clone();
        swapped.swap(0, 1);
        assert!(matches!(verify(&swapped), Err(SeatError::CatalogOrder { position: 0, .. })));

        let mut cheap_vip = seats.clone();
        cheap_vip[45].price = 50_000;
        assert!(matches!(verify(&cheap_vip), Err(SeatError::PriceMismatch { expected: 80_000, .. })));

        let mut wrong_type = seats.clone();
        wrong_type[0].seat_type = SeatType::Vip;
        assert!(matches!(verify(&wrong_type), Err(SeatError::TypeMismatch { .. })));

        let mut moved = seats;
        moved[0].column = 2;
        let err = verify(&moved).unwrap_err();
        assert!(matches!(err, SeatError::CoordinateMismatch { column: 2, .. }));
        assert!(err.is_integrity_violation());
    }
}
