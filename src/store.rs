//! store.rs
//!
//! Хранилище выбора мест: единственный владелец состояния каталога.
//!
//! Состояние меняется только через четыре действия: `toggle_seat`,
//! `select_seat`, `deselect_seat`, `clear_selection`. Все агрегаты
//! (сумма, количество, список id) вычисляются заново при каждом чтении.
//!
//! Переходы на одно место:
//! - `available` <-> `selected`
//! - `occupied` поглощающее: ни одно действие не входит в него и не выходит из него.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::error::SeatError;
use crate::grid::SeatGrid;
use crate::models::{BookingSession, Seat, SeatId, SeatState};

/// Действие над одним местом.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatAction {
    Toggle,
    Select,
    Deselect,
}

impl SeatAction {
    fn next_state(self, current: SeatState) -> SeatState {
        match (self, current) {
            (_, SeatState::Occupied) => SeatState::Occupied,
            (SeatAction::Toggle, SeatState::Available) => SeatState::Selected,
            (SeatAction::Toggle, SeatState::Selected) => SeatState::Available,
            (SeatAction::Select, SeatState::Available) => SeatState::Selected,
            (SeatAction::Select, SeatState::Selected) => SeatState::Selected,
            (SeatAction::Deselect, SeatState::Available) => SeatState::Available,
            (SeatAction::Deselect, SeatState::Selected) => SeatState::Available,
        }
    }
}

/// Результат действия. Вызывающему не нужно на него реагировать, достаточно перерисовать снимок.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub seat_id: SeatId,
    pub from: SeatState,
    pub to: SeatState,
}

impl Transition {
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone)]
pub struct SelectionStore {
    seats: Vec<Seat>,
    index: HashMap<String, usize>,
    initial: Vec<Seat>,
}

impl SelectionStore {
    pub fn new() -> Result<Self, SeatError> {
        Ok(Self::from_grid(SeatGrid::standard()?))
    }

    pub fn from_grid(grid: SeatGrid) -> Self {
        let seats = grid.into_seats();
        let index = seats
            .iter()
            .enumerate()
            .map(|(position, seat)| (seat.id.to_string(), position))
            .collect();

        Self {
            initial: seats.clone(),
            seats,
            index,
        }
    }

    /* ---------- actions ---------- */

    /// available -> selected, selected -> available, occupied остаётся occupied.
    pub fn toggle_seat(&mut self, id: &str) -> Result<Transition, SeatError> {
        self.dispatch(SeatAction::Toggle, id)
    }

    /// Переводит место в `selected`, если оно свободно. Иначе ничего не делает.
    pub fn select_seat(&mut self, id: &str) -> Result<Transition, SeatError> {
        self.dispatch(SeatAction::Select, id)
    }

    /// Переводит место в `available`, если оно выбрано. Иначе ничего не делает.
    pub fn deselect_seat(&mut self, id: &str) -> Result<Transition, SeatError> {
        self.dispatch(SeatAction::Deselect, id)
    }

    /// Применяет действие к месту. Неизвестный id даёт `SeatNotFound` и ничего не меняет.
    pub fn dispatch(&mut self, action: SeatAction, id: &str) -> Result<Transition, SeatError> {
        let Some(&position) = self.index.get(id) else {
            warn!(seat_id = id, ?action, "seat not found, action ignored");
            return Err(SeatError::SeatNotFound(id.to_string()));
        };

        let seat = &mut self.seats[position];
        let from = seat.state;
        let to = action.next_state(from);
        seat.state = to;

        let transition = Transition {
            seat_id: seat.id,
            from,
            to,
        };
        if transition.is_change() {
            debug!(seat_id = %seat.id, ?action, ?from, ?to, "seat state changed");
        } else {
            debug!(seat_id = %seat.id, ?action, state = ?from, "seat state unchanged");
        }

        Ok(transition)
    }

    /// Снимает выбор со всех мест. Занятые и свободные места не трогает.
    pub fn clear_selection(&mut self) -> usize {
        let mut cleared = 0;
        for seat in self
            .seats
            .iter_mut()
            .filter(|seat| seat.state == SeatState::Selected)
        {
            seat.state = SeatState::Available;
            cleared += 1;
        }

        if cleared > 0 {
            debug!(cleared, "selection cleared");
        }
        cleared
    }

    /// Возвращает каталог в исходное состояние сессии.
    pub fn reset(&mut self) {
        self.seats.clone_from(&self.initial);
        info!("Seat store reset to initial catalog");
    }

    /* ---------- selectors ---------- */

    /// Все 60 мест в построчном порядке.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Точный поиск по id, с учётом регистра.
    pub fn seat_by_id(&self, id: &str) -> Option<&Seat> {
        self.index.get(id).map(|&position| &self.seats[position])
    }

    fn selected(&self) -> impl Iterator<Item = &Seat> + '_ {
        self.seats
            .iter()
            .filter(|seat| seat.state == SeatState::Selected)
    }

    pub fn selected_seats(&self) -> Vec<Seat> {
        self.selected().cloned().collect()
    }

    pub fn total_price(&self) -> u64 {
        self.selected().map(|seat| u64::from(seat.price)).sum()
    }

    pub fn selected_seat_count(&self) -> usize {
        self.selected().count()
    }

    /// Id выбранных мест в порядке каталога, а не в порядке выбора.
    pub fn selected_seat_ids(&self) -> Vec<SeatId> {
        self.selected().map(|seat| seat.id).collect()
    }

    pub fn is_booking_enabled(&self) -> bool {
        self.selected().next().is_some()
    }

    pub fn session(&self) -> BookingSession {
        let selected_seats = self.selected_seats();
        BookingSession {
            total_price: selected_seats.iter().map(|seat| u64::from(seat.price)).sum(),
            seat_count: selected_seats.len(),
            selected_seats,
        }
    }
}
