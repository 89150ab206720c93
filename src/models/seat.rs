//! seat.rs
//!
//! Модель места в зале и строгий формат идентификатора `{ряд}{номер}`.
//!
//! - `SeatRow` и `SeatColumn` ограничивают координаты сеткой 6×10.
//! - `SeatId` разбирается только из канонической формы: `"A1"`, `"F10"`,
//!   но не `"A01"`, `"a1"` или `"10"`.
//! - Тип и цена места выводятся из ряда и никогда не задаются отдельно.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::theater::{COLUMN_COUNT, STANDARD_PRICE, VIP_PRICE};
use crate::error::SeatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeatRow {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl SeatRow {
    pub const ALL: [SeatRow; 6] = [
        SeatRow::A,
        SeatRow::B,
        SeatRow::C,
        SeatRow::D,
        SeatRow::E,
        SeatRow::F,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(SeatRow::A),
            'B' => Some(SeatRow::B),
            'C' => Some(SeatRow::C),
            'D' => Some(SeatRow::D),
            'E' => Some(SeatRow::E),
            'F' => Some(SeatRow::F),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            SeatRow::A => 'A',
            SeatRow::B => 'B',
            SeatRow::C => 'C',
            SeatRow::D => 'D',
            SeatRow::E => 'E',
            SeatRow::F => 'F',
        }
    }

    /// Ряды A-D стандартные, E-F VIP.
    pub fn seat_type(self) -> SeatType {
        match self {
            SeatRow::A | SeatRow::B | SeatRow::C | SeatRow::D => SeatType::Standard,
            SeatRow::E | SeatRow::F => SeatType::Vip,
        }
    }
}

impl fmt::Display for SeatRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Номер места в ряду, 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeatColumn(u8);

impl SeatColumn {
    pub fn new(number: u8) -> Option<Self> {
        (1..=COLUMN_COUNT).contains(&number).then_some(SeatColumn(number))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = SeatColumn> {
        (1..=COLUMN_COUNT).map(SeatColumn)
    }
}

impl TryFrom<u8> for SeatColumn {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        SeatColumn::new(number).ok_or_else(|| format!("column {} is outside 1..={}", number, COLUMN_COUNT))
    }
}

impl From<SeatColumn> for u8 {
    fn from(column: SeatColumn) -> u8 {
        column.0
    }
}

/// Направление перемещения фокуса по сетке с клавиатуры.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Идентификатор места. В JSON всегда строка вида `"E5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    pub row: SeatRow,
    pub column: SeatColumn,
}

impl SeatId {
    pub fn new(row: SeatRow, column: SeatColumn) -> Self {
        Self { row, column }
    }

    /// Позиция места в каталоге (построчный порядок A1..A10, B1..B10, ...).
    pub fn index(self) -> usize {
        self.row.index() * COLUMN_COUNT as usize + (self.column.get() as usize - 1)
    }

    /// Соседнее место в заданном направлении. На краю сетки фокус остаётся на месте.
    pub fn step(self, direction: Direction) -> SeatId {
        let row = self.row.index();
        let column = self.column.get();

        let (row, column) = match direction {
            Direction::Up => (row.saturating_sub(1), column),
            Direction::Down => (row + 1, column),
            Direction::Left => (row, column.saturating_sub(1)),
            Direction::Right => (row, column + 1),
        };

        match (SeatRow::from_index(row), SeatColumn::new(column)) {
            (Some(row), Some(column)) => SeatId::new(row, column),
            _ => self,
        }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column.get())
    }
}

impl FromStr for SeatId {
    type Err = SeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SeatError::InvalidSeatIdentifier(s.to_string());

        let mut chars = s.chars();
        let row = chars.next().and_then(SeatRow::from_char).ok_or_else(invalid)?;

        // Только десятичные цифры без ведущего нуля
        let digits = chars.as_str();
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let column = digits
            .parse::<u8>()
            .ok()
            .and_then(SeatColumn::new)
            .ok_or_else(invalid)?;

        Ok(SeatId::new(row, column))
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> String {
        id.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Standard,
    Vip,
}

impl SeatType {
    pub fn price(self) -> u32 {
        match self {
            SeatType::Standard => STANDARD_PRICE,
            SeatType::Vip => VIP_PRICE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatState {
    Available,
    Selected,
    Occupied,
}

/// Тип и цена при чтении из JSON не принимаются, а выводятся заново из id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SeatRecord")]
pub struct Seat {
    pub id: SeatId,
    pub row: SeatRow,
    pub column: u8,
    #[serde(rename = "type")]
    pub seat_type: SeatType,
    pub price: u32,
    pub state: SeatState,
}

#[derive(Deserialize)]
struct SeatRecord {
    id: SeatId,
    state: SeatState,
}

impl From<SeatRecord> for Seat {
    fn from(record: SeatRecord) -> Self {
        Seat::new(record.id, record.state)
    }
}

impl Seat {
    /// Создаёт место, выводя координаты, тип и цену из идентификатора.
    pub fn new(id: SeatId, state: SeatState) -> Self {
        let seat_type = id.row.seat_type();
        Self {
            id,
            row: id.row,
            column: id.column.get(),
            seat_type,
            price: seat_type.price(),
            state,
        }
    }

    pub fn is_in_state(&self, state: SeatState) -> bool {
        self.state == state
    }

    /// Занятое место нельзя выбрать.
    pub fn is_selectable(&self) -> bool {
        self.state != SeatState::Occupied
    }
}
