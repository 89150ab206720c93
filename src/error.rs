use thiserror::Error;

use crate::config::theater::SEAT_COUNT;
use crate::models::{SeatId, SeatRow, SeatType};

/// Ошибки каталога мест и операций выбора.
///
/// `SeatNotFound` не фатальна: действие просто ничего не меняет.
/// `InvalidSeatIdentifier` возникает на границе, при разборе входящей строки.
/// Остальные варианты означают нарушение целостности каталога и прерывают его построение.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatError {
    #[error("seat {0:?} not found")]
    SeatNotFound(String),

    #[error("invalid seat identifier {0:?}, expected a row A-F followed by a column 1-10")]
    InvalidSeatIdentifier(String),

    #[error("catalog has {0} seats, expected {expected}", expected = SEAT_COUNT)]
    CatalogSize(usize),

    #[error("seat {0} appears more than once in the catalog")]
    DuplicateSeat(SeatId),

    #[error("seat {id} is at position {position}, which breaks row-major order")]
    CatalogOrder { id: SeatId, position: usize },

    #[error("seat {id} carries row {row:?} and column {column}, which do not match its id")]
    CoordinateMismatch { id: SeatId, row: SeatRow, column: u8 },

    #[error("seat {id} has type {actual:?}, but row {} requires {expected:?}", .id.row)]
    TypeMismatch {
        id: SeatId,
        expected: SeatType,
        actual: SeatType,
    },

    #[error("seat {id} is priced {actual}, but its type requires {expected}")]
    PriceMismatch { id: SeatId, expected: u32, actual: u32 },
}

impl SeatError {
    /// Ошибка целостности каталога, а не пользовательского ввода.
    pub fn is_integrity_violation(&self) -> bool {
        !matches!(
            self,
            SeatError::SeatNotFound(_) | SeatError::InvalidSeatIdentifier(_)
        )
    }
}
