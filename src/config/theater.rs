//! Фиксированная конфигурация зала: размер сетки, цены и заранее проданные места.
//!
//! Эти значения не настраиваются во время выполнения: каталог строится из них
//! один раз при старте каждой сессии.

use crate::models::{Movie, SeatRow};

/// Ряды зала в порядке отображения.
pub const ROWS: [SeatRow; 6] = SeatRow::ALL;

/// Количество мест в каждом ряду.
pub const COLUMN_COUNT: u8 = 10;

/// Полный размер каталога.
pub const SEAT_COUNT: usize = ROWS.len() * COLUMN_COUNT as usize;

// Цены в VND, без дробной части
pub const STANDARD_PRICE: u32 = 50_000;
pub const VIP_PRICE: u32 = 80_000;

/// Места, помеченные занятыми при создании сессии (имитация прошлых продаж).
pub const OCCUPIED_SEATS: [&str; 6] = ["A3", "B5", "C7", "D2", "E8", "F4"];

/// Фильм, на который выбираются места.
pub const MOVIE: Movie = Movie {
    id: "avengers-001",
    title: "Avengers",
    duration: 142,
};
