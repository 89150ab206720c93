use serde::Serialize;

/// Фильм текущей сессии. Только для отображения в шапке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: &'static str,
    pub title: &'static str,
    /// Длительность в минутах
    pub duration: u32,
}
