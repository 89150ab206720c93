use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::SeatError;
use crate::models::{BookingSession, SeatId};
use crate::store::SelectionStore;

/// Эфемерная сессия выбора мест. Ничего не сохраняется, при перезапуске всё теряется.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    store: SelectionStore,
}

/// То, что получает слой отображения после каждого действия.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(flatten)]
    pub booking: BookingSession,
    pub selected_seat_ids: Vec<SeatId>,
    pub booking_enabled: bool,
}

impl Session {
    pub fn start() -> Result<Self, SeatError> {
        Ok(Self::with_store(SelectionStore::new()?))
    }

    pub fn with_store(store: SelectionStore) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            store,
        };
        info!("Session {} started", session.id);
        session
    }

    /// Завершает текущую сессию и начинает новую с исходным каталогом.
    pub fn restart(&mut self) {
        info!("Session {} ended", self.id);
        self.store.reset();
        self.id = Uuid::new_v4();
        self.started_at = Utc::now();
        info!("Session {} started", self.id);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let booking = self.store.session();
        SessionSnapshot {
            session_id: self.id,
            started_at: self.started_at,
            selected_seat_ids: booking.selected_seats.iter().map(|seat| seat.id).collect(),
            booking_enabled: booking.is_booking_enabled(),
            booking,
        }
    }
}
