use proptest::prelude::*;
use std::collections::HashSet;

use seat_selection::models::{SeatState, SeatType};
use seat_selection::{SeatAction, SelectionStore};

const OCCUPIED: [&str; 6] = ["A3", "B5", "C7", "D2", "E8", "F4"];

#[derive(Debug, Clone)]
enum Op {
    Act(SeatAction, String),
    Clear,
}

fn arb_seat_id() -> impl Strategy<Value = String> {
    prop_oneof![
        // валидные места, включая занятые
        (0usize..6, 1u8..=10).prop_map(|(row, col)| format!("{}{}", ["A", "B", "C", "D", "E", "F"][row], col)),
        prop::sample::select(OCCUPIED.to_vec()).prop_map(str::to_string),
        // мусор
        "[A-Za-z0-9]{0,4}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (
            prop_oneof![Just(SeatAction::Toggle), Just(SeatAction::Select), Just(SeatAction::Deselect)],
            arb_seat_id(),
        )
            .prop_map(|(action, id)| Op::Act(action, id)),
        1 => Just(Op::Clear),
    ]
}

fn apply(store: &mut SelectionStore, op: &Op) {
    match op {
        Op::Act(action, id) => {
            let _ = store.dispatch(*action, id);
        }
        Op::Clear => {
            store.clear_selection();
        }
    }
}

fn assert_consistent(store: &SelectionStore) -> Result<(), TestCaseError> {
    let seats = store.seats();
    prop_assert_eq!(seats.len(), 60);

    let selected: Vec<_> = seats.iter().filter(|s| s.state == SeatState::Selected).collect();
    let expected_total: u64 = selected.iter().map(|s| u64::from(s.price)).sum();
    prop_assert_eq!(store.total_price(), expected_total);
    prop_assert_eq!(store.selected_seat_count(), selected.len());
    prop_assert_eq!(store.is_booking_enabled(), !selected.is_empty());

    let ids = store.selected_seat_ids();
    let mut sorted = ids.clone();
    sorted.sort();
    prop_assert_eq!(&ids, &sorted);

    let session = store.session();
    prop_assert_eq!(session.total_price, expected_total);
    prop_assert_eq!(session.seat_count, selected.len());

    for seat in seats {
        let vip = seat.seat_type == SeatType::Vip;
        prop_assert_eq!(vip, matches!(seat.id.to_string().chars().next(), Some('E' | 'F')));
        prop_assert_eq!(seat.price, if vip { 80_000 } else { 50_000 });
    }
    Ok(())
}

proptest! {
    #[test]
    fn derived_values_stay_consistent_after_every_action(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut store = SelectionStore::new().unwrap();
        assert_consistent(&store)?;
        for op in &ops {
            apply(&mut store, op);
            assert_consistent(&store)?;
        }
    }

    #[test]
    fn occupied_seats_stay_occupied(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut store = SelectionStore::new().unwrap();
        for op in &ops {
            apply(&mut store, op);
        }

        let occupied: HashSet<String> = store
            .seats()
            .iter()
            .filter(|s| s.state == SeatState::Occupied)
            .map(|s| s.id.to_string())
            .collect();
        let expected: HashSet<String> = OCCUPIED.iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(occupied, expected);
    }

    #[test]
    fn double_toggle_restores_state(
        ops in prop::collection::vec(arb_op(), 0..32),
        row in 0usize..6,
        col in 1u8..=10,
    ) {
        let mut store = SelectionStore::new().unwrap();
        for op in &ops {
            apply(&mut store, op);
        }

        let id = format!("{}{}", ["A", "B", "C", "D", "E", "F"][row], col);
        let before = store.seats().to_vec();
        store.toggle_seat(&id).unwrap();
        store.toggle_seat(&id).unwrap();
        prop_assert_eq!(store.seats(), before.as_slice());
    }

    #[test]
    fn select_and_clear_are_idempotent(
        ops in prop::collection::vec(arb_op(), 0..32),
        row in 0usize..6,
        col in 1u8..=10,
    ) {
        let mut store = SelectionStore::new().unwrap();
        for op in &ops {
            apply(&mut store, op);
        }

        let id = format!("{}{}", ["A", "B", "C", "D", "E", "F"][row], col);
        store.select_seat(&id).unwrap();
        let once = store.seats().to_vec();
        store.select_seat(&id).unwrap();
        prop_assert_eq!(store.seats(), once.as_slice());

        store.clear_selection();
        let cleared = store.seats().to_vec();
        store.clear_selection();
        prop_assert_eq!(store.seats(), cleared.as_slice());
        prop_assert_eq!(store.selected_seat_count(), 0);
    }
}
