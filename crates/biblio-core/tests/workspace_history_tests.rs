//! Undo/redo integration tests
//!
//! Property-based coverage of the linear-history invariants: rewinding to
//! the empty collection, exact replay, and redo invalidation.

use biblio_core::Workspace;
use biblio_domain::Paper;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add { title: String, year: String },
    Update { slot: usize, title: String },
    Delete { slot: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => ("[a-z]{1,8}", "(19|20)[0-9]{2}")
            .prop_map(|(title, year)| Op::Add { title, year }),
        1 => (any::<usize>(), "[a-z]{1,8}")
            .prop_map(|(slot, title)| Op::Update { slot, title }),
        1 => any::<usize>().prop_map(|slot| Op::Delete { slot }),
    ]
}

/// Apply an op, mapping the arbitrary slot onto a valid index. Returns
/// whether a mutation actually happened.
fn apply(ws: &mut Workspace, op: &Op) -> bool {
    match op {
        Op::Add { title, year } => ws
            .add_paper(Paper::new(title.clone(), "A. Author", year.clone()))
            .is_ok(),
        Op::Update { slot, title } => {
            if ws.papers().is_empty() {
                return false;
            }
            let index = slot % ws.papers().len();
            ws.update_paper(index, Paper::new(title.clone(), "B. Author", "1999"))
                .is_ok()
        }
        Op::Delete { slot } => {
            if ws.papers().is_empty() {
                return false;
            }
            let index = slot % ws.papers().len();
            ws.delete_paper(index).is_ok()
        }
    }
}

proptest! {
    /// Undoing every mutation walks back through each prior state to the
    /// empty collection, and redoing replays the same states forward.
    #[test]
    fn undo_rewinds_and_redo_replays(ops in prop::collection::vec(op_strategy(), 1..12)) {
        let mut ws = Workspace::new();
        let mut checkpoints: Vec<Vec<Paper>> = vec![ws.papers().to_vec()];
        for op in &ops {
            if apply(&mut ws, op) {
                checkpoints.push(ws.papers().to_vec());
            }
        }

        for expected in checkpoints.iter().rev().skip(1) {
            prop_assert!(ws.undo());
            prop_assert_eq!(ws.papers(), expected.as_slice());
        }
        prop_assert!(!ws.undo());
        prop_assert!(ws.papers().is_empty());

        for expected in checkpoints.iter().skip(1) {
            prop_assert!(ws.redo());
            prop_assert_eq!(ws.papers(), expected.as_slice());
        }
        prop_assert!(!ws.redo());
    }

    /// An undo followed immediately by a redo restores the pre-undo state
    /// exactly, at every depth of the history.
    #[test]
    fn interleaved_redo_restores_pre_undo_state(ops in prop::collection::vec(op_strategy(), 1..12)) {
        let mut ws = Workspace::new();
        for op in &ops {
            apply(&mut ws, op);
        }

        while ws.history().can_undo() {
            let before = ws.papers().to_vec();
            prop_assert!(ws.undo());
            prop_assert!(ws.redo());
            prop_assert_eq!(ws.papers(), before.as_slice());
            ws.undo();
        }
    }

    /// After any successful mutation the redo stack is empty, even when an
    /// undo populated it just beforehand.
    #[test]
    fn mutation_invalidates_redo(ops in prop::collection::vec((op_strategy(), any::<bool>()), 1..12)) {
        let mut ws = Workspace::new();
        for (op, undo_first) in &ops {
            if *undo_first {
                ws.undo();
            }
            if apply(&mut ws, op) {
                prop_assert!(!ws.history().can_redo());
            }
        }
    }
}

#[test]
fn new_mutation_clears_forward_history() {
    let mut ws = Workspace::new();
    ws.add_paper(Paper::new("a", "X", "2020")).unwrap();
    ws.add_paper(Paper::new("b", "X", "2021")).unwrap();

    ws.undo();
    assert!(ws.history().can_redo());

    ws.add_paper(Paper::new("c", "X", "2022")).unwrap();
    assert!(!ws.history().can_redo());
    // The overwritten branch is gone for good
    ws.undo();
    ws.redo();
    let titles: Vec<&str> = ws.papers().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["a", "c"]);
}

#[test]
fn undo_restores_field_values_and_order_exactly() {
    let mut ws = Workspace::new();
    ws.add_paper(
        Paper::new("Deep Learning", "A. Lee", "2021")
            .with_doi("10.1/dl")
            .with_tags(vec!["nn".to_string()]),
    )
    .unwrap();
    let original = ws.papers().to_vec();

    ws.update_paper(
        0,
        Paper::new("Deep Learning v2", "A. Lee, B. Chen", "2022"),
    )
    .unwrap();
    assert!(ws.undo());
    assert_eq!(ws.papers(), original.as_slice());
    assert_eq!(ws.papers()[0].tags, vec!["nn"]);
}
