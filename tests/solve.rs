use peg_solitaire::{
    Outcome, PegError, Solver, SolverConfig,
    action::{Move, replay_moves},
    board::{Board, TOTAL_SLOTS},
    solve,
};

fn assert_valid_solution(first_slot: u8, moves: &[Move]) {
    assert_eq!(moves.len(), TOTAL_SLOTS - 1);
    assert_eq!(moves[0], Move::RemoveFirst(first_slot));
    assert!(moves[1..].iter().all(|m| m.is_jump()));

    let board = replay_moves(moves).unwrap();
    assert_eq!(board.peg_count(), 1);
    assert_eq!(board.count_occupied(), 1);
}

#[test]
fn test_every_opening_terminates() {
    for slot in 0..TOTAL_SLOTS as i64 {
        let result = solve(slot, SolverConfig::default()).unwrap();
        match &result.outcome {
            Outcome::Solved(moves) => assert_valid_solution(slot as u8, moves),
            Outcome::Exhausted => {}
            Outcome::LimitReached => panic!("opening {slot} did not finish"),
        }
    }
}

#[test]
fn test_classic_openings() {
    for slot in [0, 4] {
        let result = solve(slot, SolverConfig::default()).unwrap();
        let moves = result.moves().unwrap();
        assert_valid_solution(slot as u8, moves);
        assert_eq!(moves.iter().filter(|m| m.is_jump()).count(), 13);
    }
}

#[test]
fn test_replay_matches_final_board() {
    let moves = solve(4, SolverConfig::default())
        .unwrap()
        .moves()
        .unwrap()
        .to_vec();
    let mut board = Board::full();
    for (i, mov) in moves.iter().enumerate() {
        peg_solitaire::action::apply_move(&mut board, mov).unwrap();
        assert_eq!(board.peg_count() as usize, TOTAL_SLOTS - 1 - i);
        assert_eq!(board.peg_count() as usize, board.count_occupied());
    }
    assert_eq!(board, replay_moves(&moves).unwrap());
}

#[test]
fn test_pruning_keeps_the_first_solution() {
    let pruned = SolverConfig {
        prune_dead_states: true,
        ..Default::default()
    };
    for slot in [0, 3, 4, 12] {
        let plain = solve(slot, SolverConfig::default()).unwrap();
        let fast = solve(slot, pruned).unwrap();
        assert_eq!(plain.outcome, fast.outcome);
        assert!(fast.states <= plain.states);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut solver = Solver::default();
    let first = solver.solve(4).unwrap();
    let second = solver.solve(4).unwrap();
    assert_eq!(first.outcome, second.outcome);
}

#[test]
fn test_out_of_range_openings() {
    for slot in [-1, 15] {
        let err = solve(slot, SolverConfig::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PegError>(),
            Some(&PegError::InvalidSlot(slot))
        );
    }
}
