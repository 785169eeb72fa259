use queens_search::board::Board;
use queens_search::error::QueensError;
use queens_search::search::{run, Strategy};
use queens_search::validate;

fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

#[test]
fn four_queens_has_2_solutions() {
    let report = run(Strategy::Permutations, 4, |_| {}).unwrap();
    assert_eq!(report.solutions, 2);
    assert_eq!(report.candidates, factorial(4));
}

#[test]
fn five_queens_has_10_solutions() {
    let report = run(Strategy::Permutations, 5, |_| {}).unwrap();
    assert_eq!(report.solutions, 10);
    assert_eq!(report.candidates, factorial(5));
}

#[test]
fn six_queens_has_4_solutions() {
    let report = run(Strategy::Permutations, 6, |_| {}).unwrap();
    assert_eq!(report.solutions, 4);
    assert_eq!(report.candidates, factorial(6));
}

#[test]
fn eight_queens_has_92_solutions_among_40320_candidates() {
    let report = run(Strategy::Permutations, 8, |_| {}).unwrap();
    assert_eq!(report.solutions, 92);
    assert_eq!(report.candidates, 40320);
}

#[test]
fn odometer_agrees_on_four_queens_over_the_full_space() {
    let report = run(Strategy::Odometer, 4, |_| {}).unwrap();
    assert_eq!(report.solutions, 2);
    // 4^4 one-queen-per-row boards, columns free to repeat.
    assert_eq!(report.candidates, 256);
}

#[test]
fn every_reported_solution_passes_the_validator() {
    let mut seen: Vec<Board> = Vec::new();
    run(Strategy::Permutations, 6, |board| seen.push(board.clone())).unwrap();

    assert_eq!(seen.len(), 4);
    for board in &seen {
        assert_eq!(validate::is_valid(board), Ok(true));
    }
}

#[test]
fn undersized_boards_are_rejected_before_any_search() {
    for n in [0, 3] {
        let err = run(Strategy::Permutations, n, |_| {
            panic!("no candidate should be produced for n={n}");
        })
        .unwrap_err();
        assert_eq!(err, QueensError::InvalidSize { n, min: 4 });
    }
}
