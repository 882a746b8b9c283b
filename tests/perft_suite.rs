//! Perft node counts for positions that stress pins, en passant, castling
//! rights and promotions.

use mailbox_chess::board::Position;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PerftCase {
    fen: String,
    depth: u32,
    nodes: u64,
    #[serde(default)]
    slow: bool,
}

#[derive(Debug, Deserialize)]
struct PerftSuite {
    cases: Vec<PerftCase>,
}

fn load_suite() -> PerftSuite {
    let data = include_str!("data/perft_suite.json");
    serde_json::from_str(data).expect("invalid perft_suite.json")
}

fn run(case: &PerftCase) {
    let mut position = Position::from_fen(&case.fen);
    let before = position.clone();
    let nodes = position.perft(case.depth);
    assert_eq!(
        nodes, case.nodes,
        "perft({}) mismatch for fen: {}",
        case.depth, case.fen
    );
    assert_eq!(position, before, "perft left the position modified: {}", case.fen);
}

#[test]
fn perft_suite_fast() {
    let suite = load_suite();
    for case in suite.cases.iter().filter(|c| !c.slow) {
        run(case);
    }
}

#[test]
#[ignore]
fn perft_suite_full() {
    let suite = load_suite();
    let limit = std::env::var("PERFT_LIMIT")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(usize::MAX);

    for (i, case) in suite.cases.iter().take(limit).enumerate() {
        run(case);
        println!("{}/{} ok: {}", i + 1, suite.cases.len(), case.fen);
    }
}

/// Divide totals must add up to the plain perft count.
#[test]
fn divide_sums_to_perft() {
    let suite = load_suite();
    for case in suite.cases.iter().filter(|c| !c.slow && c.depth <= 3) {
        let mut position = Position::from_fen(&case.fen);
        let divide = position.perft_divide(case.depth);
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, case.nodes, "divide mismatch for fen: {}", case.fen);
        assert_eq!(divide.len(), position.legal_moves().len());
    }
}
