//! N-Queens placement search and solution counting.
//!
//! Two siblings share one safety predicate:
//! - `solve` runs a first-solution depth-first search and records every
//!   placement, removal, and backtrack as a [`Step`], for replay by a UI.
//! - `count_solutions` walks the entire search space and only counts, keeping
//!   the tracing hot path free of counting and the counting path free of
//!   per-step allocation.
//!
//! Rows are assigned top to bottom, columns tried in ascending order. No
//! heuristic ordering or pruning beyond the non-attack check: the point is
//! showing naive backtracking, not optimized search.

use crate::trace::{Step, StepAction};

/// Checks whether a queen at `(row, col)` attacks any previously placed queen.
///
/// One comparison per assigned row covers all three attack lines: same column,
/// and both diagonals (a diagonal attack means the column offset equals the
/// row distance in either direction).
fn is_safe(queens: &[Option<usize>], row: usize, col: usize) -> bool {
    for prior_row in 0..row {
        let Some(prior_col) = queens[prior_row] else {
            continue;
        };
        let distance = row - prior_row;
        if prior_col == col || prior_col + distance == col || col + distance == prior_col {
            return false;
        }
    }
    true
}

/// Traces a first-solution search for `board_size` queens.
///
/// Returns the full ordered step sequence; the search stops at the first
/// valid placement of all queens. For sizes with no solution (2 and 3) the
/// trace ends without a `Complete` step. A zero board vacuously succeeds
/// with an immediate `Complete`.
pub fn solve(board_size: usize) -> Vec<Step> {
    let mut queens: Vec<Option<usize>> = vec![None; board_size];
    let mut steps = Vec::new();

    steps.push(Step::record(
        &queens,
        Some(0),
        StepAction::Assign,
        "Starting the N-Queens algorithm".to_string(),
    ));

    search(&mut queens, &mut steps, 0, board_size);

    steps
}

/// Recursive row-by-row placement; returns whether a solution was completed.
fn search(
    queens: &mut [Option<usize>],
    steps: &mut Vec<Step>,
    row: usize,
    board_size: usize,
) -> bool {
    if row >= board_size {
        steps.push(Step::record(
            queens,
            None,
            StepAction::Complete,
            "Solution found! All queens have been placed successfully.".to_string(),
        ));
        return true;
    }

    for col in 0..board_size {
        if is_safe(queens, row, col) {
            queens[row] = Some(col);
            steps.push(Step::record(
                queens,
                Some(row),
                StepAction::Assign,
                format!("Placing queen at row {}, column {}", row + 1, col + 1),
            ));

            if search(queens, steps, row + 1, board_size) {
                // first-solution semantics: stop exploring further columns
                return true;
            }

            queens[row] = None;
            steps.push(Step::record(
                queens,
                Some(row),
                StepAction::Unassign,
                format!("Removing queen from row {}, column {}", row + 1, col + 1),
            ));
        }
    }

    steps.push(Step::record(
        queens,
        row.checked_sub(1),
        StepAction::Backtrack,
        format!(
            "No valid placement found in row {}, backtracking to row {}",
            row + 1,
            row
        ),
    ));

    false
}

/// Counts all complete valid placements for a `board_size` board.
///
/// Explores every column at every row with no early termination and no step
/// recording. The one working buffer is allocated up front and mutated in
/// place for the whole traversal.
pub fn count_solutions(board_size: usize) -> usize {
    let mut queens: Vec<Option<usize>> = vec![None; board_size];
    count(&mut queens, 0, board_size)
}

fn count(queens: &mut [Option<usize>], row: usize, board_size: usize) -> usize {
    if row == board_size {
        return 1;
    }

    let mut total = 0;
    for col in 0..board_size {
        if is_safe(queens, row, col) {
            queens[row] = Some(col);
            total += count(queens, row + 1, board_size);
            queens[row] = None;
        }
    }
    total
}

/// Formats a board assignment as an ASCII grid.
///
/// One line per row, `Q` for the assigned column, `.` elsewhere.
pub fn format_board(assignment: &[Option<usize>]) -> String {
    let size = assignment.len();
    let mut output = String::new();

    for &slot in assignment {
        for col in 0..size {
            if col > 0 {
                output.push(' ');
            }
            output.push(if slot == Some(col) { 'Q' } else { '.' });
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{is_solved, solution_step};

    /// Asserts a complete assignment is pairwise non-attacking.
    fn assert_valid_placement(assignment: &[Option<usize>], board_size: usize) {
        assert_eq!(assignment.len(), board_size);
        let columns: Vec<usize> = assignment
            .iter()
            .map(|slot| slot.expect("solution step must have a full assignment"))
            .collect();

        for (row, &col) in columns.iter().enumerate() {
            assert!(col < board_size, "column {col} out of range for row {row}");
            for (other_row, &other_col) in columns.iter().enumerate().skip(row + 1) {
                let distance = other_row - row;
                assert_ne!(col, other_col, "rows {row} and {other_row} share a column");
                assert!(
                    col + distance != other_col && other_col + distance != col,
                    "rows {row} and {other_row} share a diagonal"
                );
            }
        }
    }

    #[test]
    fn test_solvable_sizes_end_in_valid_placements() {
        for board_size in [1, 4, 5, 6, 7, 8] {
            let steps = solve(board_size);
            let solution = solution_step(&steps)
                .unwrap_or_else(|| panic!("no solution found for board size {board_size}"));
            assert_valid_placement(&solution.assignment, board_size);
            // terminal step carries the sentinel focus
            assert_eq!(solution.focus, None);
        }
    }

    #[test]
    fn test_unsolvable_sizes_produce_no_complete_step() {
        for board_size in [2, 3] {
            let steps = solve(board_size);
            assert!(!is_solved(&steps), "board size {board_size} has no solution");
            assert!(steps.len() > 1, "exhaustion still produces a full trace");
        }
    }

    #[test]
    fn test_first_solution_for_four_queens() {
        let steps = solve(4);
        let solution = solution_step(&steps).unwrap();
        // column-ascending DFS reaches this solution first
        assert_eq!(solution.assignment, vec![Some(1), Some(3), Some(0), Some(2)]);
    }

    #[test]
    fn test_one_queen_places_and_completes() {
        let steps = solve(1);
        let actions: Vec<StepAction> = steps.iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![StepAction::Assign, StepAction::Assign, StepAction::Complete]
        );
    }

    #[test]
    fn test_zero_board_completes_vacuously() {
        let steps = solve(0);
        assert!(is_solved(&steps));
        assert_eq!(solution_step(&steps).unwrap().assignment, Vec::<Option<usize>>::new());
    }

    #[test]
    fn test_trace_starts_with_empty_board() {
        let steps = solve(4);
        assert_eq!(steps[0].message, "Starting the N-Queens algorithm");
        assert_eq!(steps[0].assignment, vec![None; 4]);
    }

    #[test]
    fn test_solution_counts() {
        assert_eq!(count_solutions(1), 1);
        assert_eq!(count_solutions(2), 0);
        assert_eq!(count_solutions(3), 0);
        assert_eq!(count_solutions(4), 2);
        assert_eq!(count_solutions(8), 92);
    }

    #[test]
    fn test_trace_is_deterministic() {
        assert_eq!(solve(6), solve(6));
    }

    #[test]
    fn test_snapshots_are_independent_storage() {
        let mut steps = solve(4);

        // find two distinct steps recorded with equal board states
        let (first, second) = (0..steps.len())
            .flat_map(|a| (a + 1..steps.len()).map(move |b| (a, b)))
            .find(|&(a, b)| steps[a].assignment == steps[b].assignment)
            .expect("a backtracking trace revisits board states");

        steps[first].assignment[0] = Some(99);
        assert_ne!(steps[first].assignment, steps[second].assignment);
    }

    #[test]
    fn test_sparse_sizes_backtrack_more() {
        let backtrack_events = |board_size: usize| {
            solve(board_size)
                .iter()
                .filter(|s| matches!(s.action, StepAction::Unassign | StepAction::Backtrack))
                .count()
        };
        // solutions are sparse at 6; the trace grows with the extra rejections
        assert!(backtrack_events(6) > backtrack_events(5));
    }

    #[test]
    fn test_format_board_marks_queens() {
        let board = format_board(&[Some(1), None]);
        assert_eq!(board, ". Q\n. .\n");
    }
}
