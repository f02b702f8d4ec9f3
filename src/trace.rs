//! Step records shared by both backtracking engines.
//!
//! Each engine invocation returns an ordered `Vec<Step>` tracing every state
//! transition of the search. Steps are appended in strict chronological order
//! and never mutated after the search returns; a replaying UI indexes into the
//! sequence at its own pace.

use serde::Serialize;

/// The closed set of actions a search can record.
///
/// `Conflict` is only produced by the coloring engine (a rejected same-node
/// attempt, distinct from backtracking). `Unassign` undoes one assignment
/// after a failed recursive branch; `Backtrack` marks a row or node whose
/// every candidate has been exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepAction {
    Assign,
    Conflict,
    Unassign,
    Backtrack,
    Complete,
}

/// One recorded state transition of a backtracking search.
///
/// `assignment` is a full copy of the working buffer taken at record time,
/// never a shared handle into it. Slots hold the assigned column (queens) or
/// color (coloring), `None` for unassigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Snapshot of the assignment as it existed at this instant.
    pub assignment: Vec<Option<usize>>,
    /// The row or node this step concerns; `None` for terminal steps and for
    /// a backtrack out of row/node 0.
    pub focus: Option<usize>,
    pub action: StepAction,
    /// Human-readable narration for the step (1-based indices).
    pub message: String,
}

impl Step {
    /// Records a step, snapshotting the live assignment buffer.
    pub(crate) fn record(
        assignment: &[Option<usize>],
        focus: Option<usize>,
        action: StepAction,
        message: String,
    ) -> Self {
        Self {
            assignment: assignment.to_vec(),
            focus,
            action,
            message,
        }
    }
}

/// Returns the terminal solution step of a trace, if the search succeeded.
///
/// A trace lacking a `Complete` step is an exhausted search; that is the only
/// caller-visible failure mode, detected by inspection rather than by error.
pub fn solution_step(steps: &[Step]) -> Option<&Step> {
    steps.iter().find(|step| step.action == StepAction::Complete)
}

/// Whether a trace ends in a found solution.
pub fn is_solved(steps: &[Step]) -> bool {
    solution_step(steps).is_some()
}

/// Formats a trace as numbered narration lines, one per step.
///
/// Deterministic for a given trace, so suitable for snapshot testing and for
/// the text export alongside the JSON one.
pub fn format_trace(steps: &[Step]) -> String {
    let mut output = String::new();
    for (index, step) in steps.iter().enumerate() {
        output.push_str(&format!("{:>4}. {}\n", index + 1, step.message));
    }
    output
}
