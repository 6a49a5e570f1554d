use serde_json::{json, Value};

use crate::training_engine::compiler::build_steps;
use crate::training_engine::error::EngineError;
use crate::training_engine::generator::replay_task;
use crate::training_engine::helpers::PRIMARY_COLUMN;
use crate::training_engine::models::{BeadState, ColumnDelta, CompiledStep, DisplayHint, Task};

/// Render the chain as one inline expression, e.g. `"3 +1 -2"`.
fn inline_expression(task: &Task) -> String {
    let mut parts = vec![task.start.to_string()];
    parts.extend(task.chain.iter().map(|step| step.to_string()));
    parts.join(" ")
}

/// Bead state in the `{U, L}` shape the web view reads (U as 0/1).
fn bead_state_json(state: BeadState) -> Value {
    json!({ "U": u8::from(state.upper), "L": state.lower })
}

/// One playback frame: target column, wire code, post-state.
fn frame_json(step: &CompiledStep) -> Value {
    json!({
        "col": step.column,
        "type": step.kind.to_string(),
        "after": bead_state_json(step.after),
    })
}

/// Map a task to the JSON playback payload the abacus view consumes: the
/// task header, the value trace, and one frame per atomic bead move.
///
/// The frames replay from a cleared frame of `columns` digits, so for tasks
/// whose start is non-zero the start value is raised first; `setup_frames`
/// counts those leading frames so the view can fast-forward them before
/// animating the chain itself. The value trace covers the chain only.
/// Compilation fails only for a task whose operations are illegal from its
/// own start; with a generator-produced task that would be a bug upstream.
pub fn to_view_playback(task: &Task, columns: usize) -> Result<Value, EngineError> {
    let mut ops = Vec::with_capacity(task.operations.len() + 1);
    if task.start != 0 {
        ops.push(ColumnDelta { column: PRIMARY_COLUMN, delta: task.start });
    }
    ops.extend_from_slice(&task.operations);

    let steps = build_steps(&ops, columns)?;
    let frames: Vec<Value> = steps.iter().map(frame_json).collect();

    // Greedy decomposition of the start seed: one toggle if it crosses the
    // bar, unit moves for the rest.
    let setup_frames = if task.start >= 5 {
        1 + (task.start as usize - 5)
    } else {
        task.start.max(0) as usize
    };

    let display = match task.display {
        DisplayHint::Column => "column",
        DisplayHint::Inline => "inline",
    };

    Ok(json!({
        "mode": task.mode().to_string(),
        "start": task.start,
        "answer": task.answer,
        "display": display,
        "expression": inline_expression(task),
        "trace": replay_task(task),
        "setup_frames": setup_frames,
        "steps": frames,
    }))
}
