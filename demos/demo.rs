//! End-to-end demo of the soroban training engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `soroban_drill_gen` works end to end:
//!
//! 1. **Both modes** — one exercise per mode with fixed seeds, so the output
//!    is deterministic and reproducible.
//! 2. **Replay and compilation** — the value trace from `replay_task` and
//!    the bead-level atomic steps from `build_steps`.
//! 3. **Answer options** — a shuffled multiple-choice set around the answer.
//! 4. **Session scoring** — recording answers and printing the summary.

use rand::rngs::StdRng;
use rand::SeedableRng;

use soroban_drill_gen::{
    build_steps, generate_answer_options_with, generate_task, replay_task, ColumnDelta,
    DisplayHint, SessionTracker, Task, TaskMode, TaskRequest,
};

/// Generate and pretty-print one exercise, its trace, and its bead moves.
fn print_task(mode: TaskMode, chain_length: usize, seed: u64) -> Task {
    let task = generate_task(TaskRequest {
        mode,
        chain_length,
        display: DisplayHint::Column,
        rng_seed: Some(seed),
    });

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  seed: {}  range: [{}, {}]", task.mode(), seed,
        task.constraints.range().min, task.constraints.range().max);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Start: {}", task.start);
    for step in &task.chain {
        println!("    {step}");
    }
    println!("  Answer: {}", task.answer);
    println!("  Trace:  {:?}", replay_task(&task));

    // Compile the whole task (seeded with its start value) into atomic bead
    // moves, the way an animation layer would.
    let mut ops = Vec::with_capacity(task.operations.len() + 1);
    if task.start != 0 {
        ops.push(ColumnDelta { column: 0, delta: task.start });
    }
    ops.extend_from_slice(&task.operations);
    match build_steps(&ops, 1) {
        Ok(steps) => {
            let codes: Vec<String> = steps.iter().map(|s| s.kind.to_string()).collect();
            println!("  Beads:  {}", codes.join(" "));
        }
        Err(err) => println!("  Beads:  compile failed: {err}"),
    }
    println!();
    task
}

fn main() {
    // ── Minimal API ────────────────────────────────────────────────────────
    // TaskRequest::new() only requires a mode — everything else defaults.
    println!();
    println!("══ Minimal API: TaskRequest::new() ══");
    println!();
    let task = generate_task(TaskRequest::new(TaskMode::Simple));
    println!("  {} task: {} {} = {}", task.mode(), task.start,
        task.chain.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" "),
        task.answer);
    println!();

    // ── Both modes, fixed seeds ────────────────────────────────────────────
    println!("══ Both modes (deterministic) ══");
    println!();
    print_task(TaskMode::Simple, 3, 1001);
    let five_task = print_task(TaskMode::SimpleWithFive, 4, 2002);

    // ── Answer options ─────────────────────────────────────────────────────
    println!("══ Multiple-choice options ══");
    println!();
    let mut rng = StdRng::seed_from_u64(3003);
    let range = five_task.constraints.range();
    let options = generate_answer_options_with(
        &mut rng,
        five_task.answer,
        3,
        (range.min, range.max),
    );
    println!("  Answer {} hidden among {:?}", five_task.answer, options);
    println!();

    // ── Session scoring ────────────────────────────────────────────────────
    println!("══ Session scoring ══");
    println!();
    let mut tracker = SessionTracker::new(3);
    for (seed, offset) in [(10u64, 0), (11, 1), (12, 0)] {
        let task = generate_task(TaskRequest {
            mode: TaskMode::Simple,
            chain_length: 3,
            display: DisplayHint::Column,
            rng_seed: Some(seed),
        });
        let given = task.answer + offset;
        let correct = tracker.record(task, given, 1200);
        println!("  answered {given}: {}", if correct { "correct" } else { "wrong" });
    }
    let summary = tracker.finish(4100);
    println!(
        "  {}/{} correct ({}%), best streak {}",
        summary.success, summary.total, summary.percent(), summary.best_streak
    );
}
