//! Session scoring: plain records the results layer renders.
//!
//! The tracker is pure bookkeeping — the caller supplies per-question and
//! whole-session durations, so the core stays free of clock I/O.

use serde::{Deserialize, Serialize};

use crate::training_engine::generator::replay_task;
use crate::training_engine::models::Task;

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub task: Task,
    /// The learner's answer.
    pub given: i32,
    pub correct: bool,
    pub time_ms: u32,
    /// Value trace of the task, kept for per-question playback on the
    /// results screen.
    pub trace: Vec<i32>,
}

/// Final session figures handed to the results layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub success: usize,
    pub total: usize,
    pub duration_ms: u32,
    pub best_streak: usize,
    pub history: Vec<AnswerRecord>,
}

impl SessionSummary {
    /// Rounded success rate in percent; 0 for an empty session.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.success as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Accumulates answers over one training session of `total_rounds` questions.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    total_rounds: usize,
    correct: usize,
    streak: usize,
    best_streak: usize,
    history: Vec<AnswerRecord>,
}

impl SessionTracker {
    pub fn new(total_rounds: usize) -> Self {
        SessionTracker { total_rounds: total_rounds.max(1), ..Default::default() }
    }

    pub fn answered(&self) -> usize {
        self.history.len()
    }

    pub fn is_complete(&self) -> bool {
        self.history.len() >= self.total_rounds
    }

    /// Record one answer and return whether it was correct. A wrong answer
    /// resets the running streak.
    pub fn record(&mut self, task: Task, given: i32, time_ms: u32) -> bool {
        let correct = given == task.answer;
        if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        let trace = replay_task(&task);
        self.history.push(AnswerRecord { task, given, correct, time_ms, trace });
        correct
    }

    /// Close the session. `duration_ms` is the wall-clock span measured by
    /// the caller.
    pub fn finish(self, duration_ms: u32) -> SessionSummary {
        SessionSummary {
            success: self.correct,
            total: self.total_rounds,
            duration_ms,
            best_streak: self.best_streak,
            history: self.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::generator::generate_task_with;
    use crate::training_engine::models::{DisplayHint, TaskMode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn task(seed: u64) -> Task {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_task_with(&mut rng, TaskMode::Simple, 3, DisplayHint::Column)
    }

    #[test]
    fn streak_resets_on_a_wrong_answer() {
        let mut tracker = SessionTracker::new(4);
        for seed in 0..2 {
            let t = task(seed);
            let answer = t.answer;
            assert!(tracker.record(t, answer, 900));
        }
        let t = task(2);
        let wrong = t.answer + 1;
        assert!(!tracker.record(t, wrong, 1500));
        let t = task(3);
        let answer = t.answer;
        assert!(tracker.record(t, answer, 700));

        let summary = tracker.finish(5000);
        assert_eq!(summary.success, 3);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.best_streak, 2);
        assert_eq!(summary.percent(), 75);
        assert_eq!(summary.history.len(), 4);
        assert!(!summary.history[2].correct);
    }

    #[test]
    fn records_carry_the_replay_trace() {
        let mut tracker = SessionTracker::new(1);
        let t = task(42);
        let expected = replay_task(&t);
        tracker.record(t, 0, 100);
        assert!(tracker.is_complete());

        let summary = tracker.finish(100);
        assert_eq!(summary.history[0].trace, expected);
        assert_eq!(summary.history[0].trace.len(), 4);
    }

    #[test]
    fn empty_session_percent_is_zero() {
        let summary = SessionSummary {
            success: 0,
            total: 0,
            duration_ms: 0,
            best_streak: 0,
            history: Vec::new(),
        };
        assert_eq!(summary.percent(), 0);
    }
}
