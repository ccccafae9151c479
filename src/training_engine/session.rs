//! Session scoring and the compare-numbers session driver.
//!
//! [`SessionScore`] is plain bookkeeping shared by every trainer: counters,
//! streaks, history and the two termination limits. The engine never reads
//! a clock; callers pass the elapsed time in.
//!
//! [`Session`] ties a prepared generator, an RNG and a score together for
//! the compare trainer: one exercise on screen at a time, one answer each.

use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DrillError, Result};
use crate::training_engine::{
    config::RawConfig,
    domain::{can_generate, prepare_generator},
    exercise::{generate_exercise, EXERCISE_ATTEMPTS},
    models::{GeneratedExercise, PreparedGenerator, Relation},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLimits {
    pub time_limit: Option<Duration>,
    pub exercise_limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub prompt: String,
    pub given: String,
    pub expected: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionScore {
    pub correct_count: u32,
    pub wrong_count: u32,
    pub streak: u32,
    pub best_streak: u32,
    /// Chronological; see [`SessionScore::recent`] for newest first.
    pub history: Vec<HistoryEntry>,
    pub limits: SessionLimits,
    pub game_over: bool,
}

impl SessionScore {
    pub fn new(limits: SessionLimits) -> Self {
        SessionScore { limits, ..SessionScore::default() }
    }

    pub fn answered(&self) -> u32 {
        self.correct_count + self.wrong_count
    }

    /// Percentage of correct answers, rounded; 0 before the first answer.
    pub fn accuracy(&self) -> u32 {
        let total = self.answered();
        if total == 0 {
            return 0;
        }
        (self.correct_count as f64 / total as f64 * 100.0).round() as u32
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        if entry.correct {
            self.correct_count += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.wrong_count += 1;
            self.streak = 0;
        }
        self.history.push(entry);
    }

    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev()
    }

    /// Latch `game_over` once either limit is reached. Returns the flag.
    pub fn check_limits(&mut self, elapsed: Duration) -> bool {
        let out_of_time = self.limits.time_limit.is_some_and(|limit| elapsed >= limit);
        let out_of_tasks = self.limits.exercise_limit.is_some_and(|limit| self.answered() >= limit);
        if (out_of_time || out_of_tasks) && !self.game_over {
            debug!(out_of_time, out_of_tasks, answered = self.answered(), "session over");
            self.game_over = true;
        }
        self.game_over
    }
}

/// Result of one submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub expected: Relation,
    pub game_over: bool,
}

/// A running compare-numbers session.
pub struct Session<R: Rng = StdRng> {
    prepared: PreparedGenerator,
    rng: R,
    score: SessionScore,
    current: Option<GeneratedExercise>,
}

impl Session<StdRng> {
    /// Start a session; a seed makes the whole exercise sequence reproducible.
    pub fn new(config: &RawConfig, limits: SessionLimits, rng_seed: Option<u64>) -> Result<Self> {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session::with_rng(config, limits, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: &RawConfig, limits: SessionLimits, rng: R) -> Result<Self> {
        let prepared = prepare_generator(config);
        if !can_generate(&prepared) {
            return Err(DrillError::NoAvailableTypes);
        }
        Ok(Session { prepared, rng, score: SessionScore::new(limits), current: None })
    }

    pub fn prepared(&self) -> &PreparedGenerator {
        &self.prepared
    }

    pub fn score(&self) -> &SessionScore {
        &self.score
    }

    pub fn current(&self) -> Option<&GeneratedExercise> {
        self.current.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.score.game_over
    }

    /// The exercise to show. An unanswered exercise is returned again.
    /// Generator exhaustion ends the session.
    pub fn next_exercise(&mut self) -> Result<&GeneratedExercise> {
        if self.score.game_over {
            return Err(DrillError::SessionOver);
        }
        if self.current.is_none() {
            match generate_exercise(&self.prepared, &mut self.rng) {
                Some(exercise) => self.current = Some(exercise),
                None => {
                    self.score.game_over = true;
                    return Err(DrillError::GeneratorExhausted { attempts: EXERCISE_ATTEMPTS });
                }
            }
        }
        self.current.as_ref().ok_or(DrillError::NoActiveExercise)
    }

    /// Score an answer to the current exercise. Answers arriving after the
    /// time limit are not counted.
    pub fn submit(&mut self, given: Relation, elapsed: Duration) -> Result<AnswerOutcome> {
        if self.score.check_limits(elapsed) {
            return Err(DrillError::SessionOver);
        }
        let exercise = self.current.take().ok_or(DrillError::NoActiveExercise)?;
        let correct = given == exercise.correct_relation;
        self.score.record(HistoryEntry {
            prompt: format!("{} ? {}", exercise.left.display, exercise.right.display),
            given: given.to_string(),
            expected: exercise.correct_relation.to_string(),
            correct,
        });
        let game_over = self.score.check_limits(elapsed);
        Ok(AnswerOutcome { correct, expected: exercise.correct_relation, game_over })
    }

    /// Poll the time limit between answers.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.score.check_limits(elapsed)
    }
}
