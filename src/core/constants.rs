// Session
pub const MAX_LIVES: u32 = 10;
pub const SECONDS_PER_QUESTION: u32 = 7;
pub const POINTS_PER_CORRECT: u32 = 10;
pub const LIVES_LIMIT: u32 = 99;
pub const SECONDS_LIMIT: u32 = 99;

// Timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const NEXT_QUESTION_DELAY_MS: u64 = 300;
pub const FEEDBACK_FLASH_MS: u64 = 400;
pub const INPUT_POLL_MS: u64 = 50;

// Questions
pub const MIN_OPERAND: u32 = 2;
pub const MAX_OPERAND: u32 = 9;
pub const OPTION_COUNT: usize = 4;

// Distractor generation
pub const NEAR_ANSWER_CHANCE: f64 = 0.3;
pub const NEIGHBOR_ROW_CHANCE: f64 = 0.3;
pub const NEAR_ANSWER_SPREAD: i64 = 2;
pub const NEIGHBOR_ROW_SPREAD: i64 = 1;
pub const RANDOM_FACTOR_MAX: i64 = 9;
pub const MAX_DISTRACTOR_ATTEMPTS: u32 = 1000;
