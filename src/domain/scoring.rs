//! スコアリングエンジン
//!
//! 正答に対するポイント計算。速く答えるほど高得点になり、どれだけ遅くても
//! 正答には最低 10 ポイントが与えられます。

/// Points for an instant correct answer
pub const MAX_POINTS: u32 = 1000;

/// Floor awarded for any correct answer, however slow
pub const MIN_POINTS: u32 = 10;

/// Points deducted per second of answer time
const SPEED_PENALTY_PER_SECOND: f64 = 40.0;

/// Compute the points awarded for a correct answer.
///
/// The formula is `max(10, 1000 - floor(time_taken * 40))`. Negative
/// `time_taken` values (from a client with a skewed clock) are treated
/// as zero.
pub fn points_for_correct_answer(time_taken_seconds: f64) -> u32 {
    let time_taken = if time_taken_seconds.is_finite() {
        time_taken_seconds.max(0.0)
    } else {
        0.0
    };
    let penalty = (time_taken * SPEED_PENALTY_PER_SECOND).floor() as i64;
    (MAX_POINTS as i64 - penalty).max(MIN_POINTS as i64) as u32
}
