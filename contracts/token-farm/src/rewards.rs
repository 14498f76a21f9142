/// Reward owed to a single staker for an accrual interval.
///
/// ```text
/// reward = stake * rate_per_tick * elapsed_ticks / pool_total
/// ```
///
/// The pool emits `rate_per_tick` reward units per tick, split across stakers
/// by their share of `pool_total` at settlement time. Division floors, so a
/// remainder of up to `pool_total - 1` units is dropped per settlement.
///
/// Returns `None` if an intermediate product overflows i128; callers abort
/// the operation rather than credit a clamped amount.
pub fn compute_accrual(
    stake: i128,
    pool_total: i128,
    elapsed_ticks: u32,
    rate_per_tick: i128,
) -> Option<i128> {
    if pool_total <= 0 || elapsed_ticks == 0 {
        return Some(0);
    }

    stake
        .checked_mul(rate_per_tick)?
        .checked_mul(elapsed_ticks as i128)?
        .checked_div(pool_total)
}
