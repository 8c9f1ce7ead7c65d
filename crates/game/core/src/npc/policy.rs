//! Cooldown-aware weighted move selection.
//!
//! The candidate pool is every move whose cooldown has elapsed. When nothing is ready the
//! whole move-set is used instead, so an enemy can always act. Selection is inverse-CDF
//! over `max(1, weight)`: draw `roll` in `[1, total]`, then walk the pool subtracting
//! weights until `roll <= 0`.

use super::moves::EnemyMove;
use crate::env::RandomSource;

/// Index into `moves` of the selected move, or `None` for an empty move-set.
///
/// Consumes exactly one draw when `moves` is non-empty.
pub fn choose_move<R: RandomSource + ?Sized>(moves: &[EnemyMove], rng: &mut R) -> Option<usize> {
    if moves.is_empty() {
        return None;
    }

    let ready: Vec<usize> = (0..moves.len()).filter(|&i| moves[i].is_ready()).collect();
    let pool: Vec<usize> = if ready.is_empty() {
        (0..moves.len()).collect()
    } else {
        ready
    };

    let total: i64 = pool.iter().map(|&i| moves[i].effective_weight() as i64).sum();
    let total = i32::try_from(total).unwrap_or(i32::MAX);
    let mut roll = rng.uniform(1, total);

    for &i in &pool {
        roll -= moves[i].effective_weight();
        if roll <= 0 {
            return Some(i);
        }
    }

    // Only reachable if the source returned a value above `total`.
    pool.last().copied()
}

/// `current = max(current, base)`.
pub fn apply_cooldown(mv: &mut EnemyMove) {
    mv.current_cooldown = mv.current_cooldown.max(mv.base_cooldown.max(0));
}

/// Decrements every counter by one, floored at zero.
pub fn tick_cooldowns(moves: &mut [EnemyMove]) {
    for mv in moves {
        mv.current_cooldown = (mv.current_cooldown - 1).max(0);
    }
}
