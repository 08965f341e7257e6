//! Score-ranked class filling.

use super::types::PartitionContext;
use crate::roster::Roster;

/// Counters from one fill pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FillStats {
    pub steps: usize,
    pub wraps: usize,
}

/// Fills classes from the cursor onward with the highest-scoring
/// unassigned students until nobody is left.
///
/// A class below target is topped up to target. A class already at or
/// above target still receives a full target-sized batch; after such a
/// step the cursor wraps to `ceil(requested / 2)` once it passes the
/// requested class count.
pub(crate) fn fill_by_score(roster: &mut Roster, ctx: &mut PartitionContext) -> FillStats {
    let mut stats = FillStats::default();

    loop {
        let ranked = roster.unassigned_by_score();
        if ranked.is_empty() {
            break;
        }

        let occupied = roster.occupancy(ctx.cursor);
        let take = if occupied < ctx.target_size {
            ctx.target_size - occupied
        } else {
            ctx.target_size
        };
        let batch = &ranked[..take.min(ranked.len())];
        roster.assign(batch, ctx.cursor);
        tracing::trace!(class = ctx.cursor, occupied, placed = batch.len(), "fill step");

        ctx.cursor += 1;
        stats.steps += 1;

        if occupied >= ctx.target_size && ctx.cursor > ctx.requested {
            ctx.cursor = ctx.requested.div_ceil(2);
            stats.wraps += 1;
            tracing::warn!(
                requested = ctx.requested,
                cursor = ctx.cursor,
                "class cursor overflowed, wrapping to middle class"
            );
        }
    }

    tracing::debug!(steps = stats.steps, wraps = stats.wraps, "filled classes by score");
    stats
}
