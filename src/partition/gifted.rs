//! Gifted cohort distribution.

use super::types::{GiftedPlacement, PartitionContext};
use crate::roster::Roster;

/// Gifted population at or above which the cohort is split three ways.
pub const THREE_WAY_THRESHOLD: usize = 30;

/// Places gifted students in one, two or three classes starting at the cursor.
///
/// The split decision compares the *total* gifted count, special-education
/// overlap included, against the target class size; only the non-isolated
/// cohort is actually placed. Split groups are cut from the cohort in
/// roster order, not by score. The cursor only advances on the
/// single-class branch.
pub(crate) fn distribute_gifted(roster: &mut Roster, ctx: &mut PartitionContext) -> GiftedPlacement {
    if !roster.has_gifted() {
        return GiftedPlacement::Skipped;
    }

    let cohort: Vec<usize> = roster
        .students()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.gifted && !s.special_ed)
        .map(|(i, _)| i)
        .collect();
    let cohort_size = roster.students().iter().filter(|s| s.gifted).count();
    let cursor = ctx.cursor;

    let placement = if cohort_size > ctx.target_size {
        if cohort_size >= THREE_WAY_THRESHOLD {
            let first = share(cohort_size, 3);
            let second = first;
            let third = cohort_size - first - second;
            roster.assign(head(&cohort, first), cursor);
            roster.assign(middle(&cohort, first, first + second), cursor + 1);
            roster.assign(tail(&cohort, third), cursor + 2);
            GiftedPlacement::ThreeWay {
                first_class: cursor,
            }
        } else {
            let first = share(cohort_size, 2);
            let second = cohort_size - first;
            roster.assign(head(&cohort, first), cursor);
            roster.assign(tail(&cohort, second), cursor + 1);
            GiftedPlacement::TwoWay {
                first_class: cursor,
            }
        }
    } else {
        roster.assign(&cohort, cursor);
        let top_up: Vec<usize> = roster
            .unassigned_by_score()
            .into_iter()
            .take(ctx.target_size - cohort_size)
            .collect();
        roster.assign(&top_up, cursor);
        ctx.cursor += 1;
        GiftedPlacement::Single { class: cursor }
    };

    tracing::debug!(
        cohort = cohort.len(),
        cohort_size,
        target_size = ctx.target_size,
        ?placement,
        "distributed gifted cohort"
    );
    placement
}

/// `round(n / parts)`, ties to even.
fn share(n: usize, parts: usize) -> usize {
    (n as f64 / parts as f64).round_ties_even() as usize
}

fn head(v: &[usize], k: usize) -> &[usize] {
    &v[..k.min(v.len())]
}

fn middle(v: &[usize], start: usize, end: usize) -> &[usize] {
    let end = end.min(v.len());
    &v[start.min(end)..end]
}

fn tail(v: &[usize], k: usize) -> &[usize] {
    &v[v.len() - k.min(v.len())..]
}
