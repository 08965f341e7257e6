//! Target class size planning.

use super::types::PartitionContext;
use crate::error::ValidationError;
use crate::roster::Roster;

/// Computes `ceil(unassigned / budget)` into `ctx.target_size`, then
/// restores the full class budget.
pub(crate) fn plan_capacity(
    roster: &Roster,
    ctx: &mut PartitionContext,
) -> Result<(), ValidationError> {
    if ctx.budget == 0 {
        return Err(ValidationError::DegenerateBudget);
    }

    let remaining = roster.unassigned_count();
    ctx.target_size = remaining.div_ceil(ctx.budget as usize);
    ctx.budget = ctx.requested;

    tracing::debug!(
        remaining,
        target_size = ctx.target_size,
        "planned class capacity"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::isolate::isolate_special_ed;
    use crate::roster::Student;

    fn roster(n: usize, special: usize) -> Roster {
        Roster::new(
            (0..n)
                .map(|i| Student::new(i, i as f64).with_special_ed(i < special))
                .collect(),
        )
    }

    #[test]
    fn test_target_rounds_up() {
        let r = roster(10, 0);
        let mut ctx = PartitionContext::new(3);
        plan_capacity(&r, &mut ctx).unwrap();
        assert_eq!(ctx.target_size, 4);
        assert_eq!(ctx.budget, 3);
    }

    #[test]
    fn test_budget_restored_after_isolation() {
        let mut r = roster(11, 2);
        let mut ctx = PartitionContext::new(4);
        isolate_special_ed(&mut r, &mut ctx);
        assert_eq!(ctx.budget, 3);

        plan_capacity(&r, &mut ctx).unwrap();
        // 9 remaining over 3 classes
        assert_eq!(ctx.target_size, 3);
        assert_eq!(ctx.budget, 4);
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let mut r = roster(5, 1);
        let mut ctx = PartitionContext::new(1);
        isolate_special_ed(&mut r, &mut ctx);
        assert_eq!(
            plan_capacity(&r, &mut ctx),
            Err(ValidationError::DegenerateBudget)
        );
    }
}
