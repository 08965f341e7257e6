//! Special-education isolation.

use super::types::PartitionContext;
use crate::roster::Roster;

/// Places every special-education student in class 1.
///
/// When at least one exists, the cursor moves to 2 and one class is taken
/// out of the balancing budget. Returns the number of students isolated.
pub(crate) fn isolate_special_ed(roster: &mut Roster, ctx: &mut PartitionContext) -> usize {
    let positions: Vec<usize> = roster
        .students()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.special_ed)
        .map(|(i, _)| i)
        .collect();
    if positions.is_empty() {
        return 0;
    }

    roster.assign(&positions, ctx.cursor);
    ctx.cursor += 1;
    ctx.budget = ctx.budget.saturating_sub(1);

    tracing::debug!(count = positions.len(), "isolated special-education students");
    positions.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Student;

    #[test]
    fn test_isolates_all_into_class_one() {
        let mut roster = Roster::new(vec![
            Student::new(0, 50.0).with_special_ed(true),
            Student::new(1, 60.0),
            Student::new(2, 70.0).with_special_ed(true),
        ]);
        let mut ctx = PartitionContext::new(3);

        assert_eq!(isolate_special_ed(&mut roster, &mut ctx), 2);
        assert_eq!(roster.students()[0].assigned_class, Some(1));
        assert_eq!(roster.students()[1].assigned_class, None);
        assert_eq!(roster.students()[2].assigned_class, Some(1));
        assert_eq!(ctx.cursor, 2);
        assert_eq!(ctx.budget, 2);
    }

    #[test]
    fn test_noop_without_special_ed() {
        let mut roster = Roster::new(vec![Student::new(0, 50.0)]);
        let mut ctx = PartitionContext::new(3);

        assert_eq!(isolate_special_ed(&mut roster, &mut ctx), 0);
        assert_eq!(ctx, PartitionContext::new(3));
    }
}
