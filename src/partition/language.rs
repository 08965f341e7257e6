//! Language-learner cohesion.

use crate::roster::Roster;

/// Moves every language cohort into a single class.
///
/// For each distinct non-empty language group (tags compared verbatim)
/// among students outside the special-education class, every member is
/// reassigned to the rounded (ties to even) mean of the cohort's current
/// class labels. Overrides all earlier placement. Returns the number of
/// cohorts processed.
pub(crate) fn cohere_language_groups(roster: &mut Roster) -> usize {
    let mut cohorts: Vec<(&str, Vec<usize>)> = Vec::new();
    for (pos, s) in roster.students().iter().enumerate() {
        if s.special_ed {
            continue;
        }
        let Some(group) = s.language_group.as_deref().filter(|g| !g.is_empty()) else {
            continue;
        };
        match cohorts.iter_mut().find(|(g, _)| *g == group) {
            Some((_, members)) => members.push(pos),
            None => cohorts.push((group, vec![pos])),
        }
    }

    let moves: Vec<(String, Vec<usize>, u32)> = cohorts
        .into_iter()
        .filter_map(|(group, members)| {
            let labels: Vec<u32> = members
                .iter()
                .filter_map(|&p| roster.students()[p].assigned_class)
                .collect();
            if labels.is_empty() {
                return None;
            }
            let mean = labels.iter().map(|&c| f64::from(c)).sum::<f64>() / labels.len() as f64;
            let class = mean.round_ties_even() as u32;
            Some((group.to_string(), members, class))
        })
        .collect();

    for (group, members, class) in &moves {
        roster.assign(members, *class);
        tracing::debug!(group = %group, members = members.len(), class, "re-homed language cohort");
    }
    moves.len()
}
