//! Property tests for the partitioning pipeline over random rosters.

use super::{partition, PartitionConfig, PartitionRunner};
use crate::roster::{Roster, Student, Table};
use proptest::prelude::*;

const LANGUAGES: [&str; 3] = ["es", "vi", "ar"];

fn student() -> impl Strategy<Value = (Option<usize>, bool, bool, u16)> {
    (
        proptest::option::weighted(0.3, 0..LANGUAGES.len()),
        proptest::bool::weighted(0.1),
        proptest::bool::weighted(0.4),
        0u16..300,
    )
}

fn roster() -> impl Strategy<Value = Roster> {
    prop::collection::vec(student(), 0..120).prop_map(|rows| {
        Roster::new(
            rows.into_iter()
                .enumerate()
                .map(|(id, (lang, sped, gifted, score))| {
                    let s = Student::new(id, f64::from(score))
                        .with_special_ed(sped)
                        .with_gifted(gifted);
                    match lang {
                        Some(l) => s.with_language(LANGUAGES[l]),
                        None => s,
                    }
                })
                .collect(),
        )
    })
}

fn to_table(roster: &Roster) -> Table {
    let mut table = Table::new(["id", "ESOL", "IEP", "GATES", "MAP_score"]);
    for s in roster.students() {
        table.push_row([
            s.id.to_string(),
            s.language_group.clone().unwrap_or_default(),
            if s.special_ed { "SPED" } else { "" }.to_string(),
            if s.gifted { "Yes" } else { "No" }.to_string(),
            s.score.to_string(),
        ]);
    }
    table
}

proptest! {
    #[test]
    fn prop_every_student_assigned_once(mut r in roster(), classes in 2i64..=20) {
        let n = r.len();
        PartitionRunner::run(&mut r, &PartitionConfig::new(classes)).unwrap();

        prop_assert_eq!(r.len(), n);
        prop_assert!(r.is_fully_assigned());
        let mut ids: Vec<usize> = r.students().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn prop_special_ed_share_class_one(mut r in roster(), classes in 2i64..=20) {
        PartitionRunner::run(&mut r, &PartitionConfig::new(classes)).unwrap();
        for s in r.students().iter().filter(|s| s.special_ed) {
            prop_assert_eq!(s.assigned_class, Some(1));
        }
    }

    #[test]
    fn prop_language_cohorts_share_a_class(mut r in roster(), classes in 2i64..=20) {
        PartitionRunner::run(&mut r, &PartitionConfig::new(classes)).unwrap();
        for lang in LANGUAGES {
            let mut labels = r
                .students()
                .iter()
                .filter(|s| !s.special_ed && s.language_group.as_deref() == Some(lang))
                .map(|s| s.assigned_class);
            if let Some(first) = labels.next() {
                prop_assert!(labels.all(|c| c == first));
            }
        }
    }

    #[test]
    fn prop_output_sorted_by_class(mut r in roster(), classes in 2i64..=20) {
        PartitionRunner::run(&mut r, &PartitionConfig::new(classes)).unwrap();
        let labels: Vec<Option<u32>> = r.students().iter().map(|s| s.assigned_class).collect();
        prop_assert!(labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_single_class_without_special_ed(r in roster()) {
        let mut r = Roster::new(
            r.into_students()
                .into_iter()
                .map(|s| s.with_special_ed(false))
                .collect(),
        );
        PartitionRunner::run(&mut r, &PartitionConfig::new(1)).unwrap();
        prop_assert!(r.students().iter().all(|s| s.assigned_class == Some(1)));
    }

    #[test]
    fn prop_table_partition_is_deterministic(r in roster(), classes in 2i64..=20) {
        let table = to_table(&r);
        let first = partition(table.clone(), classes).unwrap();
        let second = partition(table.clone(), classes).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), table.len());
    }
}
