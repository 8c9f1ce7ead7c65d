//! Unlock gating and prerequisite graph checks.
//!
//! Skills and perks share one gate:
//!
//! 1. not already at max rank
//! 2. level requirement
//! 3. enough points in the definition's pool for the next rank
//! 4. race allow/deny lists
//! 5. stat minimums against totals
//! 6. every prerequisite at rank > 0
//!
//! The first failing check is reported. Prerequisites form a DAG keyed by explicit ids;
//! declaration order carries no meaning. Cycles are rejected once, when the catalog is
//! built (see [`find_cycle`]).

use std::collections::BTreeMap;

use super::definition::{UnlockDefinition, UnlockKind};
use crate::gate::GateFailure;
use crate::race::Race;
use crate::stats::StatBlock;

/// Read-only view of whoever is trying to unlock something.
pub trait UnlockOwner {
    fn level(&self) -> u32;
    fn race(&self) -> Race;
    fn stats(&self) -> &StatBlock;
    fn available_points(&self, kind: UnlockKind) -> u32;
    fn rank_of(&self, kind: UnlockKind, id: &str) -> u32;
}

/// Runs the full gate. Pure: never mutates the owner.
pub fn check_unlock<O: UnlockOwner + ?Sized>(
    owner: &O,
    def: &UnlockDefinition,
) -> Result<(), GateFailure> {
    let rank = owner.rank_of(def.kind, &def.id);
    if rank >= def.max_rank {
        return Err(GateFailure::MaxRank {
            id: def.id.clone(),
            max_rank: def.max_rank,
        });
    }

    def.requirements.check_level(owner.level())?;

    let cost = def.next_rank_cost(rank);
    let available = owner.available_points(def.kind);
    if available < cost {
        return Err(GateFailure::Points {
            pool: def.pool(),
            required: cost,
            available,
        });
    }

    def.requirements.check_race(owner.race())?;
    def.requirements.check_stats(owner.stats())?;

    if let Some(missing) = def
        .prerequisites
        .iter()
        .find(|id| owner.rank_of(def.kind, id) == 0)
    {
        return Err(GateFailure::Prerequisite {
            id: missing.clone(),
        });
    }

    Ok(())
}

pub fn can_unlock<O: UnlockOwner + ?Sized>(owner: &O, def: &UnlockDefinition) -> bool {
    check_unlock(owner, def).is_ok()
}

/// Returns an id that sits on a prerequisite cycle, if any.
///
/// Prerequisites that are not keys of `defs` are ignored here; unknown ids are reported
/// separately.
pub fn find_cycle(defs: &BTreeMap<String, UnlockDefinition>) -> Option<String> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Visiting,
        Done,
    }

    let mut marks: BTreeMap<&str, Mark> = BTreeMap::new();

    for root in defs.keys() {
        if marks.contains_key(root.as_str()) {
            continue;
        }

        // Iterative DFS: (node, next prerequisite index)
        let mut stack: Vec<(&str, usize)> = vec![(root.as_str(), 0)];
        marks.insert(root.as_str(), Mark::Visiting);

        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            let prereqs = defs
                .get(node)
                .map(|d| d.prerequisites.as_slice())
                .unwrap_or(&[]);

            if next >= prereqs.len() {
                marks.insert(node, Mark::Done);
                stack.pop();
                continue;
            }

            top.1 += 1;
            let child = prereqs[next].as_str();

            if !defs.contains_key(child) {
                continue;
            }
            match marks.get(child) {
                Some(Mark::Visiting) => return Some(child.to_owned()),
                Some(Mark::Done) => {}
                None => {
                    marks.insert(child, Mark::Visiting);
                    stack.push((child, 0));
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Requirements;
    use crate::stats::Attribute;
    use crate::unlock::UnlockProgress;

    struct Owner {
        level: u32,
        race: Race,
        stats: StatBlock,
        points: u32,
        progress: UnlockProgress,
    }

    impl Owner {
        fn new() -> Self {
            Self {
                level: 1,
                race: Race::Unicorn,
                stats: StatBlock::new(),
                points: 10,
                progress: UnlockProgress::new(),
            }
        }
    }

    impl UnlockOwner for Owner {
        fn level(&self) -> u32 {
            self.level
        }
        fn race(&self) -> Race {
            self.race
        }
        fn stats(&self) -> &StatBlock {
            &self.stats
        }
        fn available_points(&self, _kind: UnlockKind) -> u32 {
            self.points
        }
        fn rank_of(&self, _kind: UnlockKind, id: &str) -> u32 {
            self.progress.rank(id)
        }
    }

    fn defs(list: Vec<UnlockDefinition>) -> BTreeMap<String, UnlockDefinition> {
        list.into_iter().map(|d| (d.id.clone(), d)).collect()
    }

    #[test]
    fn max_rank_is_reported_first() {
        let mut owner = Owner::new();
        owner.level = 0;
        owner.progress.set_rank("s", 1);
        let def = UnlockDefinition::skill("s", "S")
            .with_requirements(Requirements::none().with_level(3));
        assert!(matches!(
            check_unlock(&owner, &def),
            Err(GateFailure::MaxRank { .. })
        ));
    }

    #[test]
    fn points_are_checked_against_next_rank_cost() {
        let mut owner = Owner::new();
        owner.points = 3;
        owner.progress.set_rank("s", 1);
        let def = UnlockDefinition::skill("s", "S")
            .with_max_rank(3)
            .with_base_cost(2);
        assert_eq!(
            check_unlock(&owner, &def),
            Err(GateFailure::Points {
                pool: crate::progression::PointPool::Skill,
                required: 4,
                available: 3
            })
        );
    }

    #[test]
    fn stats_and_race_gate() {
        let owner = Owner::new();
        let def = UnlockDefinition::perk("p", "P").with_requirements(
            Requirements::none()
                .forbid_race(Race::Unicorn)
                .with_stat(Attribute::Strength, 20),
        );
        assert_eq!(
            check_unlock(&owner, &def),
            Err(GateFailure::RaceForbidden { race: Race::Unicorn })
        );
    }

    #[test]
    fn prerequisite_must_be_unlocked() {
        let mut owner = Owner::new();
        let def = UnlockDefinition::skill("b", "B").with_prerequisite("a");
        assert!(!can_unlock(&owner, &def));
        owner.progress.set_rank("a", 1);
        assert!(can_unlock(&owner, &def));
    }

    #[test]
    fn detects_self_reference_and_longer_cycles() {
        let selfref = defs(vec![UnlockDefinition::skill("a", "A").with_prerequisite("a")]);
        assert_eq!(find_cycle(&selfref).as_deref(), Some("a"));

        let ring = defs(vec![
            UnlockDefinition::skill("a", "A").with_prerequisite("c"),
            UnlockDefinition::skill("b", "B").with_prerequisite("a"),
            UnlockDefinition::skill("c", "C").with_prerequisite("b"),
        ]);
        assert!(find_cycle(&ring).is_some());
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let diamond = defs(vec![
            UnlockDefinition::skill("root", "Root"),
            UnlockDefinition::skill("left", "Left").with_prerequisite("root"),
            UnlockDefinition::skill("right", "Right").with_prerequisite("root"),
            UnlockDefinition::skill("top", "Top")
                .with_prerequisite("left")
                .with_prerequisite("right"),
        ]);
        assert_eq!(find_cycle(&diamond), None);
    }
}
