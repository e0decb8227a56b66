//! Ancestry index for kinship queries.
//!
//! Walks upward from one person through the parent edges, breadth-first,
//! and records for every ancestor how many generations up it sits and the
//! chain of persons leading to it. The last person of that chain is the
//! ancestor's own child on the way down, which is what decides paternal
//! versus maternal side later on.

use crate::graph::FamilyGraph;
use giapha_core::Person;
use std::collections::{HashMap, VecDeque};
use tracing::trace;

/// One ancestor as seen from the start person.
#[derive(Debug, Clone)]
pub struct AncestorEntry<'a> {
    /// Parent-edge hops from the start person.
    pub depth: u32,

    /// Persons from the start up to, but excluding, the ancestor.
    pub path: Vec<&'a Person>,
}

impl<'a> AncestorEntry<'a> {
    /// The ancestor's child on the path toward the start person.
    pub fn branch(&self) -> Option<&'a Person> {
        self.path.last().copied()
    }
}

/// Every ancestor reachable from one person.
#[derive(Debug, Clone)]
pub struct AncestryIndex<'a> {
    start: &'a Person,
    entries: HashMap<&'a str, AncestorEntry<'a>>,
}

impl<'a> AncestryIndex<'a> {
    /// Builds the index for `start`.
    ///
    /// The start person sits at depth 0 with an empty path. Persons with no
    /// record in the graph, the start included, are not climbed from, and
    /// the first (shallowest) visit of each ancestor is kept.
    pub fn build(graph: &FamilyGraph<'a>, start: &'a Person) -> Self {
        let mut entries: HashMap<&'a str, AncestorEntry<'a>> = HashMap::new();
        let mut queue: VecDeque<(&'a str, u32, Vec<&'a Person>)> = VecDeque::new();
        queue.push_back((start.id.as_str(), 0, Vec::new()));

        while let Some((id, depth, path)) = queue.pop_front() {
            if entries.contains_key(id) {
                continue;
            }

            let current = match graph.person(id) {
                Some(_) if id == start.id => Some(start),
                found => found,
            };
            entries.insert(
                id,
                AncestorEntry {
                    depth,
                    path: path.clone(),
                },
            );

            let Some(current) = current else { continue };
            for parent in graph.parents_of(id) {
                if graph.person(parent).is_none() || entries.contains_key(parent) {
                    continue;
                }
                let mut next = path.clone();
                next.push(current);
                queue.push_back((parent, depth + 1, next));
            }
        }

        trace!("Ancestry of {}: {} entries", start.id, entries.len());
        Self { start, entries }
    }

    pub fn start(&self) -> &'a Person {
        self.start
    }

    pub fn get(&self, id: &str) -> Option<&AncestorEntry<'a>> {
        self.entries.get(id)
    }

    pub fn depth_of(&self, id: &str) -> Option<u32> {
        self.entries.get(id).map(|entry| entry.depth)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entries, the start person included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the closest ancestor shared with `other`.
    ///
    /// Closest means the smallest sum of both depths. Ties go to the
    /// smaller id so the answer does not depend on which side asks.
    pub fn common_ancestor<'i>(
        &'i self,
        other: &'i AncestryIndex<'a>,
    ) -> Option<CommonAncestor<'a, 'i>> {
        self.entries
            .iter()
            .filter_map(|(&id, mine)| {
                other.entries.get(id).map(|theirs| CommonAncestor {
                    id,
                    near: mine,
                    far: theirs,
                })
            })
            .min_by(|x, y| {
                x.distance()
                    .cmp(&y.distance())
                    .then_with(|| x.id.cmp(y.id))
            })
    }
}

/// The lowest common ancestor of two ancestry indexes.
#[derive(Debug, Clone, Copy)]
pub struct CommonAncestor<'a, 'i> {
    pub id: &'a str,
    /// Entry in the index `common_ancestor` was called on.
    pub near: &'i AncestorEntry<'a>,
    /// Entry in the other index.
    pub far: &'i AncestorEntry<'a>,
}

impl CommonAncestor<'_, '_> {
    /// Total generations between the two persons through this ancestor.
    pub fn distance(&self) -> u32 {
        self.near.depth + self.far.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giapha_core::{Gender, Relationship};

    fn family() -> (Vec<Person>, Vec<Relationship>) {
        //        gp
        //       /  \
        //    dad    aunt
        //    / \      \
        //  me  sis    cousin
        let persons = vec![
            Person::new("gp", "Ông", Gender::Male),
            Person::new("dad", "Bố", Gender::Male),
            Person::new("mom", "Mẹ", Gender::Female),
            Person::new("aunt", "Cô", Gender::Female),
            Person::new("me", "Tôi", Gender::Male),
            Person::new("sis", "Em", Gender::Female),
            Person::new("cousin", "Họ", Gender::Male),
        ];
        let relationships = vec![
            Relationship::child("gp", "dad"),
            Relationship::child("gp", "aunt"),
            Relationship::child("dad", "me"),
            Relationship::child("mom", "me"),
            Relationship::child("dad", "sis"),
            Relationship::child("aunt", "cousin"),
        ];
        (persons, relationships)
    }

    #[test]
    fn test_depths_and_paths() {
        let (persons, relationships) = family();
        let graph = FamilyGraph::from_records(&persons, &relationships);
        let me = graph.person("me").unwrap();
        let index = AncestryIndex::build(&graph, me);

        assert_eq!(index.len(), 4);
        assert_eq!(index.depth_of("me"), Some(0));
        assert!(index.get("me").unwrap().path.is_empty());
        assert_eq!(index.depth_of("dad"), Some(1));
        assert_eq!(index.depth_of("mom"), Some(1));
        assert_eq!(index.depth_of("gp"), Some(2));

        let gp = index.get("gp").unwrap();
        let path: Vec<&str> = gp.path.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(path, vec!["me", "dad"]);
        assert_eq!(gp.branch().unwrap().id, "dad");
    }

    #[test]
    fn test_common_ancestor_minimises_total_depth() {
        let (persons, relationships) = family();
        let graph = FamilyGraph::from_records(&persons, &relationships);
        let me = AncestryIndex::build(&graph, graph.person("me").unwrap());
        let sis = AncestryIndex::build(&graph, graph.person("sis").unwrap());
        let cousin = AncestryIndex::build(&graph, graph.person("cousin").unwrap());

        let lca = me.common_ancestor(&sis).unwrap();
        assert_eq!(lca.id, "dad");
        assert_eq!(lca.distance(), 2);

        let lca = me.common_ancestor(&cousin).unwrap();
        assert_eq!(lca.id, "gp");
        assert_eq!((lca.near.depth, lca.far.depth), (2, 2));
    }

    #[test]
    fn test_missing_parents_not_followed() {
        let persons = vec![Person::new("kid", "Bé", Gender::Female)];
        let relationships = vec![Relationship::child("ghost", "kid")];
        let graph = FamilyGraph::from_records(&persons, &relationships);

        let index = AncestryIndex::build(&graph, &persons[0]);
        assert_eq!(index.len(), 1);
        assert!(!index.contains("ghost"));
    }

    #[test]
    fn test_cycle_terminates() {
        let persons = vec![
            Person::new("a", "A", Gender::Male),
            Person::new("b", "B", Gender::Male),
        ];
        let relationships = vec![Relationship::child("a", "b"), Relationship::child("b", "a")];
        let graph = FamilyGraph::from_records(&persons, &relationships);

        let index = AncestryIndex::build(&graph, &persons[0]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.depth_of("b"), Some(1));
    }

    #[test]
    fn test_start_outside_person_list() {
        let persons = vec![Person::new("a", "A", Gender::Male)];
        let graph = FamilyGraph::from_records(&persons, &[]);
        let stranger = Person::new("z", "Z", Gender::Female);

        let index = AncestryIndex::build(&graph, &stranger);
        assert_eq!(index.len(), 1);
        assert_eq!(index.start().id, "z");
    }

    #[test]
    fn test_start_outside_person_list_not_climbed() {
        let persons = vec![Person::new("dad", "Bố", Gender::Male)];
        let relationships = vec![Relationship::child("dad", "ghost_kid")];
        let graph = FamilyGraph::from_records(&persons, &relationships);
        let ghost_kid = Person::new("ghost_kid", "Bé", Gender::Male);

        let index = AncestryIndex::build(&graph, &ghost_kid);
        assert_eq!(index.len(), 1);
        assert!(!index.contains("dad"));
    }

    #[test]
    fn test_common_ancestor_tie_goes_to_smaller_id() {
        // Two half-siblings share both "ba" and "an" at depth 1 each.
        let persons = vec![
            Person::new("ba", "Ba", Gender::Male),
            Person::new("an", "An", Gender::Female),
            Person::new("x", "X", Gender::Male),
            Person::new("y", "Y", Gender::Female),
        ];
        let relationships = vec![
            Relationship::child("ba", "x"),
            Relationship::child("an", "x"),
            Relationship::child("ba", "y"),
            Relationship::child("an", "y"),
        ];
        let graph = FamilyGraph::from_records(&persons, &relationships);
        let x = AncestryIndex::build(&graph, graph.person("x").unwrap());
        let y = AncestryIndex::build(&graph, graph.person("y").unwrap());

        let forward = x.common_ancestor(&y).unwrap();
        let backward = y.common_ancestor(&x).unwrap();
        assert_eq!(forward.id, "an");
        assert_eq!(backward.id, "an");
        assert_eq!(forward.distance(), 2);
    }
}
