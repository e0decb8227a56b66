//! Generation assignment.
//!
//! Generations are counted from the root ancestors (generation 1) down
//! the parent → child edges. Two passes:
//!
//! 1. Breadth-first from every root at once. The first visit of a person
//!    fixes its generation, so a person reachable along paths of different
//!    length gets the shortest one. The same visited set is the cycle guard.
//! 2. In-laws copy the generation of a spouse, repeated until a full pass
//!    assigns nothing new.

use crate::graph::FamilyGraph;
use giapha_core::{Person, Relationship};
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::{debug, trace};

impl<'a> FamilyGraph<'a> {
    /// Persons the generation walk starts from: nobody points a parent
    /// edge at them and they were born into the family.
    pub fn roots(&self) -> Vec<&'a Person> {
        self.persons()
            .filter(|p| !p.is_in_law && !self.has_parents(&p.id))
            .collect()
    }

    /// Computes the generation of every person reachable from a root.
    ///
    /// Persons that no root reaches, and in-laws whose spouses stay
    /// unresolved, are absent from the result.
    pub fn generations(&self) -> BTreeMap<&'a str, u32> {
        let roots = self.roots();
        debug!("Generation walk from {} roots", roots.len());

        let mut visited: HashMap<&'a str, u32> = HashMap::new();
        let mut queue: VecDeque<(&'a str, u32)> =
            roots.iter().map(|root| (root.id.as_str(), 1)).collect();

        while let Some((id, generation)) = queue.pop_front() {
            if visited.contains_key(id) {
                continue;
            }
            // In-laws only take generations from their spouses.
            if self.person(id).is_some_and(|p| p.is_in_law) {
                trace!("Not descending through in-law {}", id);
                continue;
            }
            visited.insert(id, generation);

            for child in self.children_of(id) {
                if !visited.contains_key(child) {
                    queue.push_back((child, generation + 1));
                }
            }
        }

        // Only persons are reported; bare ids merely carried the walk.
        let mut generations: BTreeMap<&'a str, u32> = visited
            .into_iter()
            .filter(|(id, _)| self.person(id).is_some())
            .collect();

        let passes = self.propagate_to_in_laws(&mut generations);
        debug!(
            "Assigned {} generations ({} in-law passes)",
            generations.len(),
            passes
        );

        generations
    }

    /// Copies spouse generations onto in-laws until nothing changes.
    ///
    /// Returns the number of passes made. Each pass either assigns at
    /// least one generation or is the last.
    fn propagate_to_in_laws(&self, generations: &mut BTreeMap<&'a str, u32>) -> usize {
        let mut passes = 0;
        let mut changed = true;

        while changed {
            changed = false;
            passes += 1;

            for person in self.persons() {
                if !person.is_in_law || generations.contains_key(person.id.as_str()) {
                    continue;
                }
                let inherited = self
                    .spouses_of(&person.id)
                    .into_iter()
                    .find_map(|spouse| generations.get(spouse).copied());

                if let Some(generation) = inherited {
                    generations.insert(person.id.as_str(), generation);
                    changed = true;
                }
            }
        }

        passes
    }
}

/// Computes generation numbers for a family.
pub fn compute_generations(
    persons: &[Person],
    relationships: &[Relationship],
) -> BTreeMap<String, u32> {
    FamilyGraph::from_records(persons, relationships)
        .generations()
        .into_iter()
        .map(|(id, generation)| (id.to_string(), generation))
        .collect()
}
