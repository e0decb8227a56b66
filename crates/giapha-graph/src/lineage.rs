//! Lineage preview diff.
//!
//! Recomputes generations and birth orders for a whole family and lines
//! them up against the values stored on each person, so a caller can show
//! what would change before writing anything back.

use crate::graph::FamilyGraph;
use giapha_core::{Person, Relationship};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Sort key used for missing generations and birth orders.
const UNRANKED: u32 = 999;

/// Stored and recomputed lineage values for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineageUpdate {
    pub id: String,
    pub full_name: String,
    pub old_generation: Option<u32>,
    pub new_generation: Option<u32>,
    pub old_birth_order: Option<u32>,
    pub new_birth_order: Option<u32>,
    pub changed: bool,
}

/// One update per person, changed rows first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineagePlan {
    pub updates: Vec<LineageUpdate>,
}

impl LineagePlan {
    /// Rows whose recomputed values differ from the stored ones.
    pub fn changed(&self) -> impl Iterator<Item = &LineageUpdate> {
        self.updates.iter().filter(|update| update.changed)
    }

    pub fn changed_count(&self) -> usize {
        self.changed().count()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Writes the recomputed values onto matching persons.
    ///
    /// Returns how many persons were modified. Applying the same plan a
    /// second time modifies nothing.
    pub fn apply(&self, persons: &mut [Person]) -> usize {
        let by_id: HashMap<&str, &LineageUpdate> = self
            .changed()
            .map(|update| (update.id.as_str(), update))
            .collect();

        let mut modified = 0;
        for person in persons.iter_mut() {
            let Some(update) = by_id.get(person.id.as_str()) else {
                continue;
            };
            if person.generation == update.new_generation
                && person.birth_order == update.new_birth_order
            {
                continue;
            }
            person.generation = update.new_generation;
            person.birth_order = update.new_birth_order;
            modified += 1;
        }

        debug!("Applied lineage values to {} persons", modified);
        modified
    }
}

impl FamilyGraph<'_> {
    /// Builds the lineage preview diff for every person in the graph.
    pub fn lineage_plan(&self) -> LineagePlan {
        let generations = self.generations();
        let orders = self.birth_orders();

        let mut updates: Vec<LineageUpdate> = self
            .persons()
            .map(|person| {
                let new_generation = generations.get(person.id.as_str()).copied();
                let new_birth_order = orders.get(person.id.as_str()).copied();
                LineageUpdate {
                    id: person.id.clone(),
                    full_name: person.full_name.clone(),
                    old_generation: person.generation,
                    new_generation,
                    old_birth_order: person.birth_order,
                    new_birth_order,
                    changed: person.generation != new_generation
                        || person.birth_order != new_birth_order,
                }
            })
            .collect();

        // Stable: ties keep input order.
        updates.sort_by_key(|update| {
            (
                !update.changed,
                update.new_generation.unwrap_or(UNRANKED),
                update.new_birth_order.unwrap_or(UNRANKED),
            )
        });

        let plan = LineagePlan { updates };
        debug!(
            "Lineage plan: {} of {} persons change",
            plan.changed_count(),
            plan.len()
        );
        plan
    }
}

/// Computes the lineage preview diff for a family.
pub fn plan_lineage(persons: &[Person], relationships: &[Relationship]) -> LineagePlan {
    FamilyGraph::from_records(persons, relationships).lineage_plan()
}
