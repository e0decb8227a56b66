//! Birth-order assignment.
//!
//! Children are ranked once per parent. Within a parent's group they sort
//! by birth year (unknown years last), then by name in Vietnamese
//! collation. Ranks are dense and start at 1; in-laws are skipped without
//! using up a rank. A child ranked by two parents keeps the smaller rank.

use crate::graph::FamilyGraph;
use giapha_core::{compare_names, Person, Relationship};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Sibling sort: birth year ascending with missing years last, then name.
///
/// Ids without a person record sort as an unnamed person of unknown year.
fn sibling_order(a: Option<&Person>, b: Option<&Person>) -> Ordering {
    fn name(p: Option<&Person>) -> &str {
        p.map(|p| p.full_name.as_str()).unwrap_or("")
    }
    let year = |p: Option<&Person>| p.and_then(|p| p.birth_year);

    let by_year = match (year(a), year(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_year.then_with(|| compare_names(name(a), name(b)))
}

impl<'a> FamilyGraph<'a> {
    /// Computes the birth order of every non-in-law child.
    pub fn birth_orders(&self) -> BTreeMap<&'a str, u32> {
        let mut orders: BTreeMap<&'a str, u32> = BTreeMap::new();
        let parents = self.parent_ids();

        for parent in &parents {
            let mut children: Vec<(&'a str, Option<&'a Person>)> = self
                .children_of(parent)
                .into_iter()
                .map(|id| (id, self.person(id)))
                .collect();
            children.sort_by(|(_, a), (_, b)| sibling_order(*a, *b));

            let mut order = 1;
            for (id, person) in children {
                // Unknown ids and in-laws neither get nor use a slot.
                let Some(person) = person else { continue };
                if person.is_in_law {
                    continue;
                }

                orders
                    .entry(id)
                    .and_modify(|existing| *existing = (*existing).min(order))
                    .or_insert(order);
                order += 1;
            }
        }

        debug!(
            "Assigned {} birth orders across {} parent groups",
            orders.len(),
            parents.len()
        );
        orders
    }
}

/// Computes birth orders for a family.
pub fn compute_birth_orders(
    persons: &[Person],
    relationships: &[Relationship],
) -> BTreeMap<String, u32> {
    FamilyGraph::from_records(persons, relationships)
        .birth_orders()
        .into_iter()
        .map(|(id, order)| (id.to_string(), order))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use giapha_core::Gender;

    fn child(id: &str, name: &str, year: Option<i32>) -> Person {
        let person = Person::new(id, name, Gender::Male);
        match year {
            Some(year) => person.with_birth_year(year),
            None => person,
        }
    }

    #[test]
    fn test_sorted_by_year_then_name() {
        let persons = vec![
            Person::new("dad", "Cha", Gender::Male),
            child("c", "Cường", Some(1985)),
            child("b", "Bình", Some(1980)),
            child("a", "An", None),
            child("d", "Ánh", Some(1985)),
        ];
        let relationships: Vec<Relationship> = ["c", "b", "a", "d"]
            .iter()
            .map(|kid| Relationship::child("dad", *kid))
            .collect();

        let orders = compute_birth_orders(&persons, &relationships);

        assert_eq!(orders["b"], 1);
        assert_eq!(orders["d"], 2); // "Ánh" before "Cường"
        assert_eq!(orders["c"], 3);
        assert_eq!(orders["a"], 4); // unknown year last
        assert!(!orders.contains_key("dad"));
    }

    #[test]
    fn test_dense_and_in_laws_skipped() {
        let persons = vec![
            Person::new("mom", "Mẹ", Gender::Female),
            child("k1", "Khải", Some(1990)),
            child("k2", "Khang", Some(1992)).in_law(),
            child("k3", "Khoa", Some(1994)),
            child("k4", "Khôi", Some(1996)),
        ];
        let relationships: Vec<Relationship> = ["k1", "k2", "k3", "k4"]
            .iter()
            .map(|kid| Relationship::child("mom", *kid))
            .collect();

        let orders = compute_birth_orders(&persons, &relationships);

        assert!(!orders.contains_key("k2"));
        let mut ranks: Vec<u32> = orders.values().copied().collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(orders["k3"], 2);
    }

    #[test]
    fn test_multi_parent_minimum() {
        // shared is the eldest with mother but the youngest with father.
        let persons = vec![
            Person::new("father", "Cha", Gender::Male),
            Person::new("mother", "Mẹ", Gender::Female),
            child("older_half", "Hải", Some(1970)),
            child("shared", "Sơn", Some(1980)),
        ];
        let relationships = vec![
            Relationship::child("father", "older_half"),
            Relationship::child("father", "shared"),
            Relationship::adopted("mother", "shared"),
        ];

        let orders = compute_birth_orders(&persons, &relationships);

        assert_eq!(orders["older_half"], 1);
        assert_eq!(orders["shared"], 1);
    }

    #[test]
    fn test_unknown_child_ids_ignored() {
        let persons = vec![
            Person::new("p", "Cha", Gender::Male),
            child("real", "Thật", Some(2000)),
        ];
        let relationships = vec![
            Relationship::child("p", "ghost"),
            Relationship::child("p", "real"),
        ];

        let orders = compute_birth_orders(&persons, &relationships);

        assert_eq!(orders.len(), 1);
        assert_eq!(orders["real"], 1);
    }

    #[test]
    fn test_child_linked_twice_to_same_parent() {
        let persons = vec![
            Person::new("p", "Cha", Gender::Male),
            child("x", "Xuân", Some(1980)),
            child("y", "Yến", Some(1990)),
        ];
        let relationships = vec![
            Relationship::child("p", "x"),
            Relationship::adopted("p", "x"),
            Relationship::child("p", "y"),
        ];

        let orders = compute_birth_orders(&persons, &relationships);

        assert_eq!(orders["x"], 1);
        assert_eq!(orders["y"], 2);
    }

    #[test]
    fn test_deterministic() {
        let persons = vec![
            Person::new("p", "Cha", Gender::Male),
            child("x", "Xuân", None),
            child("y", "Yến", None),
            child("z", "Xuân", None),
        ];
        let relationships = vec![
            Relationship::child("p", "x"),
            Relationship::child("p", "y"),
            Relationship::child("p", "z"),
        ];

        let first = compute_birth_orders(&persons, &relationships);
        assert_eq!(first["x"], 1);
        assert_eq!(first["z"], 2);
        assert_eq!(first["y"], 3);
        for _ in 0..5 {
            assert_eq!(compute_birth_orders(&persons, &relationships), first);
        }
    }
}
