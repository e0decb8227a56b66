//! Kinship across one marriage.
//!
//! When two persons share no ancestor, each spouse of either side is tried
//! as a stand-in. The blood term toward the stand-in is then rewritten into
//! the in-law form for the person who married in.

use super::KinshipResult;
use crate::graph::FamilyGraph;
use giapha_core::Person;
use tracing::debug;

impl<'a> FamilyGraph<'a> {
    /// Resolves what `a` and `b` call each other.
    ///
    /// Returns `None` only when both are the same person. Everything else
    /// yields a result, the "no relation" sentinel included.
    pub fn kinship(&self, a: &'a Person, b: &'a Person) -> Option<KinshipResult> {
        if a.id == b.id {
            return None;
        }

        if self.are_married(&a.id, &b.id) {
            return Some(KinshipResult::married(a, b));
        }

        if let Some(result) = self.blood_kinship(a, b) {
            return Some(result);
        }

        for spouse in self.known_spouses(a) {
            if spouse.id == b.id {
                continue;
            }
            if let Some(result) = self.blood_kinship(spouse, b) {
                debug!("Kinship {} ↔ {} through spouse {}", a.id, b.id, spouse.id);
                return Some(KinshipResult {
                    b_calls_a: result.b_calls_a.as_in_law(a.gender),
                    description: format!("Thông qua hôn nhân của {}", spouse.full_name),
                    path_labels: std::iter::once(spouse_label(a, spouse))
                        .chain(result.path_labels)
                        .collect(),
                    ..result
                });
            }
        }

        for spouse in self.known_spouses(b) {
            if let Some(result) = self.blood_kinship(a, spouse) {
                debug!("Kinship {} ↔ {} through spouse {}", a.id, b.id, spouse.id);
                let mut path_labels = result.path_labels;
                path_labels.push(spouse_label(b, spouse));
                return Some(KinshipResult {
                    a_calls_b: result.a_calls_b.as_in_law(b.gender),
                    description: format!("Thông qua hôn nhân của {}", spouse.full_name),
                    path_labels,
                    ..result
                });
            }
        }

        debug!("No kinship found between {} and {}", a.id, b.id);
        Some(KinshipResult::strangers())
    }

    /// Spouses that have a person record, in edge order.
    fn known_spouses(&self, person: &Person) -> Vec<&'a Person> {
        self.spouses_of(&person.id)
            .into_iter()
            .filter_map(|id| self.person(id))
            .collect()
    }
}

fn spouse_label(person: &Person, spouse: &Person) -> String {
    format!("{} là vợ/chồng của {}", person.full_name, spouse.full_name)
}
