//! Blood kinship between two persons.
//!
//! The lowest common ancestor fixes two depths, one per person. The pair of
//! depths picks a [`Topology`] and each topology has one handler. Mirrored
//! cases call the same handler with the persons swapped and swap the terms
//! back.

use super::term::{compare_seniority, ParentSibling, Seniority, Side, Term};
use super::KinshipResult;
use crate::ancestry::{AncestorEntry, AncestryIndex};
use crate::graph::FamilyGraph;
use giapha_core::Person;
use std::fmt;
use tracing::debug;

/// Stand-in name when the common ancestor has no person record.
const UNNAMED_ANCESTOR: &str = "Tổ tiên chung";

/// One person's position below the common ancestor.
#[derive(Debug, Clone, Copy)]
struct Reach<'a> {
    person: &'a Person,
    depth: u32,
    /// Child of the common ancestor on this person's line.
    branch: Option<&'a Person>,
}

impl<'a> Reach<'a> {
    fn new(person: &'a Person, entry: &AncestorEntry<'a>) -> Self {
        Self {
            person,
            depth: entry.depth,
            branch: entry.branch(),
        }
    }
}

/// Shape of the relation, from the two depths below the common ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topology {
    /// A is the common ancestor.
    DirectDescendant,
    /// B is the common ancestor.
    DirectAncestor,
    Siblings,
    /// B is a sibling of one of A's ancestors.
    ParentSibling,
    /// A is a sibling of one of B's ancestors.
    SiblingChild,
    Cousins,
    /// Cousin line where B sits higher than A.
    CousinElder,
    CousinJunior,
}

impl Topology {
    fn classify(depth_a: u32, depth_b: u32) -> Self {
        match (depth_a, depth_b) {
            (0, _) => Topology::DirectDescendant,
            (_, 0) => Topology::DirectAncestor,
            (1, 1) => Topology::Siblings,
            (_, 1) => Topology::ParentSibling,
            (1, _) => Topology::SiblingChild,
            (a, b) if a == b => Topology::Cousins,
            (a, b) if a > b => Topology::CousinElder,
            _ => Topology::CousinJunior,
        }
    }
}

/// Which branch of the family a blood relation runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lineal,
    Siblings,
    UpperSide(Side),
    Cousins(Side),
    Relatives(Side),
    Kin,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Lineal => write!(f, "Quan hệ Trực hệ"),
            Category::Siblings => write!(f, "Anh chị em ruột"),
            Category::UpperSide(side) => write!(f, "Bên {} (Vế trên)", side),
            Category::Cousins(side) => write!(f, "Anh em họ {}", side),
            Category::Relatives(side) => write!(f, "Họ hàng {}", side),
            Category::Kin => write!(f, "Quan hệ họ hàng"),
        }
    }
}

/// Terms in both directions plus the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Verdict {
    a_calls_b: Term,
    b_calls_a: Term,
    category: Category,
}

impl Verdict {
    fn new(a_calls_b: Term, b_calls_a: Term, category: Category) -> Self {
        Self {
            a_calls_b,
            b_calls_a,
            category,
        }
    }

    fn swapped(self) -> Self {
        Self {
            a_calls_b: self.b_calls_a,
            b_calls_a: self.a_calls_b,
            category: self.category,
        }
    }
}

fn resolve(a: Reach<'_>, b: Reach<'_>) -> Verdict {
    let topology = Topology::classify(a.depth, b.depth);
    match topology {
        Topology::DirectDescendant => lineal(a, b),
        Topology::DirectAncestor => lineal(b, a).swapped(),
        _ => {
            let (Some(branch_a), Some(branch_b)) = (a.branch, b.branch) else {
                return Verdict::new(Term::Kin, Term::Kin, Category::Kin);
            };
            let seniority = compare_seniority(branch_a, branch_b);
            let side = Side::of_branch(branch_a);

            match topology {
                Topology::Siblings => siblings(a, b),
                Topology::ParentSibling => parent_sibling(a, b, side, seniority),
                Topology::SiblingChild => resolve(b, a).swapped(),
                Topology::Cousins => cousins(a, b, side, seniority),
                Topology::CousinElder => cousin_elder(a, b, side, seniority),
                _ => resolve(b, a).swapped(),
            }
        }
    }
}

/// `elder` is the common ancestor itself.
fn lineal(elder: Reach<'_>, young: Reach<'_>) -> Verdict {
    let Some(branch) = young.branch else {
        return Verdict::new(Term::Posterity, Term::Forebear, Category::Lineal);
    };

    Verdict::new(
        Term::Descendant {
            depth: young.depth,
            gender: young.person.gender,
        },
        Term::Ancestor {
            depth: young.depth,
            gender: elder.person.gender,
            side: Side::of_branch(branch),
        },
        Category::Lineal,
    )
}

fn siblings(a: Reach<'_>, b: Reach<'_>) -> Verdict {
    let (ga, gb) = (a.person.gender, b.person.gender);
    if compare_seniority(a.person, b.person) == Seniority::Senior {
        Verdict::new(
            Term::YoungerSibling(gb),
            Term::ElderSibling(ga),
            Category::Siblings,
        )
    } else {
        Verdict::new(
            Term::ElderSibling(gb),
            Term::YoungerSibling(ga),
            Category::Siblings,
        )
    }
}

fn parent_sibling(a: Reach<'_>, b: Reach<'_>, side: Side, seniority: Seniority) -> Verdict {
    let role = ParentSibling::for_relative(side, b.person.gender, seniority);
    Verdict::new(
        Term::ParentSibling {
            role,
            depth: a.depth,
        },
        Term::Descendant {
            depth: a.depth,
            gender: a.person.gender,
        },
        Category::UpperSide(side),
    )
}

fn cousins(a: Reach<'_>, b: Reach<'_>, side: Side, seniority: Seniority) -> Verdict {
    if seniority == Seniority::Senior {
        Verdict::new(
            Term::YoungerCousin,
            Term::ElderCousin(a.person.gender),
            Category::Cousins(side),
        )
    } else {
        Verdict::new(
            Term::ElderCousin(b.person.gender),
            Term::YoungerCousin,
            Category::Cousins(side),
        )
    }
}

fn cousin_elder(a: Reach<'_>, b: Reach<'_>, side: Side, seniority: Seniority) -> Verdict {
    let a_calls_b = if a.depth - b.depth == 1 {
        Term::CousinParentSibling(ParentSibling::for_relative(
            side,
            b.person.gender,
            seniority,
        ))
    } else {
        Term::CousinGrandparent(b.person.gender)
    };
    Verdict::new(a_calls_b, Term::CousinDescendant, Category::Relatives(side))
}

impl<'a> FamilyGraph<'a> {
    /// Resolves the blood relation between `a` and `b`, if they share an
    /// ancestor (either may be the ancestor).
    pub fn blood_kinship(&self, a: &'a Person, b: &'a Person) -> Option<KinshipResult> {
        let ancestry_a = AncestryIndex::build(self, a);
        let ancestry_b = AncestryIndex::build(self, b);
        let lca = ancestry_a.common_ancestor(&ancestry_b)?;

        let verdict = resolve(Reach::new(a, lca.near), Reach::new(b, lca.far));
        let lca_name = self
            .person(lca.id)
            .map(|p| p.full_name.as_str())
            .unwrap_or(UNNAMED_ANCESTOR);
        debug!(
            "Blood kinship {} ↔ {} through {} ({}, {})",
            a.id, b.id, lca.id, lca.near.depth, lca.far.depth
        );

        Some(KinshipResult {
            a_calls_b: verdict.a_calls_b,
            b_calls_a: verdict.b_calls_a,
            description: format!("{} (Tổ tiên chung: {})", verdict.category, lca_name),
            distance: lca.distance() as i32,
            path_labels: vec![
                format!("{} cách {} {} đời.", a.full_name, lca_name, lca.near.depth),
                format!("{} cách {} {} đời.", b.full_name, lca_name, lca.far.depth),
            ],
        })
    }
}
