//! Vietnamese kinship vocabulary.
//!
//! A [`Term`] is the structured form of what one person calls another.
//! Resolvers build terms from depths, genders and sides; the text only
//! appears when a term is displayed or serialized.

use giapha_core::{Gender, Person};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Titles for ancestors four or more generations up, indexed by depth.
const ANCESTORS: [&str; 10] = [
    "", "Cha/Mẹ", "Ông/Bà", "Cụ", "Kỵ", "Sơ", "Tiệm", "Tiểu", "Di", "Diễn",
];

/// Descendant titles, indexed by depth.
const DESCENDANTS: [&str; 9] = [
    "", "Con", "Cháu", "Chắt", "Chít", "Chút", "Chét", "Chót", "Chẹt",
];

fn ancestor_title(depth: u32) -> String {
    match ANCESTORS.get(depth as usize) {
        Some(title) if depth > 0 => title.to_string(),
        _ => format!("Tổ đời {}", depth),
    }
}

fn descendant_title(depth: u32) -> String {
    match DESCENDANTS.get(depth as usize) {
        Some(title) if depth > 0 => title.to_string(),
        _ => format!("Cháu đời {}", depth),
    }
}

/// Paternal (nội) or maternal (ngoại) side of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Paternal,
    Maternal,
}

impl Side {
    /// The side a branch person opens: through a son it is paternal.
    pub fn of_branch(branch: &Person) -> Self {
        if branch.gender.is_male() {
            Side::Paternal
        } else {
            Side::Maternal
        }
    }

    /// Lower-case suffix used inside terms ("Ông nội").
    pub fn suffix(&self) -> &'static str {
        match self {
            Side::Paternal => "nội",
            Side::Maternal => "ngoại",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Paternal => write!(f, "Nội"),
            Side::Maternal => write!(f, "Ngoại"),
        }
    }
}

/// Elder/younger standing of one person relative to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    Senior,
    Junior,
    Equal,
}

/// Compares seniority: birth order when both have one, then birth year.
///
/// The same person, or two persons the data cannot rank, are equal.
pub fn compare_seniority(a: &Person, b: &Person) -> Seniority {
    if a.id == b.id {
        return Seniority::Equal;
    }

    let by_order = match (a.birth_order, b.birth_order) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    };
    let by_year = || match (a.birth_year, b.birth_year) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    };

    match by_order.then_with(by_year) {
        Ordering::Less => Seniority::Senior,
        Ordering::Greater => Seniority::Junior,
        Ordering::Equal => Seniority::Equal,
    }
}

/// Sibling of a parent (or of a further ancestor), seen from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentSibling {
    /// Father's younger brother.
    Chu,
    /// Father's elder brother.
    Bac,
    /// Father's sister.
    Co,
    /// Mother's brother.
    Cau,
    /// Mother's sister.
    Di,
}

impl ParentSibling {
    /// Picks the role for `relative` on `side`.
    ///
    /// `branch_seniority` is the standing of the asker's own line against
    /// the relative: when that line is senior the relative is younger.
    pub fn for_relative(side: Side, relative: Gender, branch_seniority: Seniority) -> Self {
        match (side, relative.is_female()) {
            (Side::Paternal, true) => ParentSibling::Co,
            (Side::Paternal, false) if branch_seniority == Seniority::Senior => ParentSibling::Chu,
            (Side::Paternal, false) => ParentSibling::Bac,
            (Side::Maternal, true) => ParentSibling::Di,
            (Side::Maternal, false) => ParentSibling::Cau,
        }
    }

    pub fn is_female(&self) -> bool {
        matches!(self, ParentSibling::Co | ParentSibling::Di)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParentSibling::Chu => "Chú",
            ParentSibling::Bac => "Bác",
            ParentSibling::Co => "Cô",
            ParentSibling::Cau => "Cậu",
            ParentSibling::Di => "Dì",
        }
    }
}

/// What one person calls another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// Direct ancestor `depth` generations up.
    Ancestor { depth: u32, gender: Gender, side: Side },
    /// Direct descendant `depth` generations down.
    Descendant { depth: u32, gender: Gender },
    /// Descendant whose line could not be traced (Hậu duệ).
    Posterity,
    /// Ancestor whose line could not be traced (Tiền bối).
    Forebear,
    ElderSibling(Gender),
    YoungerSibling(Gender),
    /// Sibling of an ancestor; `depth` is the asker's depth below the
    /// shared ancestor, so 2 is a plain uncle or aunt.
    ParentSibling { role: ParentSibling, depth: u32 },
    ElderCousin(Gender),
    YoungerCousin,
    /// Cousin of a parent (Chú họ, Cô họ, ...).
    CousinParentSibling(ParentSibling),
    /// Cousin two or more generations up (Ông họ, Bà họ).
    CousinGrandparent(Gender),
    CousinDescendant,
    /// Blood relative the vocabulary has no closer word for.
    Kin,
    Spouse(Gender),
    Stranger,
    ChildInLaw(Gender),
    GrandchildInLaw(Gender),
    ElderSiblingInLaw(Gender),
    YoungerSiblingInLaw(Gender),
    /// Husband of a paternal or maternal aunt (Dượng).
    UncleByMarriage,
    /// Wife of a younger paternal uncle (Thím) or of a maternal uncle (Mợ).
    AuntByMarriage(Side),
}

impl Term {
    /// Rewrites a blood term for the spouse of the person it was meant for.
    ///
    /// `in_law` is the gender of that spouse. Terms with no in-law form
    /// are returned unchanged.
    pub fn as_in_law(self, in_law: Gender) -> Term {
        match self {
            Term::Descendant { depth: 1, .. } => Term::ChildInLaw(in_law),
            Term::Descendant { depth: 2, .. } => Term::GrandchildInLaw(in_law),
            Term::ElderSibling(_) => Term::ElderSiblingInLaw(in_law),
            Term::YoungerSibling(_) => Term::YoungerSiblingInLaw(in_law),
            Term::ParentSibling { role, depth: 2 } => match role {
                ParentSibling::Chu => Term::AuntByMarriage(Side::Paternal),
                ParentSibling::Cau => Term::AuntByMarriage(Side::Maternal),
                ParentSibling::Co | ParentSibling::Di => Term::UncleByMarriage,
                ParentSibling::Bac => self,
            },
            other => other,
        }
    }
}

fn gendered(gender: Gender, female: &'static str, otherwise: &'static str) -> &'static str {
    if gender.is_female() {
        female
    } else {
        otherwise
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Term::Ancestor { depth, gender, side } => match depth {
                1 => write!(f, "{}", gendered(gender, "Mẹ", "Cha")),
                2 => write!(f, "{} {}", gendered(gender, "Bà", "Ông"), side.suffix()),
                3 => write!(f, "{} {}", gendered(gender, "Cụ bà", "Cụ ông"), side.suffix()),
                _ => write!(f, "{}", ancestor_title(depth)),
            },
            Term::Descendant { depth, gender } => {
                let suffix = match gender {
                    Gender::Male => " trai",
                    Gender::Female => " gái",
                    Gender::Other => "",
                };
                write!(f, "{}{}", descendant_title(depth), suffix)
            }
            Term::Posterity => write!(f, "Hậu duệ"),
            Term::Forebear => write!(f, "Tiền bối"),
            Term::ElderSibling(g) => write!(f, "{}", gendered(g, "Chị gái", "Anh trai")),
            Term::YoungerSibling(g) => write!(f, "{}", gendered(g, "Em gái", "Em trai")),
            Term::ParentSibling { role, depth } => {
                let female = role.is_female();
                match depth {
                    0..=2 => write!(f, "{}", role.as_str()),
                    3 => write!(f, "{} {}", if female { "Bà" } else { "Ông" }, role.as_str()),
                    4 => write!(
                        f,
                        "{} {}",
                        if female { "Cụ bà" } else { "Cụ ông" },
                        role.as_str()
                    ),
                    _ => write!(f, "{} {}", ancestor_title(depth - 1), role.as_str()),
                }
            }
            Term::ElderCousin(g) => write!(f, "{}", gendered(g, "Chị họ", "Anh họ")),
            Term::YoungerCousin => write!(f, "Em họ"),
            Term::CousinParentSibling(role) => write!(f, "{} họ", role.as_str()),
            Term::CousinGrandparent(g) => write!(f, "{}", gendered(g, "Bà họ", "Ông họ")),
            Term::CousinDescendant => write!(f, "Cháu họ"),
            Term::Kin => write!(f, "Họ hàng"),
            Term::Spouse(g) => write!(f, "{}", gendered(g, "Vợ", "Chồng")),
            Term::Stranger => write!(f, "Người dưng"),
            Term::ChildInLaw(g) => write!(f, "{}", in_law_word("Con", g)),
            Term::GrandchildInLaw(g) => write!(f, "{}", in_law_word("Cháu", g)),
            Term::ElderSiblingInLaw(g) => {
                write!(f, "{}", if g.is_male() { "Anh rể" } else { "Chị dâu" })
            }
            Term::YoungerSiblingInLaw(g) => write!(f, "{}", in_law_word("Em", g)),
            Term::UncleByMarriage => write!(f, "Dượng"),
            Term::AuntByMarriage(Side::Paternal) => write!(f, "Thím"),
            Term::AuntByMarriage(Side::Maternal) => write!(f, "Mợ"),
        }
    }
}

/// "rể" for a son-in-law style relation, "dâu" otherwise.
fn in_law_word(base: &str, gender: Gender) -> String {
    format!("{} {}", base, if gender.is_male() { "rể" } else { "dâu" })
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
