//! Kinship term resolution.
//!
//! Answers "what does A call B, and B call A" for two persons of the
//! family, in Vietnamese kinship vocabulary:
//!
//! - [`term`]: the vocabulary itself and the seniority rule
//! - [`blood`]: relations through a shared ancestor
//! - [`bridge`]: relations through one marriage, with in-law terms

pub mod blood;
pub mod bridge;
pub mod term;

use crate::graph::FamilyGraph;
use giapha_core::{Person, Relationship};
use serde::Serialize;

pub use blood::Category;
pub use term::{compare_seniority, ParentSibling, Seniority, Side, Term};

/// The answer to a kinship query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KinshipResult {
    /// What A calls B.
    pub a_calls_b: Term,

    /// What B calls A.
    pub b_calls_a: Term,

    pub description: String,

    /// Generations between A and B through the common ancestor; 0 for
    /// spouses and -1 when no relation was found.
    pub distance: i32,

    /// Human-readable steps explaining the relation.
    pub path_labels: Vec<String>,
}

impl KinshipResult {
    pub(crate) fn married(a: &Person, b: &Person) -> Self {
        Self {
            a_calls_b: Term::Spouse(b.gender),
            b_calls_a: Term::Spouse(a.gender),
            description: "Quan hệ Hôn nhân".to_string(),
            distance: 0,
            path_labels: vec![format!("{} và {} là vợ chồng.", a.full_name, b.full_name)],
        }
    }

    pub(crate) fn strangers() -> Self {
        Self {
            a_calls_b: Term::Stranger,
            b_calls_a: Term::Stranger,
            description: "Không tìm thấy quan hệ trong phạm vi dữ liệu".to_string(),
            distance: -1,
            path_labels: Vec::new(),
        }
    }

    /// True unless this is the "no relation" answer.
    pub fn is_related(&self) -> bool {
        self.distance >= 0
    }
}

/// Resolves the kinship between `a` and `b` within a family.
///
/// `a` and `b` need not appear in `persons`; their ids are looked up in
/// the relationships either way. Returns `None` when both are the same
/// person.
pub fn compute_kinship<'a>(
    a: &'a Person,
    b: &'a Person,
    persons: &'a [Person],
    relationships: &'a [Relationship],
) -> Option<KinshipResult> {
    FamilyGraph::from_records(persons, relationships).kinship(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use giapha_core::Gender;

    struct Family {
        persons: Vec<Person>,
        relationships: Vec<Relationship>,
    }

    impl Family {
        fn new() -> Self {
            Self {
                persons: Vec::new(),
                relationships: Vec::new(),
            }
        }

        fn person(mut self, id: &str, gender: Gender, year: Option<i32>) -> Self {
            let person = Person::new(id, id, gender);
            self.persons.push(match year {
                Some(year) => person.with_birth_year(year),
                None => person,
            });
            self
        }

        fn child(mut self, parent: &str, child: &str) -> Self {
            self.relationships.push(Relationship::child(parent, child));
            self
        }

        fn marriage(mut self, a: &str, b: &str) -> Self {
            self.relationships.push(Relationship::marriage(a, b));
            self
        }

        fn get(&self, id: &str) -> &Person {
            self.persons.iter().find(|p| p.id == id).unwrap()
        }

        fn kinship(&self, a: &str, b: &str) -> KinshipResult {
            compute_kinship(self.get(a), self.get(b), &self.persons, &self.relationships)
                .unwrap()
        }

        fn terms(&self, a: &str, b: &str) -> (String, String) {
            let result = self.kinship(a, b);
            (result.a_calls_b.to_string(), result.b_calls_a.to_string())
        }
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_siblings() {
        let family = Family::new()
            .person("p", Gender::Male, None)
            .person("a", Gender::Male, Some(1980))
            .person("b", Gender::Female, Some(1985))
            .child("p", "a")
            .child("p", "b");

        let result = family.kinship("a", "b");
        assert_eq!(result.a_calls_b.to_string(), "Em gái");
        assert_eq!(result.b_calls_a.to_string(), "Anh trai");
        assert_eq!(result.distance, 2);
        assert_eq!(result.description, "Anh chị em ruột (Tổ tiên chung: p)");
        assert_eq!(
            result.path_labels,
            vec!["a cách p 1 đời.".to_string(), "b cách p 1 đời.".to_string()]
        );

        assert_eq!(family.terms("b", "a"), pair("Anh trai", "Em gái"));
    }

    #[test]
    fn test_grandparents() {
        let family = Family::new()
            .person("gpa", Gender::Male, None)
            .person("gma", Gender::Female, None)
            .person("dad", Gender::Male, None)
            .person("mom", Gender::Female, None)
            .person("boy", Gender::Male, None)
            .person("girl", Gender::Female, None)
            .child("gpa", "dad")
            .child("gma", "mom")
            .child("dad", "boy")
            .child("mom", "girl");

        assert_eq!(family.terms("gpa", "boy"), pair("Cháu trai", "Ông nội"));
        assert_eq!(family.terms("girl", "gma"), pair("Bà ngoại", "Cháu gái"));
        assert_eq!(family.terms("dad", "boy"), pair("Con trai", "Cha"));

        let result = family.kinship("boy", "gpa");
        assert_eq!(result.distance, 2);
        assert_eq!(result.description, "Quan hệ Trực hệ (Tổ tiên chung: gpa)");
    }

    #[test]
    fn test_great_grandparent() {
        let family = Family::new()
            .person("g1", Gender::Female, None)
            .person("g2", Gender::Female, None)
            .person("g3", Gender::Male, None)
            .person("g4", Gender::Male, None)
            .child("g1", "g2")
            .child("g2", "g3")
            .child("g3", "g4");

        // The line runs through a daughter, so it is the maternal side.
        assert_eq!(family.terms("g4", "g1"), pair("Cụ bà ngoại", "Chắt trai"));
    }

    #[test]
    fn test_uncles_and_aunts() {
        let family = Family::new()
            .person("gp", Gender::Male, None)
            .person("dad", Gender::Male, Some(1960))
            .person("elder_bro", Gender::Male, Some(1955))
            .person("younger_bro", Gender::Male, Some(1965))
            .person("sister", Gender::Female, Some(1970))
            .person("kid", Gender::Female, None)
            .child("gp", "dad")
            .child("gp", "elder_bro")
            .child("gp", "younger_bro")
            .child("gp", "sister")
            .child("dad", "kid");

        assert_eq!(family.terms("kid", "elder_bro"), pair("Bác", "Cháu gái"));
        assert_eq!(family.terms("kid", "younger_bro"), pair("Chú", "Cháu gái"));
        assert_eq!(family.terms("kid", "sister"), pair("Cô", "Cháu gái"));
        assert_eq!(family.terms("younger_bro", "kid"), pair("Cháu gái", "Chú"));
        assert_eq!(
            family.kinship("kid", "sister").description,
            "Bên Nội (Vế trên) (Tổ tiên chung: gp)"
        );
    }

    #[test]
    fn test_maternal_uncle_and_great_uncle() {
        let family = Family::new()
            .person("root", Gender::Male, None)
            .person("mom", Gender::Female, None)
            .person("uncle", Gender::Male, None)
            .person("me", Gender::Male, None)
            .person("my_son", Gender::Male, None)
            .child("root", "mom")
            .child("root", "uncle")
            .child("mom", "me")
            .child("me", "my_son");

        assert_eq!(family.terms("me", "uncle"), pair("Cậu", "Cháu trai"));
        assert_eq!(family.terms("my_son", "uncle"), pair("Ông Cậu", "Chắt trai"));
    }

    #[test]
    fn test_cousins() {
        let family = Family::new()
            .person("gp", Gender::Male, None)
            .person("dad", Gender::Male, Some(1950))
            .person("aunt", Gender::Female, Some(1955))
            .person("me", Gender::Female, Some(1990))
            .person("cousin", Gender::Male, Some(1980))
            .person("cousin_kid", Gender::Female, None)
            .child("gp", "dad")
            .child("gp", "aunt")
            .child("dad", "me")
            .child("aunt", "cousin")
            .child("cousin", "cousin_kid");

        // Branch seniority decides, not the cousins' own ages.
        let result = family.kinship("me", "cousin");
        assert_eq!(result.a_calls_b.to_string(), "Em họ");
        assert_eq!(result.b_calls_a.to_string(), "Chị họ");
        assert_eq!(result.description, "Anh em họ Nội (Tổ tiên chung: gp)");
        assert_eq!(result.distance, 4);

        // cousin_kid descends through aunt, so me is on her maternal side.
        assert_eq!(family.terms("cousin_kid", "me"), pair("Dì họ", "Cháu họ"));
        assert_eq!(family.terms("me", "cousin_kid"), pair("Cháu họ", "Dì họ"));
        assert_eq!(
            family.kinship("cousin_kid", "me").description,
            "Họ hàng Ngoại (Tổ tiên chung: gp)"
        );
    }

    #[test]
    fn test_distant_cousin_grandparent() {
        let family = Family::new()
            .person("root", Gender::Male, None)
            .person("x1", Gender::Male, None)
            .person("y1", Gender::Male, None)
            .person("x2", Gender::Female, None)
            .person("y2", Gender::Male, None)
            .person("y3", Gender::Male, None)
            .person("y4", Gender::Male, None)
            .child("root", "x1")
            .child("root", "y1")
            .child("x1", "x2")
            .child("y1", "y2")
            .child("y2", "y3")
            .child("y3", "y4");

        assert_eq!(family.terms("y4", "x2"), pair("Bà họ", "Cháu họ"));
    }

    #[test]
    fn test_spousal_symmetry() {
        let family = Family::new()
            .person("gp", Gender::Male, None)
            .person("dad", Gender::Male, Some(1950))
            .person("uncle", Gender::Male, Some(1958))
            .person("me", Gender::Male, None)
            .person("cousin", Gender::Female, None)
            .person("wife", Gender::Female, None)
            .child("gp", "dad")
            .child("gp", "uncle")
            .child("dad", "me")
            .child("uncle", "cousin")
            .marriage("me", "wife");

        for (a, b) in [("me", "cousin"), ("wife", "gp"), ("me", "wife"), ("dad", "uncle")] {
            let forward = family.kinship(a, b);
            let backward = family.kinship(b, a);
            assert_eq!(forward.a_calls_b, backward.b_calls_a, "{} / {}", a, b);
            assert_eq!(forward.b_calls_a, backward.a_calls_b, "{} / {}", a, b);
            assert_eq!(forward.distance, backward.distance);
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let family = Family::new()
            .person("a", Gender::Male, None)
            .person("b", Gender::Female, None)
            .marriage("a", "b");

        let json = serde_json::to_value(family.kinship("a", "b")).unwrap();
        assert_eq!(json["aCallsB"], "Vợ");
        assert_eq!(json["bCallsA"], "Chồng");
        assert_eq!(json["distance"], 0);
        assert!(json["pathLabels"].is_array());
    }

    #[test]
    fn test_unrelated_is_not_related() {
        let family = Family::new()
            .person("a", Gender::Male, None)
            .person("b", Gender::Female, None);

        let result = family.kinship("a", "b");
        assert!(!result.is_related());
        assert_eq!(result.a_calls_b, Term::Stranger);
    }

    #[test]
    fn test_person_missing_from_list_is_stranger() {
        let persons = vec![Person::new("dad", "Bố", Gender::Male)];
        let relationships = vec![Relationship::child("dad", "ghost_kid")];
        let ghost_kid = Person::new("ghost_kid", "Bé", Gender::Male);

        let result = compute_kinship(&ghost_kid, &persons[0], &persons, &relationships).unwrap();
        assert_eq!(result.a_calls_b, Term::Stranger);
        assert_eq!(result.b_calls_a, Term::Stranger);
        assert_eq!(result.distance, -1);
    }
}
