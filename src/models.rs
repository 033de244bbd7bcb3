use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// The single-character tag used on the wire and in the table.
    pub fn tag(self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

/// One record of the people collection, as served by the remote endpoint.
///
/// `mother_name` / `father_name` are display names, not keys: they are
/// matched against other records' `name` (see `relations`).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub sex: Sex,
    #[serde(default)]
    pub born: Option<i32>,
    #[serde(default)]
    pub died: Option<i32>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
    pub slug: String,
}

impl Person {
    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }

    pub fn href(&self) -> String {
        format!("/people/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name":"Carolus Haverbeke","sex":"m","born":1832,"died":1905,
         "fatherName":"Carel Haverbeke","motherName":"Maria van Brussel",
         "slug":"carolus-haverbeke-1832"},
        {"name":"Emma de Milliano","sex":"f","born":1876,"died":1956,
         "fatherName":"Petrus de Milliano","motherName":null,
         "slug":"emma-de-milliano-1876"}
    ]"#;

    #[test]
    fn parses_people_payload() {
        let people: Vec<Person> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].sex, Sex::Male);
        assert_eq!(people[0].mother_name.as_deref(), Some("Maria van Brussel"));
        assert_eq!(people[1].sex, Sex::Female);
        assert_eq!(people[1].mother_name, None);
        assert_eq!(people[1].born, Some(1876));
    }

    #[test]
    fn missing_optional_fields_are_absent() {
        let person: Person =
            serde_json::from_str(r#"{"name":"Alice","sex":"f","slug":"alice"}"#).unwrap();
        assert_eq!(person.born, None);
        assert_eq!(person.died, None);
        assert_eq!(person.father_name, None);
        assert!(person.is_female());
        assert_eq!(person.href(), "/people/alice");
    }

    #[test]
    fn rejects_unknown_sex_tag() {
        let res = serde_json::from_str::<Person>(r#"{"name":"X","sex":"x","slug":"x"}"#);
        assert!(res.is_err());
    }
}
