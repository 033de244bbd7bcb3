use crate::models::Person;

/// What a name/mother/father cell shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PersonCell {
    Link {
        text: String,
        href: String,
        female: bool,
    },
    Text(String),
    Missing,
}

impl PersonCell {
    /// Builds the cell for `name`, linking it when `person` resolved.
    pub fn new(name: Option<&str>, person: Option<&Person>) -> Self {
        match (person, name) {
            (Some(p), name) => PersonCell::Link {
                text: name.unwrap_or_default().to_string(),
                href: p.href(),
                female: p.is_female(),
            },
            (None, Some(n)) if !n.is_empty() => PersonCell::Text(n.to_string()),
            (None, _) => PersonCell::Missing,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PersonRow {
    pub slug: String,
    pub name: PersonCell,
    pub sex: &'static str,
    pub born: Option<i32>,
    pub died: Option<i32>,
    pub mother: PersonCell,
    pub father: PersonCell,
}

// Parents are referenced by display name; duplicates resolve to the first match.
pub fn find_by_name<'a>(people: &'a [Person], name: Option<&str>) -> Option<&'a Person> {
    let name = name?;
    people.iter().find(|p| p.name == name)
}

pub fn resolve_row(people: &[Person], person: &Person) -> PersonRow {
    let mother_name = person.mother_name.as_deref();
    let father_name = person.father_name.as_deref();

    PersonRow {
        slug: person.slug.clone(),
        name: PersonCell::new(Some(person.name.as_str()), Some(person)),
        sex: person.sex.tag(),
        born: person.born,
        died: person.died,
        mother: PersonCell::new(mother_name, find_by_name(people, mother_name)),
        father: PersonCell::new(father_name, find_by_name(people, father_name)),
    }
}

/// Resolves every row in collection order.
pub fn resolve_rows(people: &[Person]) -> Vec<PersonRow> {
    people.iter().map(|p| resolve_row(people, p)).collect()
}
