use crate::api::PeopleError;
use crate::models::Person;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Error,
    Empty,
    Ready(Vec<Person>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PeopleView {
    pub status: LoadStatus,
    pub selected_slug: Option<String>,
}

impl PeopleView {
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Applies the outcome of a fetch. `route_slug` is the slug the route
    /// carried when the fetch was issued.
    ///
    /// Fetches are not cancelled: when two overlap, the one that resolves
    /// last wins, even if it was issued first.
    pub fn finish_load(
        &mut self,
        outcome: Result<Vec<Person>, PeopleError>,
        route_slug: Option<String>,
    ) {
        match outcome {
            Ok(people) => {
                self.status = if people.is_empty() {
                    LoadStatus::Empty
                } else {
                    LoadStatus::Ready(people)
                };
                if route_slug.is_some() {
                    self.selected_slug = route_slug;
                }
            }
            Err(_) => self.status = LoadStatus::Error,
        }
    }

    pub fn select(&mut self, slug: String) {
        self.selected_slug = Some(slug);
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected_slug.as_deref() == Some(slug)
    }

    pub fn people(&self) -> &[Person] {
        match &self.status {
            LoadStatus::Ready(people) => people,
            _ => &[],
        }
    }
}
