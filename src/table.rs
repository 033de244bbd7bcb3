use leptos::*;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::relations::{resolve_rows, PersonCell, PersonRow};
use crate::state::{LoadStatus, PeopleView};

pub fn link_class(female: bool) -> &'static str {
    if female {
        "has-text-danger"
    } else {
        ""
    }
}

pub fn row_class(selected: bool) -> &'static str {
    if selected {
        "has-background-warning"
    } else {
        ""
    }
}

/// A message shown in place of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub data_cy: &'static str,
    pub class: &'static str,
    pub text: &'static str,
}

pub fn status_notice(status: &LoadStatus) -> Option<Notice> {
    match status {
        LoadStatus::Error => Some(Notice {
            data_cy: "peopleLoadingError",
            class: "has-text-danger",
            text: "Something went wrong",
        }),
        LoadStatus::Empty => Some(Notice {
            data_cy: "noPeopleMessage",
            class: "",
            text: "There are no people on the server",
        }),
        LoadStatus::Loading | LoadStatus::Ready(_) => None,
    }
}

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="Loader" data-cy="loader">
            <div class="Loader__content"></div>
        </div>
    }
}

#[component]
pub fn PersonLink(cell: PersonCell) -> impl IntoView {
    match cell {
        PersonCell::Link { text, href, female } => view! {
            <A href=href class=link_class(female)>{text}</A>
        }
        .into_view(),
        PersonCell::Text(text) => text.into_view(),
        PersonCell::Missing => "-".into_view(),
    }
}

#[component]
fn PersonRowView(row: PersonRow, selected: bool, set_view: WriteSignal<PeopleView>) -> impl IntoView {
    let PersonRow { slug, name, sex, born, died, mother, father } = row;

    view! {
        <tr
            data-cy="person"
            class=row_class(selected)
            on:click=move |_| set_view.update(|view| view.select(slug.clone()))
        >
            <td><PersonLink cell=name/></td>
            <td>{sex}</td>
            <td>{born}</td>
            <td>{died}</td>
            <td><PersonLink cell=mother/></td>
            <td><PersonLink cell=father/></td>
        </tr>
    }
}

/// The people listing. Fetches the collection on mount and again whenever
/// `route_slug` changes; the slug only seeds the row selection.
#[component]
pub fn PeopleTable(#[prop(into)] route_slug: Signal<Option<String>>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (view_state, set_view) = create_signal(PeopleView::default());

    create_effect(move |_| {
        let slug = route_slug.get();
        let config = config.clone();
        set_view.update(PeopleView::begin_load);
        tracing::debug!(url = %config.api_url, ?slug, "loading people");

        spawn_local(async move {
            let outcome = api::get_people(&config).await;
            match &outcome {
                Ok(people) => tracing::info!(count = people.len(), "people loaded"),
                Err(e) => tracing::warn!("people fetch failed: {e}"),
            }
            // The view may have been unmounted while the request was in flight.
            set_view.try_update(|view| view.finish_load(outcome, slug));
        });
    });

    move || {
        view_state.with(|view| match &view.status {
            LoadStatus::Loading => view! { <Loader/> }.into_view(),
            LoadStatus::Error | LoadStatus::Empty => status_notice(&view.status)
                .map(|notice| {
                    view! { <p data-cy=notice.data_cy class=notice.class>{notice.text}</p> }
                })
                .into_view(),
            LoadStatus::Ready(people) => {
                let rows = resolve_rows(people)
                    .into_iter()
                    .map(|row| {
                        let selected = view.is_selected(&row.slug);
                        view! { <PersonRowView row=row selected=selected set_view=set_view/> }
                    })
                    .collect_view();

                view! {
                    <table
                        data-cy="peopleTable"
                        class="table is-striped is-hoverable is-narrow is-fullwidth"
                    >
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Sex"</th>
                                <th>"Born"</th>
                                <th>"Died"</th>
                                <th>"Mother"</th>
                                <th>"Father"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                .into_view()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Sex};

    #[test]
    fn female_links_are_highlighted() {
        assert_eq!(link_class(true), "has-text-danger");
        assert_eq!(link_class(false), "");
    }

    #[test]
    fn only_selected_row_is_marked() {
        assert_eq!(row_class(true), "has-background-warning");
        assert_eq!(row_class(false), "");
    }

    #[test]
    fn error_and_empty_show_one_notice() {
        let error = status_notice(&LoadStatus::Error).unwrap();
        assert_eq!(error.data_cy, "peopleLoadingError");
        assert_eq!(error.class, "has-text-danger");

        let empty = status_notice(&LoadStatus::Empty).unwrap();
        assert_eq!(empty.data_cy, "noPeopleMessage");
        assert_eq!(empty.text, "There are no people on the server");
    }

    #[test]
    fn loading_and_ready_show_no_notice() {
        let alice = Person {
            name: "Alice".to_string(),
            sex: Sex::Female,
            born: None,
            died: None,
            mother_name: None,
            father_name: None,
            slug: "alice".to_string(),
        };
        assert_eq!(status_notice(&LoadStatus::Loading), None);
        assert_eq!(status_notice(&LoadStatus::Ready(vec![alice])), None);
    }
}
