use leptos::*;
use leptos_router::use_params_map;

use crate::table::PeopleTable;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <h1 class="title">"Home Page"</h1> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <h1 class="title">"Page not found"</h1> }
}

/// Normalises the `*slug` wildcard; an empty match is the bare listing.
pub fn slug_param(raw: Option<&str>) -> Option<String> {
    let slug = raw?.trim_matches('/');
    (!slug.is_empty()).then(|| slug.to_string())
}

/// Serves `/people` and `/people/<slug>`. The slug is read from the route
/// here and handed to the table as a plain signal.
#[component]
pub fn PeoplePage() -> impl IntoView {
    let params = use_params_map();
    let route_slug =
        create_memo(move |_| params.with(|p| slug_param(p.get("slug").map(String::as_str))));

    view! {
        <div>
            <h1 class="title">"People Page"</h1>
            <div class="block">
                <div class="box table-container">
                    <PeopleTable route_slug=route_slug/>
                </div>
            </div>
        </div>
    }
}
