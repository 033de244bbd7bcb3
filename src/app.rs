use leptos::*;
use leptos_router::*;

use crate::config::AppConfig;
use crate::pages::{HomePage, NotFoundPage, PeoplePage};

const ACTIVE_LINK: &str = "navbar-item is-active has-background-grey-lighter";
const LINK: &str = "navbar-item";

#[component]
fn NavBar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav
            data-cy="nav"
            class="navbar is-fixed-top has-shadow"
            role="navigation"
            aria-label="main navigation"
        >
            <div class="container">
                <div class="navbar-brand">
                    <A
                        href="/"
                        class=move || if pathname.with(|p| p == "/") { ACTIVE_LINK } else { LINK }
                    >
                        "Home"
                    </A>
                    <A
                        href="/people"
                        class=move || {
                            if pathname.with(|p| p.starts_with("/people")) { ACTIVE_LINK } else { LINK }
                        }
                    >
                        "People"
                    </A>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    tracing::info!(api_url = %config.api_url, "starting people table");
    provide_context(config);

    view! {
        <Router>
            <div data-cy="app">
                <NavBar/>
            </div>
            <main class="section">
                <div class="container">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/home" view=|| view! { <Redirect path="/"/> }/>
                        <Route path="/people/*slug" view=PeoplePage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </div>
            </main>
        </Router>
    }
}
