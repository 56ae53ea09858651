//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::config::NavConfig;
use crate::pages::{create_post::CreatePostPage, login::LoginPage};
use crate::router::table::{RouteName, RouteTable};
use crate::state::auth::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the navigation config, route table, and auth signal as context,
/// then mounts the three routes. `/` always redirects to the login path;
/// the other two pass through `Guarded`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = NavConfig::default();
    let table = RouteTable::standard();
    if let Err(e) = table.validate(&config) {
        log::error!("route table: {e}");
    }

    provide_context(AuthContext::browser(&config));
    provide_context(table);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/postdesk.css"/>
        <Title text="Postdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=RouteName::Login.path()/> }/>
                <Route
                    path=StaticSegment(RouteName::Login.segment())
                    view=|| view! { <Guarded route=RouteName::Login><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(RouteName::CreatePost.segment())
                    view=|| view! { <Guarded route=RouteName::CreatePost><CreatePostPage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
