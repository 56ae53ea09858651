//! Route wrapper that applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` only exists in the browser, so the guard runs in an effect
//! after mount. Until then nothing is rendered, which keeps the server HTML
//! from flashing a view the visitor may not be allowed to see.
//!
//! The decision goes through `navigate::resolve` on the live pathname, so the
//! route table stays the authority on what each path does.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::NavConfig;
use crate::router::navigate::{self, Admission};
use crate::router::table::{RouteName, RouteTable};
use crate::state::auth::AuthContext;

/// Render `children` only if the current path resolves to `route` for this
/// visitor; otherwise replace the history entry with the redirect path.
#[component]
pub fn Guarded(route: RouteName, children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<NavConfig>();
    let table = expect_context::<RouteTable>();
    let auth = expect_context::<AuthContext>();
    let location = use_location();
    let navigate = use_navigate();

    let admitted = RwSignal::new(false);

    Effect::new(move || {
        let path = location.pathname.get_untracked();
        let resolution = navigate::resolve(&table, &config, &path, auth.is_authenticated());
        match navigate::admit(route, resolution) {
            Admission::Render => admitted.set(true),
            Admission::Redirect(to) => {
                log::info!("guard: {} redirected to {to}", route.as_str());
                navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            Admission::Blocked => {
                log::error!("guard: {path} does not resolve to {}", route.as_str());
            }
        }
    });

    view! {
        <Show when=move || admitted.get()>
            {children()}
        </Show>
    }
}
