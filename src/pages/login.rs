//! Login page: stores a session marker and moves on to post creation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::NavConfig;
use crate::state::auth::{AuthContext, SessionUser};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<NavConfig>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            info.set("Enter a name first.".to_owned());
            return;
        }
        match auth.sign_in(&SessionUser { name: name_value }) {
            Ok(()) => navigate(&config.home_path, NavigateOptions::default()),
            Err(e) => {
                log::warn!("login: {e}");
                info.set(format!("Sign in failed: {e}"));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Postdesk"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
