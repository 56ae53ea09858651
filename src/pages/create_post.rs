//! Post creation page for signed-in visitors.
//!
//! Posts live in a page-local signal; there is no backend to publish to.

#[cfg(test)]
#[path = "create_post_test.rs"]
mod create_post_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::NavConfig;
use crate::state::auth::AuthContext;

/// A post submitted from the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub body: String,
}

/// Trim and check a form draft.
///
/// # Errors
///
/// Returns a user-facing message when the title or body is blank.
pub fn build_post(title: &str, body: &str) -> Result<Post, &'static str> {
    let title = title.trim();
    let body = body.trim();
    if title.is_empty() {
        return Err("Title is required.");
    }
    if body.is_empty() {
        return Err("Write something before publishing.");
    }
    Ok(Post { title: title.to_owned(), body: body.to_owned() })
}

#[component]
pub fn CreatePostPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<NavConfig>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let posts = RwSignal::new(Vec::<(u32, Post)>::new());
    let next_id = RwSignal::new(0_u32);

    let on_publish = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_post(&title.get(), &body.get()) {
            Ok(post) => {
                let id = next_id.get();
                next_id.set(id + 1);
                posts.update(|list| list.insert(0, (id, post)));
                title.set(String::new());
                body.set(String::new());
                info.set(String::new());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    let on_sign_out = move |_| match auth.sign_out() {
        Ok(()) => navigate(&config.login_path, NavigateOptions::default()),
        Err(e) => {
            log::warn!("sign out: {e}");
            info.set(format!("Sign out failed: {e}"));
        }
    };

    view! {
        <div class="create-post-page">
            <header class="create-post-page__header">
                <h1>"New Post"</h1>
                <button class="btn" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </header>
            <form class="create-post-form" on:submit=on_publish>
                <input
                    class="create-post-form__title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="create-post-form__body"
                    placeholder="Write your post"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    "Publish"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="create-post-page__message">{move || info.get()}</p>
            </Show>
            <ul class="create-post-page__posts">
                <For each=move || posts.get() key=|(id, _)| *id let:entry>
                    <li class="post-card">
                        <h2>{entry.1.title}</h2>
                        <p>{entry.1.body}</p>
                    </li>
                </For>
            </ul>
        </div>
    }
}
