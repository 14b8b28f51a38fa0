//! Admin page for publishing a new post.

use leptos::prelude::*;

use crate::components::post_editor::{EditorTarget, PostEditor};
use crate::state::forms::PostForm;

#[component]
pub fn CreatePostPage() -> impl IntoView {
    view! {
        <section class="editor-page">
            <h1>"Create a post"</h1>
            <PostEditor initial=PostForm::default() target=EditorTarget::Create/>
        </section>
    }
}
