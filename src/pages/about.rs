//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About Daily Updates"</h1>
            <p>
                "Daily Updates is a small newsroom publishing short articles on world and local \
                 news, sports, technology and business."
            </p>
            <p>
                "Anyone can read and search the archive. Sign in to join the conversation in the \
                 comments under each article."
            </p>
        </section>
    }
}
