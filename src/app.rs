//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session and notification state are created once here and handed down via
//! context. Private and admin routes are wrapped in [`Guarded`], which reads
//! the session and redirects to `/sign-in` when access is not granted.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::Guarded;
use crate::components::header::Header;
use crate::components::toaster::Toaster;
use crate::pages::{
    about::AboutPage, create_post::CreatePostPage, dashboard::DashboardPage, home::HomePage,
    not_found::NotFoundPage, post_details::PostDetailsPage, search::SearchPage, sign_in::SignInPage,
    sign_up::SignUpPage, update_post::UpdatePostPage,
};
use crate::state::session::provide_session;
use crate::state::toast::provide_notifier;
use crate::util::auth::Requirement;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session must exist before any guard or page reads it.
    provide_session();
    provide_notifier();

    view! {
        <Stylesheet id="leptos" href="/pkg/dailyupdates.css"/>
        <Title text="Daily Updates"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=(StaticSegment("post"), ParamSegment("slug")) view=PostDetailsPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! {
                            <Guarded requirement=Requirement::Authenticated>
                                <DashboardPage/>
                            </Guarded>
                        }
                    />
                    <Route
                        path=StaticSegment("create-post")
                        view=|| view! {
                            <Guarded requirement=Requirement::Admin>
                                <CreatePostPage/>
                            </Guarded>
                        }
                    />
                    <Route
                        path=(StaticSegment("update-post"), ParamSegment("post_id"))
                        view=|| view! {
                            <Guarded requirement=Requirement::Admin>
                                <UpdatePostPage/>
                            </Guarded>
                        }
                    />
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
