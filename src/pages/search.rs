//! Post search with term, category and sort filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL query string is the source of truth: the sidebar form only pushes
//! a new `/search?...` location, and the results loader re-runs whenever the
//! parsed filters change. Reloading or sharing a search URL reproduces it.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::post_list::PostList;
use crate::config::POSTS_PAGE_SIZE;
use crate::net::api::{self, PostQuery};
use crate::state::forms::CATEGORIES;
use crate::state::loader::Paged;
use crate::util::loader::{load_more, use_cancel_token, use_loader};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Latest,
    Oldest,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Latest => "desc",
            Self::Oldest => "asc",
        }
    }

    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("asc") { Self::Oldest } else { Self::Latest }
    }
}

/// Filters parsed from the `/search` query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub term: String,
    /// Empty means every category.
    pub category: String,
    pub sort: SortOrder,
}

impl SearchFilters {
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            term: get("searchTerm").map(|t| t.trim().to_owned()).unwrap_or_default(),
            category: get("category").map(|c| c.trim().to_owned()).unwrap_or_default(),
            sort: get("sort").as_deref().map(SortOrder::parse).unwrap_or_default(),
        }
    }

    /// Backend query for the first results page.
    pub fn to_post_query(&self) -> PostQuery {
        PostQuery {
            search_term: Some(self.term.clone()),
            category: Some(self.category.clone()),
            order: Some(self.sort.as_param().to_owned()),
            limit: Some(POSTS_PAGE_SIZE),
            ..PostQuery::default()
        }
    }

    /// In-app location that reproduces these filters.
    pub fn to_location(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if !self.term.is_empty() {
            serializer.append_pair("searchTerm", &self.term);
        }
        serializer.append_pair("sort", self.sort.as_param());
        if !self.category.is_empty() {
            serializer.append_pair("category", &self.category);
        }
        format!("/search?{}", serializer.finish())
    }
}

/// Search location listing every post in `category`.
pub fn category_location(category: &str) -> String {
    SearchFilters { category: category.trim().to_owned(), ..SearchFilters::default() }.to_location()
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let current = move || query.with(|q| SearchFilters::from_lookup(|key| q.get(key)));

    let term = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let sort = RwSignal::new(SortOrder::default());
    Effect::new(move || {
        let filters = current();
        term.set(filters.term);
        category.set(filters.category);
        sort.set(filters.sort);
    });

    let posts = use_loader(current, |filters: SearchFilters| async move {
        api::fetch_posts(&filters.to_post_query())
            .await
            .map(|envelope| Paged::first(envelope.posts, POSTS_PAGE_SIZE))
    });
    let alive = use_cancel_token();
    let on_more = Callback::new(move |()| {
        let Some(start) = posts.with_untracked(|m| m.state().payload().map(Paged::next_start)) else {
            return;
        };
        let next = query.with_untracked(|q| SearchFilters::from_lookup(|key| q.get(key))).to_post_query().starting_at(start);
        load_more(posts, alive.clone(), POSTS_PAGE_SIZE, async move {
            api::fetch_posts(&next).await.map(|envelope| envelope.posts)
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filters = SearchFilters {
            term: term.get_untracked().trim().to_owned(),
            category: category.get_untracked(),
            sort: sort.get_untracked(),
        };
        navigate(&filters.to_location(), NavigateOptions::default());
    };

    view! {
        <section class="search">
            <form class="search__filters" on:submit=on_submit>
                <label class="search__label">
                    "Search term"
                    <input
                        type="text"
                        placeholder="Search..."
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                </label>
                <label class="search__label">
                    "Sort"
                    <select
                        prop:value=move || sort.get().as_param()
                        on:change=move |ev| sort.set(SortOrder::parse(&event_target_value(&ev)))
                    >
                        <option value="desc">"Latest"</option>
                        <option value="asc">"Oldest"</option>
                    </select>
                </label>
                <label class="search__label">
                    "Category"
                    <select prop:value=move || category.get() on:change=move |ev| category.set(event_target_value(&ev))>
                        <option value="">"All"</option>
                        {CATEGORIES
                            .iter()
                            .map(|(value, name)| view! { <option value=*value>{*name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit">"Apply filters"</button>
            </form>
            <div class="search__results">
                <h1>"Posts results"</h1>
                <PostList posts=posts on_more=on_more empty="No posts found."/>
            </div>
        </section>
    }
}
