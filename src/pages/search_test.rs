use super::*;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn missing_params_mean_all_posts_latest_first() {
    let filters = SearchFilters::from_lookup(lookup(&[]));
    assert_eq!(filters, SearchFilters::default());
    assert_eq!(filters.to_post_query().endpoint(), "/api/post/getposts?order=desc&limit=9");
}

#[test]
fn params_map_onto_backend_query() {
    let filters = SearchFilters::from_lookup(lookup(&[("searchTerm", " rust "), ("category", "technology"), ("sort", "asc")]));
    assert_eq!(filters.term, "rust");
    assert_eq!(filters.sort, SortOrder::Oldest);
    assert_eq!(
        filters.to_post_query().to_query_string(),
        "category=technology&searchTerm=rust&order=asc&limit=9"
    );
}

#[test]
fn unknown_sort_falls_back_to_latest() {
    assert_eq!(SortOrder::parse("sideways"), SortOrder::Latest);
    assert_eq!(SortOrder::parse("ASC"), SortOrder::Oldest);
}

#[test]
fn location_round_trips_through_lookup() {
    let filters = SearchFilters { term: "a & b".to_owned(), category: "sports".to_owned(), sort: SortOrder::Oldest };
    let location = filters.to_location();
    assert_eq!(location, "/search?searchTerm=a+%26+b&sort=asc&category=sports");

    let query = location.trim_start_matches("/search?");
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes()).into_owned().collect();
    let parsed = SearchFilters::from_lookup(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()));
    assert_eq!(parsed, filters);
}

#[test]
fn location_omits_empty_term_and_category() {
    assert_eq!(SearchFilters::default().to_location(), "/search?sort=desc");
}

#[test]
fn category_links_are_encoded() {
    assert_eq!(category_location("sports"), "/search?sort=desc&category=sports");
    assert_eq!(category_location("arts & crafts+#1"), "/search?sort=desc&category=arts+%26+crafts%2B%231");
}

#[test]
fn category_link_reads_back_as_the_same_category() {
    let location = category_location("a&b=c");
    let query = location.trim_start_matches("/search?");
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes()).into_owned().collect();
    let parsed = SearchFilters::from_lookup(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()));
    assert_eq!(parsed.category, "a&b=c");
    assert_eq!(parsed.term, "");
}
