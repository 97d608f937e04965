use serde::Serialize;

const APP_NAME: &str = "Music Explorer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub title: String,
    pub text: String,
    pub url: String,
}

fn with_query(base_url: &str, key: &str, value: &str) -> String {
    format!(
        "{}?{}={}",
        base_url.trim_end_matches('?'),
        key,
        urlencoding::encode(value)
    )
}

pub fn genre_share_link(base_url: &str, genre_id: &str, genre_name: &str) -> ShareLink {
    ShareLink {
        title: format!("{} - {}", genre_name, APP_NAME),
        text: format!("Check out {} on {}!", genre_name, APP_NAME),
        url: with_query(base_url, "genre", genre_id),
    }
}

pub fn search_share_link(base_url: &str, query: &str) -> ShareLink {
    ShareLink {
        title: format!("Search: {} - {}", query, APP_NAME),
        text: format!("Search results for \"{}\" on {}", query, APP_NAME),
        url: with_query(base_url, "search", query),
    }
}
