use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use rust_embed::Embed;

pub const WORDS_PER_MINUTE: usize = 200;

/// Successfully loaded posts only; unknown names never get an entry.
pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);
/// Client-side listing cache, keyed by the limits the pages ask for.
pub static GLOBAL_META_CACHE: LazyLock<DashMap<usize, Vec<PostMeta>>> =
    LazyLock::new(DashMap::new);

/// Every embedded post, newest first. Filled once on the server.
#[cfg(feature = "ssr")]
static ALL_META: std::sync::OnceLock<Vec<PostMeta>> = std::sync::OnceLock::new();

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "blog"]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub read_minutes: usize,
}

impl PostMeta {
    pub fn href(&self) -> String {
        format!("/blog/{}", self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Couldn't parse blog posts")]
    ParseError,
}

/// Whole minutes to read `body`, never less than one.
pub fn read_minutes(body: &str) -> usize {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Newest first, at most `limit` entries (all when `limit` is 0).
pub fn newest_first(mut posts: Vec<PostMeta>, limit: usize) -> Vec<PostMeta> {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    if limit > 0 {
        posts.truncate(limit);
    }
    posts
}

#[cfg(feature = "ssr")]
fn parse_meta(file: &str, content: &str) -> Result<PostMeta, BlogError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or(BlogError::ParseError)?;
    Ok(PostMeta {
        name: file.trim_end_matches(".md").to_string(),
        title: fm.data.title,
        description: fm.data.description,
        date: fm.data.date,
        read_minutes: read_minutes(&fm.content),
    })
}

#[cfg(feature = "ssr")]
fn load(file: &str) -> Result<String, BlogError> {
    let content = Assets::get(file).ok_or(BlogError::NotFound)?;
    String::from_utf8(content.data.into()).map_err(|_| BlogError::ParseError)
}

#[cfg(feature = "ssr")]
fn all_meta() -> Result<&'static [PostMeta], BlogError> {
    if let Some(all) = ALL_META.get() {
        return Ok(all.as_slice());
    }
    let posts = Assets::iter()
        .filter(|s| s.ends_with(".md"))
        .map(|s| parse_meta(&s, &load(&s)?))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("loaded {} blog posts", posts.len());
    Ok(ALL_META.get_or_init(|| newest_first(posts, 0)).as_slice())
}

#[cfg(feature = "ssr")]
pub async fn get_meta(limit: usize) -> Result<Vec<PostMeta>, BlogError> {
    let all = all_meta()?;
    let take = if limit == 0 { all.len() } else { limit.min(all.len()) };
    Ok(all[..take].to_vec())
}

#[cfg(feature = "ssr")]
pub async fn get_post(name: String) -> Result<Post, BlogError> {
    let cache = &*GLOBAL_POST_CACHE;
    if let Some(p) = cache.get(&name) {
        return Ok(p.clone());
    }
    let file = format!("{name}.md");
    let content = load(&file).inspect_err(|e| tracing::warn!("couldn't load post {name}: {e}"))?;
    let meta = parse_meta(&file, &content)?;
    let matter = Matter::<YAML>::new();
    let body = matter.parse(&content).content;
    let parser = Parser::new_ext(&body, Options::all());

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    let post = Post {
        meta,
        content: html_output,
    };
    cache.insert(name, post.clone());
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta(name: &str, day: u32) -> PostMeta {
        PostMeta {
            name: name.to_string(),
            title: name.to_string(),
            description: String::new(),
            date: Utc.with_ymd_and_hms(2025, 8, day, 0, 0, 0).unwrap(),
            read_minutes: 1,
        }
    }

    #[test]
    fn test_read_minutes() {
        assert_eq!(read_minutes(""), 1);
        assert_eq!(read_minutes(&"word ".repeat(200)), 1);
        assert_eq!(read_minutes(&"word ".repeat(201)), 2);
        assert_eq!(read_minutes(&"word\n".repeat(1150)), 6);
    }

    #[test]
    fn test_newest_first() {
        let posts = vec![meta("old", 1), meta("newest", 15), meta("mid", 5)];
        let recent = newest_first(posts.clone(), 2);
        assert_eq!(
            recent.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["newest", "mid"]
        );
        assert_eq!(newest_first(posts, 0).len(), 3);
    }

    #[test]
    fn test_href() {
        assert_eq!(meta("hello-world", 1).href(), "/blog/hello-world");
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_unknown_posts_are_not_cached() {
        for i in 0..50 {
            let name = format!("missing-post-{i}");
            assert!(matches!(
                get_post(name.clone()).await,
                Err(BlogError::NotFound)
            ));
            assert!(!GLOBAL_POST_CACHE.contains_key(&name));
        }
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_listing_limits_share_one_load() {
        let all = get_meta(0).await.unwrap();
        assert!(!all.is_empty());
        for limit in 1..100 {
            let posts = get_meta(limit).await.unwrap();
            assert_eq!(posts.len(), limit.min(all.len()));
            assert_eq!(posts[..], all[..posts.len()]);
        }
        // requests never populate the per-limit client cache
        assert!(GLOBAL_META_CACHE.is_empty());
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_loaded_post_is_cached() {
        let all = get_meta(0).await.unwrap();
        let name = all[0].name.clone();
        let post = get_post(name.clone()).await.unwrap();
        assert_eq!(post.meta.name, name);
        assert!(GLOBAL_POST_CACHE.contains_key(&name));
    }
}
