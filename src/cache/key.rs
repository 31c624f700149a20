//! Cache key construction
//!
//! Keys are plain strings built from the action name and its normalized
//! parameters. The search query is quoted so that separators inside it
//! cannot make two different requests collide.

use std::fmt;

/// Cache key for a single proxied action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheKey<'a> {
    /// `tags` must already be sorted and de-duplicated
    Search {
        query: &'a str,
        from: u32,
        size: u32,
        tags: &'a [String],
    },
    Details {
        id: &'a str,
    },
    Featured,
    Tags,
}

impl fmt::Display for CacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Search {
                query,
                from,
                size,
                tags,
            } => write!(f, "search:{:?}:{}:{}:{}", query, from, size, tags.join(",")),
            CacheKey::Details { id } => write!(f, "details:{}", id),
            CacheKey::Featured => f.write_str("featured"),
            CacheKey::Tags => f.write_str("tags"),
        }
    }
}
