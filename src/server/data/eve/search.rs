//! Query planning for corporation name search.
//!
//! The strategy depends on the shape of the query:
//!
//! | Query                      | Strategy  | Limit | Order              |
//! |----------------------------|-----------|-------|--------------------|
//! | fewer than 3 characters    | prefix    | 20    | member count desc  |
//! | 3+ characters, multi-word  | full text | 50    | text score desc    |
//! | 3+ characters, single word | substring | 50    | member count desc  |
//!
//! Name and ticker are both matched, case-insensitively.

/// Queries shorter than this many characters use the prefix strategy.
pub const SHORT_QUERY_LENGTH: usize = 3;
/// Result limit of the prefix strategy.
pub const SHORT_QUERY_LIMIT: u64 = 20;
/// Result limit of the full text and substring strategies.
pub const SEARCH_LIMIT: u64 = 50;

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '!';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Lowercased `LIKE` pattern anchored at the start, e.g. `ab%`
    Prefix { pattern: String },
    /// Relevance-ranked match of every term of the query
    FullText { query: String, terms: Vec<String> },
    /// Lowercased `LIKE` pattern matching anywhere, e.g. `%abc%`
    Substring { pattern: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    pub strategy: SearchStrategy,
    pub limit: u64,
}

impl SearchPlan {
    /// Plans the search for a user-provided query.
    ///
    /// The query is trimmed and its length counted in characters.
    ///
    /// # Returns
    /// - `Some(SearchPlan)` - Plan to execute
    /// - `None` - The query is empty after trimming, nothing should be queried
    pub fn for_query(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let lowered = query.to_lowercase();

        if query.chars().count() < SHORT_QUERY_LENGTH {
            return Some(Self {
                strategy: SearchStrategy::Prefix {
                    pattern: format!("{}%", escape_like(&lowered)),
                },
                limit: SHORT_QUERY_LIMIT,
            });
        }

        let terms: Vec<String> = lowered.split_whitespace().map(str::to_string).collect();

        let strategy = if terms.len() > 1 {
            SearchStrategy::FullText {
                query: query.to_string(),
                terms,
            }
        } else {
            SearchStrategy::Substring {
                pattern: format!("%{}%", escape_like(&lowered)),
            }
        };

        Some(Self {
            strategy,
            limit: SEARCH_LIMIT,
        })
    }
}

/// Escapes `LIKE` wildcards so user input only ever matches literally.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Relevance of a corporation for a full text query: the number of query terms found in
/// its name or ticker.
pub fn text_score(terms: &[String], name: &str, ticker: &str) -> usize {
    let haystack = format!("{} {}", name, ticker).to_lowercase();

    terms
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .count()
}
