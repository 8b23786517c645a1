use crate::error::{Error, Result};

/// One element of a query. Elements are conjunctive: every one must match
/// for a document to rank at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryElement {
    /// Bare token, matched against name, authors, sources, and tags
    /// (not `lang`).
    FreeText(String),
    /// `id:` — exact identifier, never fuzzy.
    Id(u64),
    /// `title:` / `ti:`
    Title(String),
    /// `author:` / `a:` / `au:`
    Author(String),
    /// `source:` / `s:` / `src:`
    SourceText(String),
    /// `tag:` / `ta:`
    Tag(String),
    /// `lang:`
    Lang(String),
}

pub type Query = Vec<QueryElement>;

/// Parse one raw token into a query element.
///
/// A `prefix:value` token selects a field scope. An unrecognized alphabetic
/// prefix is an error (it is almost certainly a typo like `titel:`); a head
/// that could not be a prefix at all (empty, digits, punctuation) leaves
/// the whole token, colon included, as free text.
pub fn parse_element(token: &str) -> Result<QueryElement> {
    let Some((prefix, value)) = token.split_once(':') else {
        return Ok(QueryElement::FreeText(token.to_string()));
    };

    let scoped = match prefix {
        "id" => {
            let id = value.parse::<u64>().map_err(|_| {
                Error::QueryParse(format!(
                    "'id:' needs an integer, got '{value}'"
                ))
            })?;
            QueryElement::Id(id)
        }
        "title" | "ti" => QueryElement::Title(value.to_string()),
        "author" | "a" | "au" => QueryElement::Author(value.to_string()),
        "source" | "s" | "src" => QueryElement::SourceText(value.to_string()),
        "tag" | "ta" => QueryElement::Tag(value.to_string()),
        "lang" => QueryElement::Lang(value.to_string()),
        _ if !prefix.is_empty()
            && prefix.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            return Err(Error::QueryParse(format!(
                "unknown search prefix '{prefix}:'"
            )));
        }
        _ => QueryElement::FreeText(token.to_string()),
    };
    Ok(scoped)
}

/// Parse a full query, one element per token.
pub fn parse_query<S: AsRef<str>>(tokens: &[S]) -> Result<Query> {
    tokens.iter().map(|t| parse_element(t.as_ref())).collect()
}
