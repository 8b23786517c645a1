use serde::Serialize;

use crate::{
    cli::SearchArgs,
    error::Result,
    library::{Document, Library},
    matcher::{Score, match_field},
    query::{Query, QueryElement, parse_query},
};

/// A ranked search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub exact: f64,
    pub fuzzy: f64,
    pub document: Document,
}

/// Score one query element against one document. Total: a non-match is
/// `(0,0)`, never an error.
pub fn eval_element(
    elt: &QueryElement,
    doc: &Document,
    exact_only: bool,
) -> Score {
    match elt {
        QueryElement::Id(id) => {
            if doc.id == *id { Score::HIT } else { Score::ZERO }
        }
        QueryElement::FreeText(s) => {
            // Name, authors, sources, tags. Deliberately not `lang`: only
            // the scoped element reaches it.
            let sources = doc.source_strings();
            let targets = std::iter::once(doc.name.as_str())
                .chain(doc.authors.iter().map(String::as_str))
                .chain(sources.iter().map(String::as_str))
                .chain(doc.tags.iter().map(String::as_str));
            match_field(s, targets, exact_only)
        }
        QueryElement::Title(s) => match_field(s, [&doc.name], exact_only),
        QueryElement::Author(s) => match_field(s, &doc.authors, exact_only),
        QueryElement::SourceText(s) => {
            match_field(s, doc.source_strings(), exact_only)
        }
        QueryElement::Tag(s) => match_field(s, &doc.tags, exact_only),
        QueryElement::Lang(s) => match_field(s, [&doc.lang], exact_only),
    }
}

/// Score a whole query against one document.
///
/// Conjunctive gate: if any element scores `(0,0)` the document is out,
/// whatever the other elements say. Otherwise element scores sum
/// componentwise, so longer queries with more matching elements rank
/// higher.
pub fn eval(query: &Query, doc: &Document, exact_only: bool) -> Score {
    let mut total = Score::ZERO;
    for elt in query {
        let score = eval_element(elt, doc, exact_only);
        if score.is_zero() {
            return Score::ZERO;
        }
        total += score;
    }
    total
}

/// Rank every document in the library against the query, best first.
///
/// Linear scan by design; there is no index. Ties beyond (exact, fuzzy)
/// are unspecified.
pub fn search<'a>(
    query: &Query,
    exact_only: bool,
    library: &'a Library,
) -> Vec<(&'a Document, Score)> {
    let mut hits: Vec<(&Document, Score)> = library
        .iter()
        .map(|doc| (doc, eval(query, doc, exact_only)))
        .filter(|(_, score)| !score.is_zero())
        .collect();
    hits.sort_unstable_by(|(_, a), (_, b)| b.cmp_rank(*a));
    hits
}

/// Execute the full search pipeline.
///
/// 1. Parse the query tokens
/// 2. Scan and rank the whole library
/// 3. Limit to -n results (unless --all)
pub fn execute_search(
    args: &SearchArgs,
    library: &Library,
) -> Result<Vec<SearchHit>> {
    let query = parse_query(&args.query)?;
    tracing::debug!(elements = query.len(), exact_only = args.exact, "query parsed");

    let ranked = search(&query, args.exact, library);
    tracing::debug!(scanned = library.len(), matched = ranked.len(), "scan complete");

    let limit = if args.all { ranked.len() } else { args.count };
    Ok(ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (doc, score))| SearchHit {
            rank: i + 1,
            exact: score.exact,
            fuzzy: score.fuzzy,
            document: doc.clone(),
        })
        .collect())
}

/// Format results for human-readable terminal output.
pub fn format_human(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No results found.");
        return;
    }

    for hit in hits {
        let doc = &hit.document;
        println!(
            "{:>3}. [{:.2}/{:.2}] #{} {}",
            hit.rank, hit.exact, hit.fuzzy, doc.id, doc.name
        );
        if !doc.authors.is_empty() {
            println!("     {}", doc.authors.join(", "));
        }
        for source in &doc.sources {
            println!("     {source}");
        }
        if !doc.tags.is_empty() {
            println!("     [{}]", doc.tags.join(", "));
        }
    }
    println!("\n{} result(s)", hits.len());
}

/// Format results as a JSON document on stdout.
pub fn format_json(hits: &[SearchHit]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(hits)?);
    Ok(())
}

/// Format results as bare document ids, one per line.
pub fn format_ids(hits: &[SearchHit]) {
    for hit in hits {
        println!("{}", hit.document.id);
    }
}
