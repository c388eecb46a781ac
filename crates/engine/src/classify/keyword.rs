//! Keyword Classifier — deterministic scoring of a job description against
//! every category in the catalog. Pure computation, no I/O; this is the
//! fallback path whenever the oracle is unavailable.

use tracing::debug;

use crate::catalog::{RoleCatalog, RoleCategory};
use crate::models::{ClassificationResult, ClassificationSource};

/// A keyword hit inside the posting text.
#[derive(Debug, Clone)]
struct KeywordHit {
    term: String,
    weight: f32,
    first_pos: usize,
}

#[derive(Debug)]
struct CategoryScore<'a> {
    category: &'a RoleCategory,
    raw: f32,
    hits: Vec<KeywordHit>,
}

/// Classifies `text` against the catalog. Total: the worst case is the
/// default category with confidence 0.
pub fn classify(catalog: &RoleCatalog, text: &str) -> ClassificationResult {
    let normalized = normalize(text);

    let mut scores: Vec<CategoryScore<'_>> = catalog
        .iter()
        .map(|cat| score_category(cat, &normalized))
        .collect();

    let total: f32 = scores.iter().map(|s| s.raw).sum();
    if total <= 0.0 {
        return default_result(catalog);
    }

    // Percentage gate: a gated category must reach its minimum share of the
    // total matched weight before it may win, even with the highest raw
    // score. Categories with no hits never win on tie-breaks alone.
    scores.retain(|s| {
        s.raw > 0.0
            && s.category
                .min_share
                .map(|gate| s.raw / total >= gate)
                .unwrap_or(true)
    });

    if scores.is_empty() {
        return default_result(catalog);
    }

    // Raw score desc, then priority asc, then id asc. The catalog is an
    // ordered Vec and the comparator chain is total, so the ranking can
    // never depend on map iteration order.
    scores.sort_by(|a, b| {
        b.raw
            .partial_cmp(&a.raw)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.priority.cmp(&b.category.priority))
            .then_with(|| a.category.id.cmp(&b.category.id))
    });

    let winner = &scores[0];
    let confidence = (winner.raw / total).clamp(0.0, 1.0);

    let mut hits = winner.hits.clone();
    hits.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.first_pos.cmp(&b.first_pos))
    });
    let key_technologies: Vec<String> = hits.into_iter().map(|h| h.term).collect();

    let top_terms = key_technologies
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let reasoning = format!(
        "'{}' carries {:.0}% of the matched keyword weight (top terms: {top_terms}).",
        winner.category.display_name,
        confidence * 100.0,
    );

    debug!(
        category = %winner.category.id,
        confidence,
        "keyword classification complete"
    );

    ClassificationResult {
        category_id: winner.category.id.clone(),
        confidence,
        key_technologies,
        reasoning,
        source: ClassificationSource::Keyword,
    }
}

fn default_result(catalog: &RoleCatalog) -> ClassificationResult {
    let default = catalog.default_category();
    ClassificationResult {
        category_id: default.id.clone(),
        confidence: 0.0,
        key_technologies: Vec::new(),
        reasoning: "No recognizable role keywords in the posting; using the default category."
            .to_string(),
        source: ClassificationSource::Keyword,
    }
}

fn score_category<'a>(category: &'a RoleCategory, normalized_text: &str) -> CategoryScore<'a> {
    let mut raw = 0.0_f32;
    let mut hits = Vec::new();

    for keyword in &category.keywords {
        let phrase = normalize(&keyword.term);
        if phrase.is_empty() {
            continue;
        }
        if let Some(pos) = find_phrase(normalized_text, &phrase) {
            // A phrase counts once, however often it recurs in the text.
            raw += keyword.weight;
            hits.push(KeywordHit {
                term: keyword.term.clone(),
                weight: keyword.weight,
                first_pos: pos,
            });
        }
    }

    CategoryScore {
        category,
        raw,
        hits,
    }
}

/// Lowercases and strips punctuation: anything other than alphanumerics,
/// `+` and `#` becomes a space, runs of spaces collapse. "CI/CD" → "ci cd",
/// "Next.js" → "next js", "C++" survives as "c++".
pub(crate) fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = true;

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '+' || ch == '#' {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Finds `phrase` in normalized `text` on word boundaries. A trailing
/// plural `s` on the final word is tolerated, so "vector database" matches
/// "vector databases" while "java" still does not match "javascript".
/// Returns the byte offset of the first occurrence.
pub(crate) fn find_phrase(text: &str, phrase: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(rel) = text[from..].find(phrase) {
        let start = from + rel;
        let end = start + phrase.len();

        let boundary_before = start == 0 || text.as_bytes()[start - 1] == b' ';
        let rest = &text[end..];
        let boundary_after =
            rest.is_empty() || rest.starts_with(' ') || rest == "s" || rest.starts_with("s ");

        if boundary_before && boundary_after {
            return Some(start);
        }
        from = end;
    }
    None
}
