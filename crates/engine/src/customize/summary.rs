//! Summary regeneration — composes the replacement summary paragraph from
//! the classification, never from the template's own boilerplate, so a
//! generic template base cannot leak unrelated domain language across
//! categories.

use crate::models::CustomizationContext;

/// Most technologies named in a regenerated summary.
const MAX_SUMMARY_TECHNOLOGIES: usize = 5;
/// Upper bound on the clause quoted from the posting.
const MAX_CLAUSE_LEN: usize = 160;

/// Composes the replacement summary paragraph. Deterministic in `ctx`.
pub fn compose_summary(ctx: &CustomizationContext) -> String {
    let role = &ctx.role_display_name;

    let mut summary = if ctx.key_technologies.is_empty() {
        format!("{role} with a track record of delivering production software.")
    } else {
        let shown = ctx.key_technologies.len().min(MAX_SUMMARY_TECHNOLOGIES);
        let list = join_natural(&ctx.key_technologies[..shown]);
        format!("{role} with hands-on depth in {list}.")
    };

    if let Some(clause) = &ctx.focus_clause {
        summary.push_str(" Particularly motivated by this role's focus: \"");
        summary.push_str(clause);
        summary.push_str("\".");
    }

    summary
}

/// "a", "a and b", "a, b, and c".
fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

/// Picks the first sentence of the posting that mentions one of the top
/// technologies, trimmed to a review-friendly length. This is the "literal
/// wording" clause quoted in the summary.
pub fn derive_focus_clause(jd_text: &str, key_technologies: &[String]) -> Option<String> {
    let needles: Vec<String> = key_technologies
        .iter()
        .take(MAX_SUMMARY_TECHNOLOGIES)
        .map(|t| t.to_lowercase())
        .collect();
    if needles.is_empty() {
        return None;
    }

    jd_text
        .split(['.', '\n', '!', ';'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .find(|sentence| {
            let lower = sentence.to_lowercase();
            needles.iter().any(|needle| lower.contains(needle))
        })
        .map(truncate_clause)
}

fn truncate_clause(sentence: &str) -> String {
    if sentence.len() <= MAX_CLAUSE_LEN {
        return sentence.to_string();
    }
    let mut cut = MAX_CLAUSE_LEN;
    while !sentence.is_char_boundary(cut) {
        cut -= 1;
    }
    let head = &sentence[..cut];
    let end = head.rfind(' ').unwrap_or(cut);
    format!("{}…", &head[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ctx(techs: &[&str], clause: Option<&str>) -> CustomizationContext {
        CustomizationContext {
            company: Some("Acme".to_string()),
            job_title: Some("Engineer".to_string()),
            role_display_name: "Backend Engineer".to_string(),
            key_technologies: techs.iter().map(|t| t.to_string()).collect(),
            focus_clause: clause.map(str::to_string),
        }
    }

    #[test]
    fn test_summary_names_role_and_top_technologies() {
        let summary = compose_summary(&make_ctx(&["Rust", "Kafka", "PostgreSQL"], None));
        assert!(summary.starts_with("Backend Engineer"));
        assert!(summary.contains("Rust, Kafka, and PostgreSQL"));
    }

    #[test]
    fn test_summary_caps_technologies_at_five() {
        let summary = compose_summary(&make_ctx(
            &["One", "Two", "Three", "Four", "Five", "Sixth"],
            None,
        ));
        assert!(summary.contains("Five"));
        assert!(!summary.contains("Sixth"));
    }

    #[test]
    fn test_summary_quotes_the_focus_clause() {
        let summary = compose_summary(&make_ctx(
            &["Rust"],
            Some("design storage engines for write-heavy workloads"),
        ));
        assert!(summary.contains("\"design storage engines for write-heavy workloads\""));
    }

    #[test]
    fn test_summary_without_technologies_still_reads_well() {
        let summary = compose_summary(&make_ctx(&[], None));
        assert!(summary.starts_with("Backend Engineer"));
        assert!(!summary.contains("hands-on depth in"));
    }

    #[test]
    fn test_join_natural_forms() {
        let one = vec!["a".to_string()];
        let two = vec!["a".to_string(), "b".to_string()];
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(join_natural(&one), "a");
        assert_eq!(join_natural(&two), "a and b");
        assert_eq!(join_natural(&three), "a, b, and c");
    }

    #[test]
    fn test_focus_clause_picks_first_sentence_mentioning_a_technology() {
        let jd = "We are a fast-growing company. You will build Kafka pipelines \
                  at scale. Benefits include snacks.";
        let clause = derive_focus_clause(jd, &["Kafka".to_string()]);
        assert_eq!(
            clause.as_deref(),
            Some("You will build Kafka pipelines at scale")
        );
    }

    #[test]
    fn test_focus_clause_is_none_without_technologies() {
        assert_eq!(derive_focus_clause("any text at all", &[]), None);
    }

    #[test]
    fn test_focus_clause_is_none_when_nothing_matches() {
        let clause = derive_focus_clause("we sell shoes", &["Kafka".to_string()]);
        assert_eq!(clause, None);
    }

    #[test]
    fn test_long_clauses_are_truncated_on_a_word_boundary() {
        let long = format!("Kafka {}", "stream processing at scale ".repeat(20));
        let clause = derive_focus_clause(&long, &["Kafka".to_string()]).unwrap();
        assert!(clause.len() <= MAX_CLAUSE_LEN + '…'.len_utf8());
        assert!(clause.ends_with('…'));
    }
}
