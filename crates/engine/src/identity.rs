//! Identity extraction — best-effort company and job-title detection from
//! the posting text. Heuristic but deterministic; when nothing usable is
//! found the build is flagged for manual input instead of guessing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "Company: Acme Corp", "Employer - Acme"
    static ref COMPANY_FIELD_RE: Regex =
        Regex::new(r"(?im)^\s*(?:company|employer|organization)\s*[:\-]\s*(.{2,60})$").unwrap();
    /// "About Acme Corp", "Join Acme Corp"
    static ref COMPANY_PHRASE_RE: Regex = Regex::new(
        r"\b(?:About|Join)\s+([A-Z][A-Za-z0-9&.']*(?:\s+[A-Z][A-Za-z0-9&.']*){0,3})"
    )
    .unwrap();
    /// "... at Acme Corp"
    static ref COMPANY_AT_RE: Regex = Regex::new(
        r"\bat\s+([A-Z][A-Za-z0-9&.']*(?:\s+[A-Z][A-Za-z0-9&.']*){0,3})"
    )
    .unwrap();
    /// "Job Title: Senior Backend Engineer"
    static ref TITLE_FIELD_RE: Regex =
        Regex::new(r"(?im)^\s*(?:job title|title|position|role)\s*[:\-]\s*(.{2,80})$").unwrap();
    /// A line that reads as a role title.
    static ref TITLE_LINE_RE: Regex = Regex::new(
        r"(?i)\b(engineer|developer|architect|scientist|designer|manager|analyst|consultant|lead|director)\b"
    )
    .unwrap();
}

/// Lines scanned from the top when looking for a title-like heading.
const TITLE_SCAN_LINES: usize = 10;
const MAX_TITLE_LEN: usize = 80;

/// Capitalized words that are sentence starts, not company-name tails.
const TAIL_STOPWORDS: &[&str] = &["We", "Our", "You", "They", "The", "This", "Where", "Who", "I"];

pub fn extract_job_title(text: &str) -> Option<String> {
    if let Some(caps) = TITLE_FIELD_RE.captures(text) {
        return non_empty(clean_fragment(&caps[1]));
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(TITLE_SCAN_LINES)
        .find(|line| {
            line.len() <= MAX_TITLE_LEN && TITLE_LINE_RE.is_match(line) && !line.ends_with('.')
        })
        .and_then(|line| non_empty(clean_fragment(heading_head(line))))
}

pub fn extract_company(text: &str) -> Option<String> {
    for re in [&*COMPANY_FIELD_RE, &*COMPANY_PHRASE_RE, &*COMPANY_AT_RE] {
        if let Some(caps) = re.captures(text) {
            let candidate = strip_stop_tail(&clean_fragment(&caps[1]));
            if let Some(found) = non_empty(candidate) {
                return Some(found);
            }
        }
    }
    None
}

/// "Senior Rust Engineer — Core Infrastructure" → "Senior Rust Engineer".
fn heading_head(line: &str) -> &str {
    for sep in [" — ", " – ", " - ", " | ", " ("] {
        if let Some(idx) = line.find(sep) {
            return &line[..idx];
        }
    }
    line
}

/// Trims separators and stray punctuation off a captured fragment.
fn clean_fragment(raw: &str) -> String {
    raw.trim()
        .trim_end_matches([',', '.', ';', ':', '|', '-'])
        .trim()
        .to_string()
}

/// Drops trailing sentence-start words that the capitalized-run capture
/// tends to swallow ("at Initech We value..." → "Initech").
fn strip_stop_tail(name: &str) -> String {
    let mut words: Vec<&str> = name.split_whitespace().collect();
    while let Some(last) = words.last() {
        if TAIL_STOPWORDS.contains(last) {
            words.pop();
        } else {
            break;
        }
    }
    words.join(" ")
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_fields_win() {
        let jd = "Job Title: Senior Backend Engineer\nCompany: Acme Corp\nWe build things.";
        assert_eq!(
            extract_job_title(jd).as_deref(),
            Some("Senior Backend Engineer")
        );
        assert_eq!(extract_company(jd).as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_heading_line_yields_title_without_suffix() {
        let jd = "Senior Software Engineer — Platform Team\n\
                  Help us scale our infrastructure.";
        assert_eq!(
            extract_job_title(jd).as_deref(),
            Some("Senior Software Engineer")
        );
    }

    #[test]
    fn test_join_phrase_yields_company() {
        let jd = "Join Initech Systems to build billing software.";
        assert_eq!(extract_company(jd).as_deref(), Some("Initech Systems"));
    }

    #[test]
    fn test_at_phrase_strips_sentence_start_tail() {
        let jd = "You will work as an engineer at Initech We value curiosity.";
        assert_eq!(extract_company(jd).as_deref(), Some("Initech"));
    }

    #[test]
    fn test_lowercase_at_phrases_are_not_companies() {
        let jd = "You will operate services at scale every day.";
        assert_eq!(extract_company(jd), None);
    }

    #[test]
    fn test_no_signals_yield_none() {
        let jd = "We are looking for someone great. Competitive salary.";
        assert_eq!(extract_job_title(jd), None);
        assert_eq!(extract_company(jd), None);
    }

    #[test]
    fn test_prose_paragraphs_are_not_mistaken_for_title_headings() {
        let jd = "Our engineer-led culture means everyone ships code every single \
                  day, and we are proud of it.";
        // Single long prose line ending in a period: not a heading.
        assert_eq!(extract_job_title(jd), None);
    }
}
