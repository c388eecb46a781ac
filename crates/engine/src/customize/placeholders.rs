//! Placeholder substitution — one normalization pass folds every accepted
//! token variant onto its canonical spelling, then a single replacement
//! fills in the value or leaves a review sentinel. Unifying the variants
//! first rules out the half-replaced-template failure mode.

/// Canonical identity tokens templates use.
pub const COMPANY_TOKEN: &str = "COMPANY_NAME";
pub const JOB_TITLE_TOKEN: &str = "JOB_TITLE";

/// Sentinels left in place of a missing value so downstream review catches
/// it. Deliberately free of the underscore token shapes, so a second
/// customization pass cannot re-match them.
pub const COMPANY_PENDING: &str = "[[COMPANY PENDING]]";
pub const JOB_TITLE_PENDING: &str = "[[JOB TITLE PENDING]]";

/// Accepted variant spellings, bracketed and escaped forms first so they
/// collapse onto the bare token before it is substituted.
const COMPANY_VARIANTS: &[&str] = &[
    "{{COMPANY_NAME}}",
    "[COMPANY\\_NAME]",
    "[COMPANY_NAME]",
    "<COMPANY_NAME>",
    "COMPANY\\_NAME",
];
const JOB_TITLE_VARIANTS: &[&str] = &[
    "{{JOB_TITLE}}",
    "[JOB\\_TITLE]",
    "[JOB_TITLE]",
    "<JOB_TITLE>",
    "JOB\\_TITLE",
];

/// Substitutes company and title tokens across the whole template. Titles
/// are normalized to title case with known acronyms preserved.
pub fn substitute(text: &str, company: Option<&str>, job_title: Option<&str>) -> String {
    let mut out = text.to_string();
    for variant in COMPANY_VARIANTS {
        out = out.replace(variant, COMPANY_TOKEN);
    }
    for variant in JOB_TITLE_VARIANTS {
        out = out.replace(variant, JOB_TITLE_TOKEN);
    }

    let company_value = company
        .map(str::to_string)
        .unwrap_or_else(|| COMPANY_PENDING.to_string());
    let title_value = job_title
        .map(title_case)
        .unwrap_or_else(|| JOB_TITLE_PENDING.to_string());

    out.replace(COMPANY_TOKEN, &company_value)
        .replace(JOB_TITLE_TOKEN, &title_value)
}

/// Acronyms preserved verbatim during title casing. "it consultant" must
/// become "IT Consultant", never "It Consultant".
const ACRONYMS: &[&str] = &[
    "AI", "ML", "MLOps", "IT", "QA", "API", "SRE", "UI", "UX", "CI", "CD", "AWS", "GCP", "SQL",
    "NLP", "LLM", "iOS", "DevOps", "ETL", "SaaS", "VP",
];

/// Short connectives kept lowercase mid-title.
const CONNECTIVES: &[&str] = &["of", "and", "for", "the", "to", "in", "at", "with"];

/// Title-cases a job title: "head of devops engineering" →
/// "Head of DevOps Engineering".
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .enumerate()
        .map(|(i, word)| cased_word(word, i == 0))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cased_word(word: &str, first: bool) -> String {
    // hyphenated words are cased per segment ("full-stack" → "Full-Stack")
    if word.len() > 1 && word.contains('-') {
        return word
            .split('-')
            .map(|segment| cased_word(segment, true))
            .collect::<Vec<_>>()
            .join("-");
    }

    if let Some(acronym) = ACRONYMS.iter().find(|a| a.eq_ignore_ascii_case(word)) {
        return (*acronym).to_string();
    }

    let lower = word.to_lowercase();
    if !first && CONNECTIVES.contains(&lower.as_str()) {
        return lower;
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
