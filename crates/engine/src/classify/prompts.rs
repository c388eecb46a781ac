// Prompt constants for the classification oracle.

/// System prompt — enforces JSON-only output.
pub const CLASSIFY_SYSTEM: &str =
    "You are an expert technical recruiter classifying job postings into role categories. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Classification prompt template. Replace `{category_ids}` and `{jd_text}`
/// before sending.
pub const CLASSIFY_PROMPT_TEMPLATE: &str = r#"Classify the following job description into exactly one role category.

Valid category ids (pick one, spelled verbatim):
{category_ids}

Return a JSON object with this EXACT schema (no extra fields):
{
  "category": "fullstack_engineer",
  "confidence": 0.85,
  "technologies": ["React", "TypeScript"],
  "reasoning": "One or two sentences explaining the decision."
}

Rules:
- "category" MUST be one of the listed ids.
- "confidence" is a number between 0.0 and 1.0.
- "technologies" lists the concrete technologies the posting emphasizes, most important first.
- Classify by the dominant focus of the role. A posting that merely integrates AI APIs into an ordinary product is NOT an AI role; reserve the AI category for roles centered on building, training, or operating models.

JOB DESCRIPTION:
{jd_text}"#;
