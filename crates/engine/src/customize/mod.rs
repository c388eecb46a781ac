//! Content Customizer — placeholder substitution, summary regeneration and
//! skills reordering over an opaque template text. The template's markup
//! syntax is never interpreted, only rewritten around; a working copy is
//! transformed and the stored template is never touched.

pub mod placeholders;
pub mod skills;
pub mod summary;

use std::fmt;

use tracing::warn;

use crate::models::CustomizationContext;

/// Step-level degradations recorded while customizing. The call still
/// returns the best text achievable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizeWarning {
    MissingSummaryBlock,
    MissingSkillsBlock,
}

impl fmt::Display for CustomizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomizeWarning::MissingSummaryBlock => {
                write!(f, "template has no summary block")
            }
            CustomizeWarning::MissingSkillsBlock => {
                write!(f, "template has no skills block")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CustomizedDocument {
    pub text: String,
    pub warnings: Vec<CustomizeWarning>,
}

/// Block markers recognized inside templates. The surrounding comment
/// syntax (`%`, `//`, `<!-- -->`) is irrelevant; only the marker text on
/// the line matters.
const SUMMARY_BLOCK: &str = "SUMMARY";
const SKILLS_BLOCK: &str = "SKILLS";

/// Customizes one template for one posting. Idempotent: running the output
/// through again with the same context changes nothing, because
/// substitution leaves no re-matchable tokens, the summary is a pure
/// function of `ctx`, and the skills reorder is a stable sort.
pub fn customize(template: &str, ctx: &CustomizationContext) -> CustomizedDocument {
    let mut warnings = Vec::new();

    // 1. identity placeholders
    let text = placeholders::substitute(
        template,
        ctx.company.as_deref(),
        ctx.job_title.as_deref(),
    );

    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    let had_trailing_newline = text.ends_with('\n');

    // 2. summary regeneration
    match block_bounds(&lines, SUMMARY_BLOCK) {
        Some((begin, end)) => {
            let replacement = summary::compose_summary(ctx);
            lines.splice(begin + 1..end, std::iter::once(replacement));
        }
        None => {
            warn!("template has no {SUMMARY_BLOCK} block; skipping summary regeneration");
            warnings.push(CustomizeWarning::MissingSummaryBlock);
        }
    }

    // 3. skills reordering
    match block_bounds(&lines, SKILLS_BLOCK) {
        Some((begin, end)) => {
            let reordered = skills::reorder_skills(&lines[begin + 1..end], &ctx.key_technologies);
            lines.splice(begin + 1..end, reordered);
        }
        None => {
            warn!("template has no {SKILLS_BLOCK} block; skipping skills reordering");
            warnings.push(CustomizeWarning::MissingSkillsBlock);
        }
    }

    let mut out = lines.join("\n");
    if had_trailing_newline {
        out.push('\n');
    }

    CustomizedDocument {
        text: out,
        warnings,
    }
}

/// Finds the `BEGIN name` / `END name` marker lines. Returns their line
/// indices, or `None` when either marker is absent or out of order.
fn block_bounds(lines: &[String], name: &str) -> Option<(usize, usize)> {
    let begin_marker = format!("BEGIN {name}");
    let end_marker = format!("END {name}");

    let begin = lines.iter().position(|l| l.contains(&begin_marker))?;
    let end = lines[begin + 1..]
        .iter()
        .position(|l| l.contains(&end_marker))?
        + begin
        + 1;
    Some((begin, end))
}
