//! Skills-section reordering — floats items matching the classification's
//! technologies to the top of the block without adding, removing, or
//! rewriting a single line.

/// True when a line reads as a list item the reorder may move.
fn is_item_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("\\item") || trimmed.starts_with("- ") || trimmed.starts_with("* ")
}

/// Rank of a line against the relevance-ordered technologies: the index of
/// the first technology it mentions, or `usize::MAX` for no match.
fn relevance_rank(line: &str, key_technologies: &[String]) -> usize {
    let lower = line.to_lowercase();
    key_technologies
        .iter()
        .position(|tech| lower.contains(&tech.to_lowercase()))
        .unwrap_or(usize::MAX)
}

/// Stably reorders the item lines of a skills block. Items matching a key
/// technology float up in relevance order; everything else keeps its
/// original relative order, and non-item lines do not move at all.
pub fn reorder_skills(block: &[String], key_technologies: &[String]) -> Vec<String> {
    let item_slots: Vec<usize> = block
        .iter()
        .enumerate()
        .filter(|(_, line)| is_item_line(line))
        .map(|(i, _)| i)
        .collect();

    let mut items: Vec<&String> = item_slots.iter().map(|&i| &block[i]).collect();
    // Vec::sort_by_key is stable: equal ranks keep their original order.
    items.sort_by_key(|line| relevance_rank(line, key_technologies));

    let reordered: Vec<String> = items.into_iter().cloned().collect();
    let mut out: Vec<String> = block.to_vec();
    for (slot, line) in item_slots.into_iter().zip(reordered) {
        out[slot] = line;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    fn techs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_matching_items_float_up_in_relevance_order() {
        let block = lines(&[
            "\\item Cooking",
            "\\item Kafka streaming",
            "\\item Rust systems work",
        ]);
        let out = reorder_skills(&block, &techs(&["Rust", "Kafka"]));

        assert_eq!(
            out,
            lines(&[
                "\\item Rust systems work",
                "\\item Kafka streaming",
                "\\item Cooking",
            ])
        );
    }

    #[test]
    fn test_unmatched_items_keep_their_original_relative_order() {
        let block = lines(&["- Archery", "- Baking", "- Rust", "- Chess"]);
        let out = reorder_skills(&block, &techs(&["Rust"]));

        assert_eq!(out, lines(&["- Rust", "- Archery", "- Baking", "- Chess"]));
    }

    #[test]
    fn test_non_item_lines_do_not_move() {
        let block = lines(&[
            "Languages:",
            "\\item Python",
            "\\item Rust",
            "Tools:",
            "\\item Excel",
        ]);
        let out = reorder_skills(&block, &techs(&["Rust"]));

        assert_eq!(out[0], "Languages:");
        assert_eq!(out[3], "Tools:");
        // Rust floats into the first item slot; the rest shift down stably.
        assert_eq!(out[1], "\\item Rust");
        assert_eq!(out[2], "\\item Python");
        assert_eq!(out[4], "\\item Excel");
    }

    #[test]
    fn test_no_items_are_added_or_removed() {
        let block = lines(&["\\item A", "\\item B", "prose line"]);
        let out = reorder_skills(&block, &techs(&["B"]));

        assert_eq!(out.len(), block.len());
        let mut sorted_in: Vec<_> = block.clone();
        let mut sorted_out: Vec<_> = out.clone();
        sorted_in.sort();
        sorted_out.sort();
        assert_eq!(sorted_in, sorted_out);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let block = lines(&["* gardening", "* KAFKA cluster ops"]);
        let out = reorder_skills(&block, &techs(&["kafka"]));
        assert_eq!(out[0], "* KAFKA cluster ops");
    }

    #[test]
    fn test_reorder_is_idempotent() {
        let block = lines(&["- Go", "- Rust", "- Kafka", "- Chess"]);
        let key = techs(&["Kafka", "Rust"]);

        let once = reorder_skills(&block, &key);
        let twice = reorder_skills(&once, &key);
        assert_eq!(once, twice);
    }
}
