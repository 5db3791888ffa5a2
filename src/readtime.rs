// src/readtime.rs
//! Reading-time estimation from structured post bodies.

use crate::constants::WORDS_PER_MINUTE;
use crate::model::ContentBlock;
use crate::richtext;

/// Estimates reading time in whole minutes for a post's content.
///
/// Each block's body is rendered to plain text, word-counted on
/// whitespace runs, and rounded up to whole minutes at 200 words per
/// minute. Rounding happens per block and the minutes are summed —
/// deliberately not `ceil(total_words / 200)`, so two half-minute blocks
/// count as two minutes.
pub fn estimate_minutes(content: &[ContentBlock]) -> u32 {
    content
        .iter()
        .map(|block| {
            let text = richtext::as_text(&block.body);
            let words = text.split_whitespace().count() as u32;
            words.div_ceil(WORDS_PER_MINUTE)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::RichTextNode;

    fn block_of_words(count: usize) -> ContentBlock {
        let text = vec!["word"; count].join(" ");
        ContentBlock {
            heading: "section".to_string(),
            body: vec![RichTextNode::paragraph(text)],
        }
    }

    #[test]
    fn empty_content_is_zero_minutes() {
        assert_eq!(estimate_minutes(&[]), 0);
    }

    #[test]
    fn empty_body_contributes_zero() {
        let block = ContentBlock {
            heading: "empty".to_string(),
            body: Vec::new(),
        };
        assert_eq!(estimate_minutes(&[block]), 0);
    }

    #[test]
    fn exactly_one_rate_of_words_is_one_minute() {
        assert_eq!(estimate_minutes(&[block_of_words(200)]), 1);
    }

    #[test]
    fn one_word_over_the_rate_rounds_up() {
        assert_eq!(estimate_minutes(&[block_of_words(201)]), 2);
    }

    #[test]
    fn rounding_is_per_block_not_aggregate() {
        // Three one-word blocks: per-block ceilings sum to 3, while the
        // aggregate ceil(3/200) would be 1.
        let blocks = [block_of_words(1), block_of_words(1), block_of_words(1)];
        assert_eq!(estimate_minutes(&blocks), 3);
    }

    #[test]
    fn whitespace_runs_count_as_single_separators() {
        let block = ContentBlock {
            heading: "spacing".to_string(),
            body: vec![RichTextNode::paragraph("one   two\t three\n four")],
        };
        // 4 words regardless of run lengths
        assert_eq!(estimate_minutes(&[block]), 1);
    }
}
