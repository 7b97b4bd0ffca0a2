//! Splits a model reply into the cards the front end displays.

use crate::types::{CARD_BREAK, TITLE_PREFIX};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: Option<String>,
    pub body: String,
}

/// Splits on `[CARD_BREAK]`, dropping blank segments. A card whose first
/// non-blank line starts with `####` takes that line as its title.
pub fn split_cards(text: &str) -> Vec<Card> {
    text.split(CARD_BREAK)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_card)
        .collect()
}

fn parse_card(segment: &str) -> Card {
    let (first, rest) = segment.split_once('\n').unwrap_or((segment, ""));

    match first.trim().strip_prefix(TITLE_PREFIX) {
        Some(title) if !title.starts_with('#') => Card {
            title: Some(title.trim().to_string()),
            body: rest.trim().to_string(),
        },
        _ => Card {
            title: None,
            body: segment.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_hashes_is_not_a_title() {
        let cards = split_cards("##### Not a card title\nbody");
        assert_eq!(cards[0].title, None);
    }
}
