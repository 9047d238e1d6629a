use std::fmt;

// card filtering
//
// cards carry a data-category and optionally a coming-soon marker.  "all" and "coming-soon" are
// pseudo-filters, anything else is matched against the category verbatim
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Filter {
    All,
    ComingSoon,
    Category(String),
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Card {
    pub category: Option<String>,
    pub coming_soon: bool,
}

impl Filter {
    pub fn parse(value: &str) -> Filter {
        match value {
            "all" => Filter::All,
            "coming-soon" => Filter::ComingSoon,
            other => Filter::Category(other.to_owned()),
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Filter::All => true,
            Filter::ComingSoon => card.coming_soon,
            Filter::Category(category) => card.category.as_deref() == Some(category.as_str()),
        }
    }

    pub fn count(&self, cards: &[Card]) -> usize {
        cards.iter().filter(|card| self.matches(card)).count()
    }

    pub fn label(&self) -> String {
        match self {
            Filter::All => String::from("All"),
            Filter::ComingSoon => String::from("Coming Soon"),
            Filter::Category(category) => capitalize(category),
        }
    }

    /// Chip text with the live number of matching cards, e.g. "Games (4)".
    pub fn counted_label(&self, cards: &[Card]) -> String {
        format!("{} ({})", self.label(), self.count(cards))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::ComingSoon => f.write_str("coming-soon"),
            Filter::Category(category) => f.write_str(category),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Visibility of every card under `filter`, in the same order as `cards`.
pub fn visibility(filter: &Filter, cards: &[Card]) -> Vec<bool> {
    cards.iter().map(|card| filter.matches(card)).collect()
}

// headers follow the filter directly; under coming-soon the matches span several categories, so
// a header stays up only while at least one of its cards is still showing
pub fn header_visible(category: &str, filter: &Filter, cards: &[Card]) -> bool {
    match filter {
        Filter::All => true,
        Filter::Category(selected) => selected == category,
        Filter::ComingSoon => cards
            .iter()
            .any(|card| card.category.as_deref() == Some(category) && card.coming_soon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(category: &str, coming_soon: bool) -> Card {
        Card {
            category: Some(category.to_owned()),
            coming_soon,
        }
    }

    fn catalog() -> Vec<Card> {
        vec![
            card("games", false),
            card("tools", true),
            card("games", false),
            card("music", true),
            card("tools", false),
        ]
    }

    #[test]
    fn test_coming_soon_shows_only_marked_cards() {
        let cards = catalog();
        assert_eq!(
            visibility(&Filter::ComingSoon, &cards),
            vec![false, true, false, true, false]
        );
    }

    #[test]
    fn test_category_and_all() {
        let cards = catalog();
        assert_eq!(Filter::parse("all").count(&cards), 5);
        assert_eq!(Filter::parse("games").count(&cards), 2);
        assert_eq!(Filter::parse("video").count(&cards), 0);
        assert!(!Filter::parse("games").matches(&Card::default()));
    }

    #[test]
    fn test_parse_round_trips_through_display() {
        for token in ["all", "coming-soon", "tools"] {
            assert_eq!(Filter::parse(token).to_string(), token);
        }
    }

    #[test]
    fn test_counted_labels() {
        let cards = catalog();
        assert_eq!(Filter::All.counted_label(&cards), "All (5)");
        assert_eq!(Filter::ComingSoon.counted_label(&cards), "Coming Soon (2)");
        assert_eq!(Filter::parse("tools").counted_label(&cards), "Tools (2)");
        assert_eq!(Filter::parse("").label(), "");
    }

    #[test]
    fn test_headers_follow_visible_cards() {
        let cards = catalog();
        assert!(header_visible("games", &Filter::All, &cards));
        assert!(!header_visible("games", &Filter::ComingSoon, &cards));
        assert!(header_visible("music", &Filter::ComingSoon, &cards));
        assert!(!header_visible("tools", &Filter::parse("games"), &cards));
    }

    #[test]
    fn test_empty_category_header_follows_filter() {
        let cards = catalog();
        assert!(header_visible("video", &Filter::All, &cards));
        assert!(header_visible("video", &Filter::parse("video"), &cards));
        assert!(!header_visible("video", &Filter::parse("games"), &cards));
        assert!(!header_visible("video", &Filter::ComingSoon, &cards));
    }
}
