use std::sync::Arc;

/// Foreground tone for text and buttons drawn on a card background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tone {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardTheme {
    /// CSS-style color, e.g. `#F5F5F7`.
    pub background: String,
    pub text: Tone,
    pub button: Tone,
}

impl CardTheme {
    pub fn new(background: impl Into<String>, text: Tone, button: Tone) -> Self {
        Self {
            background: background.into(),
            text,
            button,
        }
    }
}

/// One display item of a showcase strip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Card {
    /// Stable identity. Falls back to the card's position when absent.
    pub id: Option<u64>,
    pub title: String,
    pub category: String,
    /// Image reference (path or URL); resolved by the render layer.
    pub image: String,
    pub description: String,
    pub link: Option<String>,
    pub theme: CardTheme,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_theme(mut self, theme: CardTheme) -> Self {
        self.theme = theme;
        self
    }
}

/// An immutable, ordered card sequence handed to a component at construction.
///
/// Cheap to clone (`Arc`). With `feature = "serde"` it (de)serializes as a plain array of
/// cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Card>", into = "Vec<Card>"))]
pub struct Deck {
    cards: Arc<[Card]>,
}

impl Deck {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Builds a deck whose card themes rotate through `palette`.
    ///
    /// An empty palette leaves each card's own theme untouched.
    pub fn themed(cards: impl IntoIterator<Item = Card>, palette: &[CardTheme]) -> Self {
        Self::new(cards.into_iter().enumerate().map(|(i, card)| {
            if palette.is_empty() {
                card
            } else {
                card.with_theme(palette[i % palette.len()].clone())
            }
        }))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Stable key for the card at `index`: its `id`, or the index itself.
    pub fn key_for(&self, index: usize) -> Option<u64> {
        let card = self.cards.get(index)?;
        Some(card.id.unwrap_or(index as u64))
    }

    pub fn index_of_key(&self, key: u64) -> Option<usize> {
        (0..self.len()).find(|&i| self.key_for(i) == Some(key))
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards.to_vec()
    }
}
