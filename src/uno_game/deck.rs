//! Card set construction and the stack type used for the draw deck and the
//! discard pile.

use super::card::{Card, CardId, CardType, Color};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 108;

/// A stack of cards. The last element is the top: cards are drawn from and
/// pushed onto that end only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pile whose top is the last card of `cards`.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates from the bottom of the pile to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Empties the pile, returning its cards bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

/// Builds the full, ordered card set: per color one 0, two of each 1–9 and
/// two each of skip, reverse and draw two, then four wild and four wild draw
/// four cards.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut push = |color: Color, card_type: CardType| {
        let id = CardId(deck.len() as u16);
        deck.push(Card::new(id, color, card_type));
    };

    for color in Color::CHROMATIC {
        push(color, CardType::Number(0));

        for number in 1..=9 {
            push(color, CardType::Number(number));
            push(color, CardType::Number(number));
        }

        for _ in 0..2 {
            push(color, CardType::Skip);
            push(color, CardType::Reverse);
            push(color, CardType::DrawTwo);
        }
    }

    for _ in 0..4 {
        push(Color::Wild, CardType::Wild);
    }
    for _ in 0..4 {
        push(Color::Wild, CardType::WildDrawFour);
    }

    deck
}

/// Returns a uniformly shuffled copy of `cards` (Fisher–Yates).
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// A freshly built deck in random order, ready to deal from.
pub fn new_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Pile {
    Pile::from_cards(shuffle(&build_deck(), rng))
}
