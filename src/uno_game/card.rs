use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// The four play colors, in tie-break priority order.
    pub const CHROMATIC: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn is_chromatic(self) -> bool {
        self != Color::Wild
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Wild => "wild",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardType {
    pub fn is_wild_family(self) -> bool {
        matches!(self, CardType::Wild | CardType::WildDrawFour)
    }

    /// Cards the computer prefers to get rid of first. A plain wild is not
    /// one of them.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            CardType::Skip | CardType::Reverse | CardType::DrawTwo | CardType::WildDrawFour
        )
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Number(n) => write!(f, "{}", n),
            CardType::Skip => f.write_str("skip"),
            CardType::Reverse => f.write_str("reverse"),
            CardType::DrawTwo => f.write_str("draw two"),
            CardType::Wild => f.write_str("wild"),
            CardType::WildDrawFour => f.write_str("wild draw four"),
        }
    }
}

/// Position of a card in the freshly built deck; unique for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u16);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub color: Color,
    pub card_type: CardType,
}

impl Card {
    pub fn new(id: CardId, color: Color, card_type: CardType) -> Self {
        Self {
            id,
            color,
            card_type,
        }
    }

    /// True while the card still carries the neutral color, i.e. it has not
    /// been resolved to a chromatic color on the discard pile.
    pub fn is_wild(&self) -> bool {
        self.color == Color::Wild
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.card_type {
            CardType::Wild | CardType::WildDrawFour if self.color == Color::Wild => {
                write!(f, "{}", self.card_type)
            }
            CardType::Wild | CardType::WildDrawFour => {
                write!(f, "{} ({})", self.card_type, self.color)
            }
            _ => write!(f, "{} {}", self.color, self.card_type),
        }
    }
}
