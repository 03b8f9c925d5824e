use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    InvalidMove,
    CardNotInHand,
    GameAlreadyOver,
    AwaitingColorChoice,
    NoColorPending,
    InvalidColor,
    InvalidPlayerCount(usize),
    NotComputerTurn,
    EmptyDeck,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove => write!(f, "That card cannot be played now"),
            GameError::CardNotInHand => write!(f, "Card not in hand"),
            GameError::GameAlreadyOver => write!(f, "Game is already over"),
            GameError::AwaitingColorChoice => write!(f, "A color must be chosen first"),
            GameError::NoColorPending => write!(f, "No color choice is pending"),
            GameError::InvalidColor => write!(f, "Choose red, blue, green or yellow"),
            GameError::InvalidPlayerCount(n) => {
                write!(f, "Expected 1 to 3 computer players, got {}", n)
            }
            GameError::NotComputerTurn => write!(f, "It is not a computer player's turn"),
            GameError::EmptyDeck => write!(f, "Deck is empty"),
        }
    }
}

impl std::error::Error for GameError {}
