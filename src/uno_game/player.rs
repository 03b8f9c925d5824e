use super::card::{Card, CardId};
use super::error::GameError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub is_computer: bool,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn human(id: usize, name: String) -> Self {
        Self {
            id,
            name,
            is_computer: false,
            hand: Vec::new(),
        }
    }

    pub fn computer(id: usize, name: String) -> Self {
        Self {
            id,
            name,
            is_computer: true,
            hand: Vec::new(),
        }
    }

    /// Adds a card to the player's hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.hand.iter().find(|card| card.id == card_id)
    }

    /// Removes the card with the given id from the player's hand.
    /// Returns `Err(GameError::CardNotInHand)` if the player does not hold it.
    pub fn remove_card(&mut self, card_id: CardId) -> Result<Card, GameError> {
        let index = self
            .hand
            .iter()
            .position(|card| card.id == card_id)
            .ok_or(GameError::CardNotInHand)?;
        Ok(self.hand.remove(index))
    }

    /// Checks if the player has won (i.e., their hand is empty).
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}
