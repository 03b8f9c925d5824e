use super::card::{Card, CardId, Color};
use super::player::Player;
use super::rules::is_legal_play;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What a computer player decided to do. `card: None` means it has to draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerMove {
    pub card: Option<Card>,
    pub color: Option<Color>,
}

/// Picks a card for a computer player.
///
/// Legal action cards (skip, reverse, draw two, wild draw four) are preferred
/// and chosen at random among themselves; otherwise any legal card is chosen
/// at random. Wild-family picks come with the color the rest of the hand is
/// richest in.
pub fn choose_computer_move<R: Rng + ?Sized>(
    player: &Player,
    top_card: &Card,
    active_color: Option<Color>,
    rng: &mut R,
) -> ComputerMove {
    let playable: Vec<&Card> = player
        .hand
        .iter()
        .filter(|card| is_legal_play(card, top_card, active_color))
        .collect();

    let specials: Vec<&Card> = playable
        .iter()
        .copied()
        .filter(|card| card.card_type.is_special())
        .collect();

    let pool = if specials.is_empty() {
        &playable
    } else {
        &specials
    };

    let Some(card) = pool.choose(rng).map(|card| (*card).clone()) else {
        return ComputerMove::default();
    };

    let color = card
        .card_type
        .is_wild_family()
        .then(|| preferred_color(&player.hand, card.id));

    ComputerMove {
        card: Some(card),
        color,
    }
}

/// Most common chromatic color in `hand`, ignoring the card being played.
/// Ties go to the color listed first in [`Color::CHROMATIC`].
pub fn preferred_color(hand: &[Card], playing: CardId) -> Color {
    let mut counts = [0usize; 4];
    for card in hand.iter().filter(|card| card.id != playing) {
        if let Some(slot) = Color::CHROMATIC.iter().position(|&c| c == card.color) {
            counts[slot] += 1;
        }
    }

    let best = (1..counts.len()).fold(0, |best, slot| {
        if counts[slot] > counts[best] {
            slot
        } else {
            best
        }
    });
    Color::CHROMATIC[best]
}
