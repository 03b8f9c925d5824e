use super::card::{Card, CardId, Color};
use super::deck::{self, Pile};
use super::effects::apply_effect;
use super::error::GameError;
use super::player::Player;
use super::rules::is_legal_play;
use super::strategy::choose_computer_move;
use super::turn::{next_player_index, Direction};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const HAND_SIZE: usize = 7;
pub const MAX_COMPUTER_PLAYERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// A wild card sits on the discard pile waiting for its color.
    AwaitingColor,
    Complete { winner_id: usize },
}

/// One snapshot of a game. Every action returns a new snapshot and leaves
/// the one it was called on untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub direction: Direction,
    pub deck: Pile,
    pub discard_pile: Pile,
    pub game_started: bool,
    pub status: GameStatus,
    pub message: String,
    pub selected_color: Option<Color>,
}

impl GameState {
    /// Starts a game between one human and `computer_count` computer players.
    pub fn new_game<R: Rng + ?Sized>(
        human_name: &str,
        computer_count: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !(1..=MAX_COMPUTER_PLAYERS).contains(&computer_count) {
            return Err(GameError::InvalidPlayerCount(computer_count));
        }

        let mut deck = deck::new_shuffled_deck(rng);

        let mut players = Vec::with_capacity(computer_count + 1);
        players.push(Player::human(0, human_name.to_string()));
        for id in 1..=computer_count {
            players.push(Player::computer(id, format!("Computer {}", id)));
        }

        // Deal 7 cards to each player
        for _ in 0..HAND_SIZE {
            for player in players.iter_mut() {
                let card = deck.pop().ok_or(GameError::EmptyDeck)?;
                player.add_card(card);
            }
        }

        let mut top_card = deck.pop().ok_or(GameError::EmptyDeck)?;
        if top_card.is_wild() {
            top_card.color = Color::CHROMATIC[rng.random_range(0..Color::CHROMATIC.len())];
        }

        info!(
            "New game for {} against {} computer player(s), opening card {}",
            human_name, computer_count, top_card
        );

        Ok(Self {
            players,
            current_player_index: 0,
            direction: Direction::Clockwise,
            deck,
            discard_pile: Pile::from_cards(vec![top_card]),
            game_started: true,
            status: GameStatus::InProgress,
            message: "Game started! It's your turn.".to_string(),
            selected_color: None,
        })
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.top()
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::Complete { .. })
    }

    pub fn need_to_select_color(&self) -> bool {
        self.status == GameStatus::AwaitingColor
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Complete { winner_id } => self.players.get(winner_id),
            _ => None,
        }
    }

    /// Whether the current player may put `card` down right now.
    pub fn can_play(&self, card: &Card) -> bool {
        self.top_card()
            .map_or(true, |top| is_legal_play(card, top, self.selected_color))
    }

    /// The current player plays the card with `card_id`.
    ///
    /// Wild-family cards played without `chosen_color` leave the game
    /// awaiting a color (see [`GameState::select_color`]); with a color they
    /// resolve at once. A player who empties their hand wins immediately and
    /// the card's effect is not applied.
    pub fn play_card<R: Rng + ?Sized>(
        &self,
        card_id: CardId,
        chosen_color: Option<Color>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        self.ensure_accepting_actions()?;

        let card = self
            .current_player()
            .card(card_id)
            .ok_or(GameError::CardNotInHand)?;
        if !self.can_play(card) {
            return Err(GameError::InvalidMove);
        }
        if chosen_color.is_some_and(|color| !color.is_chromatic()) {
            return Err(GameError::InvalidColor);
        }

        let mut next = self.clone();
        let index = next.current_player_index;
        let card = next.players[index].remove_card(card_id)?;
        next.discard_pile.push(card.clone());

        if next.players[index].has_won() {
            next.status = GameStatus::Complete { winner_id: index };
            next.message = format!("{} has won the game!", next.players[index].name);
            info!("{}", next.message);
            return Ok(next);
        }

        if card.card_type.is_wild_family() && chosen_color.is_none() {
            next.status = GameStatus::AwaitingColor;
            next.selected_color = None;
            next.message = format!(
                "{} played {}. Choose a color!",
                next.players[index].name, card
            );
            debug!("{} is choosing a color", next.players[index].name);
            return Ok(next);
        }

        apply_effect(&mut next, &card, chosen_color, rng);
        next.advance_turn();
        Ok(next)
    }

    /// Resolves the wild card waiting on the discard pile with `color`.
    pub fn select_color<R: Rng + ?Sized>(
        &self,
        color: Color,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        match self.status {
            GameStatus::Complete { .. } => return Err(GameError::GameAlreadyOver),
            GameStatus::InProgress => return Err(GameError::NoColorPending),
            GameStatus::AwaitingColor => {}
        }
        if !color.is_chromatic() {
            return Err(GameError::InvalidColor);
        }

        let mut next = self.clone();
        let played = next.top_card().cloned().ok_or(GameError::NoColorPending)?;
        next.status = GameStatus::InProgress;
        apply_effect(&mut next, &played, Some(color), rng);
        next.advance_turn();
        Ok(next)
    }

    /// The current player draws one card and the turn passes on. With both
    /// piles exhausted nothing is drawn.
    pub fn draw_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, GameError> {
        self.ensure_accepting_actions()?;

        let mut next = self.clone();
        let index = next.current_player_index;
        next.message = if next.draw_into_hand(index, rng) {
            format!("{} drew a card", next.players[index].name)
        } else {
            format!("{} had no card to draw", next.players[index].name)
        };
        next.advance_turn();
        Ok(next)
    }

    /// Lets the computer player whose turn it is play or draw.
    pub fn take_computer_turn<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, GameError> {
        self.ensure_accepting_actions()?;

        let player = self.current_player();
        if !player.is_computer {
            return Err(GameError::NotComputerTurn);
        }
        let Some(top_card) = self.top_card() else {
            return self.draw_card(rng);
        };

        let choice = choose_computer_move(player, top_card, self.selected_color, rng);
        match choice.card {
            Some(card) => {
                debug!("{} plays {}", player.name, card);
                self.play_card(card.id, choice.color, rng)
            }
            None => self.draw_card(rng),
        }
    }

    fn ensure_accepting_actions(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::AwaitingColor => Err(GameError::AwaitingColorChoice),
            GameStatus::Complete { .. } => Err(GameError::GameAlreadyOver),
        }
    }

    fn advance_turn(&mut self) {
        self.current_player_index = next_player_index(
            self.current_player_index,
            self.direction,
            self.players.len(),
        );
    }

    /// Moves the deck's top card into a player's hand, recycling the discard
    /// pile first when the deck is empty. Returns false if nothing could be
    /// drawn.
    pub(crate) fn draw_into_hand<R: Rng + ?Sized>(
        &mut self,
        player_index: usize,
        rng: &mut R,
    ) -> bool {
        if self.deck.is_empty() {
            self.recycle_discard_pile(rng);
        }

        match self.deck.pop() {
            Some(card) => {
                self.players[player_index].add_card(card);
                true
            }
            None => false,
        }
    }

    /// Shuffles everything under the discard top into a new deck. Resolved
    /// wild cards go back to the neutral color.
    fn recycle_discard_pile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.discard_pile.len() < 2 {
            debug!("deck and discard pile exhausted, nothing to recycle");
            return false;
        }

        let mut cards = self.discard_pile.take_all();
        let Some(top_card) = cards.pop() else {
            return false;
        };
        for card in cards.iter_mut() {
            if card.card_type.is_wild_family() {
                card.color = Color::Wild;
            }
        }

        self.deck = Pile::from_cards(deck::shuffle(&cards, rng));
        self.discard_pile = Pile::from_cards(vec![top_card]);
        debug!("recycled {} discarded cards into the deck", self.deck.len());
        true
    }
}
