pub mod card;
pub mod controller;
pub mod deck;
pub mod effects;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod scheduler;
pub mod strategy;
pub mod turn;
pub mod ui;

pub use card::{Card, CardId, CardType, Color};
pub use deck::{build_deck, shuffle, Pile};
pub use effects::resolve_play;
pub use error::GameError;
pub use game::{GameState, GameStatus};
pub use player::Player;
pub use rules::is_legal_play;
pub use strategy::{choose_computer_move, ComputerMove};
pub use turn::{next_player_index, Direction};
