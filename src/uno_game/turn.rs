use serde::{Deserialize, Serialize};

/// Represents the direction of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Index of the player who acts after `current`, wrapping around the table.
pub fn next_player_index(current: usize, direction: Direction, player_count: usize) -> usize {
    match direction {
        Direction::Clockwise => (current + 1) % player_count,
        Direction::CounterClockwise => (current + player_count - 1) % player_count,
    }
}
