use super::card::Color;
use super::error::GameError;
use super::game::GameState;
use super::player::Player;
use std::io::{self, BufRead, BufReader, Write};

/// What the human chose to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanAction {
    /// Play the card at this position in the hand.
    Play(usize),
    Draw,
    /// Abandon this game and deal a new one.
    Restart,
    Quit,
}

pub struct ConsoleUI {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl ConsoleUI {
    pub fn new() -> Self {
        Self {
            input: Box::new(BufReader::new(io::stdin())),
            output: Box::new(io::stdout()),
        }
    }

    pub fn with_streams(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn display_welcome(&mut self, game: &GameState) -> io::Result<()> {
        writeln!(self.output, "Welcome to Uno!")?;
        let names: Vec<&str> = game.players.iter().map(|p| p.name.as_str()).collect();
        writeln!(self.output, "Players: {}", names.join(", "))
    }

    pub fn display_game_state(&mut self, game: &GameState) -> io::Result<()> {
        writeln!(self.output, "\n--- Game State ---")?;
        writeln!(self.output, "Direction: {:?}", game.direction)?;
        if let Some(top_card) = game.top_card() {
            writeln!(self.output, "Discard Pile Top Card: {}", top_card)?;
        }
        if let Some(color) = game.selected_color {
            writeln!(self.output, "Active Color: {}", color)?;
        }
        writeln!(self.output, "Deck Cards Remaining: {}", game.deck.len())?;

        for (index, player) in game.players.iter().enumerate() {
            let marker = if index == game.current_player_index {
                ">"
            } else {
                " "
            };
            writeln!(
                self.output,
                "{} {} ({} cards)",
                marker,
                player.name,
                player.hand.len()
            )?;
        }

        if !game.message.is_empty() {
            writeln!(self.output, "{}", game.message)?;
        }
        Ok(())
    }

    /// Lists the hand with indices; playable cards are starred.
    pub fn display_player_hand(&mut self, game: &GameState, player: &Player) -> io::Result<()> {
        writeln!(self.output, "\n{}'s hand:", player.name)?;
        for (i, card) in player.hand.iter().enumerate() {
            let playable = if game.can_play(card) { "*" } else { " " };
            writeln!(self.output, "{}{}. {}", playable, i, card)?;
        }
        Ok(())
    }

    pub fn get_player_action(&mut self) -> io::Result<HumanAction> {
        loop {
            writeln!(self.output, "\nWhat would you like to do?")?;
            writeln!(self.output, "1. Play a card")?;
            writeln!(self.output, "2. Draw a card")?;
            writeln!(self.output, "r. Restart game")?;
            writeln!(self.output, "q. Quit")?;
            write!(self.output, "Enter your choice: ")?;

            let Some(choice) = self.read_line()? else {
                return Ok(HumanAction::Quit);
            };
            match choice.as_str() {
                "1" => match self.get_card_index()? {
                    Some(Ok(index)) => return Ok(HumanAction::Play(index)),
                    Some(Err(message)) => writeln!(self.output, "{}", message)?,
                    None => return Ok(HumanAction::Quit),
                },
                "2" => return Ok(HumanAction::Draw),
                "r" | "R" => return Ok(HumanAction::Restart),
                "q" | "Q" => return Ok(HumanAction::Quit),
                _ => writeln!(self.output, "Invalid choice. Please enter 1, 2, r or q.")?,
            }
        }
    }

    fn get_card_index(&mut self) -> io::Result<Option<Result<usize, String>>> {
        write!(
            self.output,
            "Enter the index of the card you want to play: "
        )?;
        let Some(index) = self.read_line()? else {
            return Ok(None);
        };
        Ok(Some(index.parse::<usize>().map_err(|_| {
            "Invalid input. Please enter a number.".to_string()
        })))
    }

    /// Prompts for a wild card color; `None` if input ran out.
    pub fn choose_color(&mut self) -> io::Result<Option<Color>> {
        loop {
            writeln!(self.output, "Choose a color:")?;
            for (i, color) in Color::CHROMATIC.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, color)?;
            }
            write!(self.output, "Enter your choice: ")?;

            let Some(choice) = self.read_line()? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => return Ok(Some(Color::Red)),
                "2" => return Ok(Some(Color::Blue)),
                "3" => return Ok(Some(Color::Green)),
                "4" => return Ok(Some(Color::Yellow)),
                _ => writeln!(self.output, "Invalid choice. Please enter 1, 2, 3, or 4.")?,
            }
        }
    }

    pub fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn show_error(&mut self, error: &GameError) -> io::Result<()> {
        writeln!(self.output, "Error: {}", error)?;
        writeln!(self.output, "Please try again.")
    }

    pub fn announce_winner(&mut self, game: &GameState) -> io::Result<()> {
        match game.winner() {
            Some(winner) if !winner.is_computer => {
                writeln!(self.output, "\nCongratulations {}, you won!", winner.name)
            }
            Some(winner) => writeln!(self.output, "\n{} has won the game!", winner.name),
            None => writeln!(self.output, "\nGame ended without a winner."),
        }
    }

    /// Asks whether to deal another game. End of input counts as no.
    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "Play again? (y/n): ")?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }
}

impl Default for ConsoleUI {
    fn default() -> Self {
        Self::new()
    }
}
