use super::error::GameError;
use super::game::GameState;
use super::scheduler::{ScheduledMove, TurnScheduler};
use super::ui::{ConsoleUI, HumanAction};
use log::{debug, info, log_enabled, warn, Level};
use rand::rngs::StdRng;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnOutcome {
    Continue,
    Restart,
    Quit,
}

/// Drives a game from the console: the human's turns are read from the UI,
/// computer turns are played after the scheduler's delay.
pub struct GameController {
    state: GameState,
    human_name: String,
    computer_count: usize,
    /// Bumped on every accepted transition so late scheduled moves can be
    /// recognised and dropped.
    generation: u64,
    rng: StdRng,
    ui: ConsoleUI,
    scheduler: TurnScheduler,
    moves: mpsc::UnboundedReceiver<ScheduledMove>,
}

impl GameController {
    pub fn new(state: GameState, ui: ConsoleUI, rng: StdRng, computer_delay: Duration) -> Self {
        let (scheduler, moves) = TurnScheduler::new(computer_delay);
        let human_name = state
            .players
            .iter()
            .find(|p| !p.is_computer)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let computer_count = state.players.iter().filter(|p| p.is_computer).count();
        GameController {
            state,
            human_name,
            computer_count,
            generation: 0,
            rng,
            ui,
            scheduler,
            moves,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn run(&mut self) -> io::Result<()> {
        self.ui.display_welcome(&self.state)?;

        loop {
            if self.state.is_game_over() {
                self.ui.announce_winner(&self.state)?;
                if !self.ui.ask_play_again()? {
                    break;
                }
                self.restart()?;
                continue;
            }

            self.ui.display_game_state(&self.state)?;

            let outcome = if self.state.current_player().is_computer {
                self.computer_turn().await?
            } else {
                self.human_turn()?
            };

            match outcome {
                TurnOutcome::Continue => {}
                TurnOutcome::Restart => self.restart()?,
                TurnOutcome::Quit => {
                    info!("Game abandoned");
                    break;
                }
            }
        }

        self.scheduler.cancel();
        Ok(())
    }

    /// Deals a fresh game for the same players and starts counting
    /// transitions from zero again.
    fn restart(&mut self) -> io::Result<()> {
        self.scheduler.cancel();
        // Drop a move that fired for the old game but was never received.
        while self.moves.try_recv().is_ok() {}

        self.state = GameState::new_game(&self.human_name, self.computer_count, &mut self.rng)
            .map_err(io::Error::other)?;
        self.generation = 0;
        info!("Game restarted");

        self.ui.display_welcome(&self.state)
    }

    fn human_turn(&mut self) -> io::Result<TurnOutcome> {
        let player = self.state.current_player().clone();
        self.ui.display_player_hand(&self.state, &player)?;

        let result = match self.ui.get_player_action()? {
            HumanAction::Quit => return Ok(TurnOutcome::Quit),
            HumanAction::Restart => return Ok(TurnOutcome::Restart),
            HumanAction::Draw => self.state.draw_card(&mut self.rng),
            HumanAction::Play(index) => match player.hand.get(index) {
                Some(card) => self.state.play_card(card.id, None, &mut self.rng),
                None => Err(GameError::CardNotInHand),
            },
        };

        match result {
            Ok(next) => self.commit(next),
            Err(e) => {
                // Repeat the turn
                self.ui.show_error(&e)?;
                return Ok(TurnOutcome::Continue);
            }
        }

        while self.state.need_to_select_color() {
            let Some(color) = self.ui.choose_color()? else {
                return Ok(TurnOutcome::Quit);
            };
            match self.state.select_color(color, &mut self.rng) {
                Ok(next) => self.commit(next),
                Err(e) => self.ui.show_error(&e)?,
            }
        }

        self.ui.show_message(&self.state.message)?;
        Ok(TurnOutcome::Continue)
    }

    async fn computer_turn(&mut self) -> io::Result<TurnOutcome> {
        self.scheduler.schedule(self.generation);

        loop {
            tokio::select! {
                fired = self.moves.recv() => match fired {
                    Some(scheduled) => {
                        if let Some(outcome) = self.apply_scheduled_move(scheduled)? {
                            return Ok(outcome);
                        }
                    }
                    None => return Ok(TurnOutcome::Quit),
                },
                _ = tokio::signal::ctrl_c() => {
                    self.scheduler.cancel();
                    return Ok(TurnOutcome::Quit);
                }
            }
        }
    }

    /// Plays the computer's move if `scheduled` still refers to the current
    /// snapshot. Returns `None` for a stale move.
    fn apply_scheduled_move(&mut self, scheduled: ScheduledMove) -> io::Result<Option<TurnOutcome>> {
        if scheduled.generation != self.generation
            || self.state.is_game_over()
            || !self.state.current_player().is_computer
        {
            debug!(
                "ignoring computer move scheduled for generation {} (now {})",
                scheduled.generation, self.generation
            );
            return Ok(None);
        }

        match self.state.take_computer_turn(&mut self.rng) {
            Ok(next) => {
                self.commit(next);
                self.ui.show_message(&self.state.message)?;
                Ok(Some(TurnOutcome::Continue))
            }
            Err(e) => {
                warn!("computer player could not move: {}", e);
                self.ui.show_error(&e)?;
                Ok(Some(TurnOutcome::Quit))
            }
        }
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        self.generation += 1;
        if log_enabled!(Level::Debug) {
            match serde_json::to_string(&self.state) {
                Ok(json) => debug!("state {}: {}", self.generation, json),
                Err(e) => warn!("could not serialize game state: {}", e),
            }
        }
    }
}
