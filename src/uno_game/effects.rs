use super::card::{Card, CardType, Color};
use super::game::GameState;
use super::turn::next_player_index;
use log::debug;
use rand::Rng;

/// Applies the consequence of `played_card`, which the caller has already
/// moved from the current player's hand onto the discard pile.
///
/// The turn is not advanced past the acting player here; that is the normal
/// end-of-turn step. Skip, draw two and wild draw four move the index onto
/// the player who loses their turn, so that step lands after them.
pub fn resolve_play<R: Rng + ?Sized>(
    state: &GameState,
    played_card: &Card,
    chosen_color: Option<Color>,
    rng: &mut R,
) -> GameState {
    let mut next = state.clone();
    apply_effect(&mut next, played_card, chosen_color, rng);
    next
}

pub(crate) fn apply_effect<R: Rng + ?Sized>(
    state: &mut GameState,
    played_card: &Card,
    chosen_color: Option<Color>,
    rng: &mut R,
) {
    let chosen_color = chosen_color.filter(|color| color.is_chromatic());
    let player_count = state.players.len();

    // Any play supersedes the previous override; a wild card resolved with a
    // color sets a new one below.
    state.selected_color = None;

    match played_card.card_type {
        CardType::Skip => {
            state.current_player_index =
                next_player_index(state.current_player_index, state.direction, player_count);
            state.message = format!(
                "{}'s turn was skipped!",
                state.players[state.current_player_index].name
            );
        }
        CardType::Reverse => {
            state.direction = state.direction.reverse();
            state.message = "Direction reversed!".to_string();
        }
        CardType::DrawTwo => draw_penalty(state, 2, rng),
        CardType::WildDrawFour => {
            if let Some(color) = chosen_color {
                recolor_top(state, color);
            }
            draw_penalty(state, 4, rng);
            if let Some(color) = chosen_color {
                state.message = format!("{} Color changed to {}!", state.message, color);
            }
        }
        CardType::Wild => match chosen_color {
            Some(color) => {
                recolor_top(state, color);
                state.message = format!("Color changed to {}!", color);
            }
            None => {
                state.message = format!(
                    "{} played a wild card",
                    state.players[state.current_player_index].name
                );
            }
        },
        CardType::Number(_) => {
            state.message = format!(
                "{} played {}",
                state.players[state.current_player_index].name, played_card
            );
        }
    }
}

fn recolor_top(state: &mut GameState, color: Color) {
    if let Some(top) = state.discard_pile.top_mut() {
        top.color = color;
    }
    state.selected_color = Some(color);
}

/// The next player draws `count` cards and loses their turn.
fn draw_penalty<R: Rng + ?Sized>(state: &mut GameState, count: usize, rng: &mut R) {
    let target = next_player_index(
        state.current_player_index,
        state.direction,
        state.players.len(),
    );

    let mut drawn = 0;
    for _ in 0..count {
        if state.draw_into_hand(target, rng) {
            drawn += 1;
        }
    }
    if drawn < count {
        debug!("only {} of {} penalty cards could be drawn", drawn, count);
    }

    state.current_player_index = target;
    state.message = format!(
        "{} draws {} card{}!",
        state.players[target].name,
        drawn,
        if drawn == 1 { "" } else { "s" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uno_game::card::CardId;
    use crate::uno_game::deck::Pile;
    use crate::uno_game::game::GameStatus;
    use crate::uno_game::player::Player;
    use crate::uno_game::turn::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card(id: u16, color: Color, card_type: CardType) -> Card {
        Card::new(CardId(id), color, card_type)
    }

    /// Three players holding two cards each, a four-card deck and the played
    /// card on top of the discard pile.
    fn state_with_top(played: Card) -> GameState {
        let mut players = vec![
            Player::human(0, "Alice".to_string()),
            Player::computer(1, "Computer 1".to_string()),
            Player::computer(2, "Computer 2".to_string()),
        ];
        let mut id = 100;
        for player in players.iter_mut() {
            for _ in 0..2 {
                player.add_card(card(id, Color::Yellow, CardType::Number(3)));
                id += 1;
            }
        }

        let deck = Pile::from_cards(
            (0..4)
                .map(|i| card(200 + i, Color::Green, CardType::Number(i as u8)))
                .collect(),
        );
        let discard_pile = Pile::from_cards(vec![card(300, Color::Blue, CardType::Number(7)), played]);

        GameState {
            players,
            current_player_index: 0,
            direction: Direction::Clockwise,
            deck,
            discard_pile,
            game_started: true,
            status: GameStatus::InProgress,
            message: String::new(),
            selected_color: None,
        }
    }

    #[test]
    fn test_skip() {
        let played = card(1, Color::Blue, CardType::Skip);
        let state = state_with_top(played.clone());
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, None, &mut rng);

        assert_eq!(next.current_player_index, 1);
        assert_eq!(next.message, "Computer 1's turn was skipped!");
        assert_eq!(state.current_player_index, 0);
    }

    #[test]
    fn test_reverse_twice_restores_direction() {
        let played = card(1, Color::Blue, CardType::Reverse);
        let state = state_with_top(played.clone());
        let mut rng = StdRng::seed_from_u64(0);

        let once = resolve_play(&state, &played, None, &mut rng);
        assert_eq!(once.direction, Direction::CounterClockwise);
        assert_eq!(once.current_player_index, 0);

        let twice = resolve_play(&once, &played, None, &mut rng);
        assert_eq!(twice.direction, Direction::Clockwise);
    }

    #[test]
    fn test_draw_two() {
        let played = card(1, Color::Blue, CardType::DrawTwo);
        let state = state_with_top(played.clone());
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, None, &mut rng);

        assert_eq!(next.players[1].hand.len(), 4);
        assert_eq!(next.players[2].hand.len(), 2);
        assert_eq!(next.deck.len(), 2);
        assert_eq!(next.current_player_index, 1);
        assert_eq!(next.message, "Computer 1 draws 2 cards!");
        // The previous snapshot is untouched.
        assert_eq!(state.players[1].hand.len(), 2);
        assert_eq!(state.deck.len(), 4);
    }

    #[test]
    fn test_draw_two_counter_clockwise() {
        let played = card(1, Color::Blue, CardType::DrawTwo);
        let mut state = state_with_top(played.clone());
        state.direction = Direction::CounterClockwise;
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, None, &mut rng);

        assert_eq!(next.players[2].hand.len(), 4);
        assert_eq!(next.current_player_index, 2);
    }

    #[test]
    fn test_wild_draw_four_recolors_top() {
        let played = card(1, Color::Wild, CardType::WildDrawFour);
        let state = state_with_top(played.clone());
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, Some(Color::Red), &mut rng);

        assert_eq!(next.players[1].hand.len(), 6);
        assert!(next.deck.is_empty());
        assert_eq!(next.discard_pile.top().map(|c| c.color), Some(Color::Red));
        assert_eq!(next.selected_color, Some(Color::Red));
        assert_eq!(next.message, "Computer 1 draws 4 cards! Color changed to red!");
        assert_eq!(state.discard_pile.top().map(|c| c.color), Some(Color::Wild));
    }

    #[test]
    fn test_wild() {
        let played = card(1, Color::Wild, CardType::Wild);
        let state = state_with_top(played.clone());
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, Some(Color::Yellow), &mut rng);

        assert_eq!(next.discard_pile.top().map(|c| c.color), Some(Color::Yellow));
        assert_eq!(next.selected_color, Some(Color::Yellow));
        assert_eq!(next.message, "Color changed to yellow!");
        assert_eq!(next.current_player_index, 0);
    }

    #[test]
    fn test_wild_without_color_leaves_top_neutral() {
        let played = card(1, Color::Wild, CardType::Wild);
        let state = state_with_top(played.clone());
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, Some(Color::Wild), &mut rng);

        assert_eq!(next.discard_pile.top().map(|c| c.color), Some(Color::Wild));
        assert_eq!(next.selected_color, None);
    }

    #[test]
    fn test_number_card() {
        let played = card(1, Color::Blue, CardType::Number(7));
        let state = state_with_top(played.clone());
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, None, &mut rng);

        assert_eq!(next.message, "Alice played blue 7");
        assert_eq!(next.players, state.players);
        assert_eq!(next.current_player_index, 0);
    }

    #[test]
    fn test_number_card_clears_color_override() {
        let played = card(1, Color::Red, CardType::Number(5));
        let mut state = state_with_top(played.clone());
        state.selected_color = Some(Color::Red);
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, None, &mut rng);

        assert_eq!(next.selected_color, None);
        assert_eq!(state.selected_color, Some(Color::Red));
    }

    #[test]
    fn test_new_wild_color_replaces_override() {
        let played = card(1, Color::Wild, CardType::WildDrawFour);
        let mut state = state_with_top(played.clone());
        state.selected_color = Some(Color::Red);
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, Some(Color::Green), &mut rng);
        assert_eq!(next.selected_color, Some(Color::Green));

        let uncolored = resolve_play(&state, &played, None, &mut rng);
        assert_eq!(uncolored.selected_color, None);
    }

    #[test]
    fn test_draw_four_with_short_deck_recycles() {
        let played = card(1, Color::Wild, CardType::WildDrawFour);
        let mut state = state_with_top(played.clone());
        state.deck = Pile::from_cards(vec![card(200, Color::Green, CardType::Number(0))]);
        state.discard_pile = Pile::from_cards(vec![
            card(300, Color::Blue, CardType::Number(7)),
            card(301, Color::Red, CardType::Number(7)),
            card(302, Color::Red, CardType::Number(1)),
            played.clone(),
        ]);
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, Some(Color::Blue), &mut rng);

        assert_eq!(next.players[1].hand.len(), 6);
        assert!(next.deck.is_empty());
        assert_eq!(next.discard_pile.len(), 1);
        assert_eq!(next.discard_pile.top().map(|c| c.id), Some(CardId(1)));
        assert_eq!(next.discard_pile.top().map(|c| c.color), Some(Color::Blue));
    }

    #[test]
    fn test_draw_penalty_stops_when_nothing_left() {
        let played = card(1, Color::Blue, CardType::DrawTwo);
        let mut state = state_with_top(played.clone());
        state.deck = Pile::new();
        state.discard_pile = Pile::from_cards(vec![played.clone()]);
        let mut rng = StdRng::seed_from_u64(0);

        let next = resolve_play(&state, &played, None, &mut rng);

        assert_eq!(next.players[1].hand.len(), 2);
        assert_eq!(next.discard_pile.len(), 1);
        assert_eq!(next.message, "Computer 1 draws 0 cards!");
    }
}
