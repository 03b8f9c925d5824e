use super::card::{Card, Color};

/// Checks if `card` can be placed on `top_card`.
///
/// `active_color` is the override chosen after a wild card; it only matters
/// while the top card itself is still neutral.
pub fn is_legal_play(card: &Card, top_card: &Card, active_color: Option<Color>) -> bool {
    // Wild cards can always be played
    if card.is_wild() {
        return true;
    }

    if top_card.is_wild() {
        if let Some(color) = active_color {
            return card.color == color;
        }
    }

    // Same color or same value
    card.color == top_card.color || card.card_type == top_card.card_type
}
