use crate::card::Card;

/// Draws cards side by side as five lines of box art.
#[must_use]
pub fn card_art(cards: &[Card]) -> [String; 5] {
    let mut lines: [String; 5] = Default::default();
    for card in cards {
        let rank = card.rank.label();
        let suit = card.suit.symbol();
        let art = [
            "┌─────────┐".to_owned(),
            format!("│{rank:<2}       │"),
            format!("│    {suit}    │"),
            format!("│       {rank:>2}│"),
            "└─────────┘".to_owned(),
        ];
        for (line, part) in lines.iter_mut().zip(art) {
            line.push_str(&part);
            line.push(' ');
        }
    }
    lines
}
