//! Text rendering of boards, prompts and scores.

use strictly_nxn::{Board, MatchScore, Player, Square};

/// Mark drawn for the human's squares.
pub const HUMAN_MARK: char = 'X';
/// Mark drawn for the computer's squares.
pub const COMPUTER_MARK: char = 'O';

const CELL_WIDTH: usize = 5;

/// Name shown for a player.
pub fn player_label(player: Player) -> &'static str {
    match player {
        Player::Human => "User",
        Player::Computer => "Computer",
    }
}

fn mark(player: Player) -> char {
    match player {
        Player::Human => HUMAN_MARK,
        Player::Computer => COMPUTER_MARK,
    }
}

/// Draws the board with slot numbers on empty squares.
pub fn render_board(board: &Board) -> String {
    let n = board.size().dimension();
    let spacer = vec![" ".repeat(CELL_WIDTH); n].join("|");
    let divider = vec!["-".repeat(CELL_WIDTH); n].join("+");

    let mut out = format!("Your move is marked by \"{HUMAN_MARK}\". ");
    out += &format!("Computer move is marked by \"{COMPUTER_MARK}\".\n\n");
    for (r, row) in board.squares().chunks(n).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|square| {
                let label = match square {
                    Square::Empty(slot) => slot.to_string(),
                    Square::Occupied(player) => mark(*player).to_string(),
                };
                format!("{label:^width$}", width = CELL_WIDTH)
            })
            .collect();

        out.push_str(&spacer);
        out.push('\n');
        out.push_str(&cells.join("|"));
        out.push('\n');
        out.push_str(&spacer);
        out.push('\n');
        if r + 1 < n {
            out.push_str(&divider);
            out.push('\n');
        }
    }
    out
}

/// Joins items as `a, b, or c`.
pub fn join_or<T: ToString>(items: &[T], separator: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {word} {}", first.to_string(), second.to_string()),
        [leading @ .., last] => {
            let leading: Vec<String> = leading.iter().map(ToString::to_string).collect();
            let last = last.to_string();
            format!("{}{separator}{word} {last}", leading.join(separator))
        }
    }
}

/// Running score line shown between rounds.
pub fn score_line(score: &MatchScore) -> String {
    let human = *score.human();
    let computer = *score.computer();
    match score.leader() {
        Some(Player::Human) => format!("User leads {human} - {computer}."),
        Some(Player::Computer) => format!("Computer leads {computer} - {human}."),
        None => format!("{human} - {computer} draw."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_nxn::{BoardSize, RoundResult, Slot};

    #[test]
    fn test_join_or() {
        assert_eq!(join_or::<u32>(&[], ", ", "or"), "");
        assert_eq!(join_or(&[1], ", ", "or"), "1");
        assert_eq!(join_or(&[1, 2], ", ", "or"), "1 or 2");
        assert_eq!(join_or(&[1, 2, 3], ", ", "or"), "1, 2, or 3");
        assert_eq!(join_or(&[1, 2, 3], "; ", "and"), "1; 2; and 3");
    }

    #[test]
    fn test_render_fresh_three() {
        let text = render_board(&Board::new(BoardSize::Three));
        assert!(text.contains("  1  |  2  |  3  "));
        assert!(text.contains("-----+-----+-----"));
        assert_eq!(text.matches("-----+-----+-----").count(), 2);
    }

    #[test]
    fn test_render_marks_and_two_digit_slots() {
        let mut board = Board::new(BoardSize::Five);
        board.place(Slot::new(1), Player::Human).unwrap();
        board.place(Slot::new(25), Player::Computer).unwrap();
        let text = render_board(&board);
        assert!(text.contains("  X  |  2  "));
        assert!(text.contains(" 24  |  O  "));
        assert_eq!(text.matches("+").count(), 4 * 4);
    }

    #[test]
    fn test_score_lines() {
        let mut score = MatchScore::default();
        assert_eq!(score_line(&score), "0 - 0 draw.");
        score.record(RoundResult::Winner(Player::Computer));
        assert_eq!(score_line(&score), "Computer leads 1 - 0.");
        score.record(RoundResult::Winner(Player::Human));
        score.record(RoundResult::Winner(Player::Human));
        assert_eq!(score_line(&score), "User leads 2 - 1.");
    }
}
