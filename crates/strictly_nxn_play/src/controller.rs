//! Match and round orchestration for the terminal.

use crate::console::Console;
use crate::display::{join_or, player_label, render_board, score_line};
use crate::settings::Settings;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_nxn::{
    BoardSize, ComputerPlayer, Match, MatchConfig, Player, Round, RoundResult, Slot,
};
use tracing::{info, instrument};

const WELCOME: &str = "\
========== Welcome to Tic Tac Toe! ==========

Play Tic Tac Toe against the computer on different board sizes.

The first player to mark a winning length of squares in a row -- \
horizontally, vertically, or diagonally -- wins. The winning length is 3 \
for the 3x3 board, 4 for the 5x5 board, and 5 for the 9x9 board.

If all squares are marked and neither player has reached the winning \
length in a row, the game ends in a tie.

";

/// Plays matches until the user declines another.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, settings: &Settings) -> Result<()> {
    console.clear()?;
    console.print(WELCOME)?;
    console.print(&format!(
        "The first player who wins {} rounds will become the grand winner.\n\n",
        settings.target_or_default()
    ))?;
    console.prompt("Press \"Enter\" to continue.")?;
    console.wait_for_enter()?;

    loop {
        console.clear()?;
        let config = resolve_config(console, settings)?;
        match play_match(console, config)? {
            Player::Human => console.print("Congratulations! You won this match!\n")?,
            Player::Computer => console.print("The match is over. Computer won.\n")?,
        }
        if !play_again(console)? {
            break;
        }
    }

    console.print("Thank you for playing Tic Tac Toe!\n")
}

/// Fills in settings left open by asking the user.
#[instrument(skip(console))]
pub fn resolve_config<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<MatchConfig> {
    let board_size = match settings.board_size() {
        Some(size) => *size,
        None => choose_board_size(console)?,
    };
    let first_player = match settings.first_player() {
        Some(player) => *player,
        None => choose_first_player(console)?,
    };

    let config = MatchConfig::new(
        board_size,
        first_player,
        settings.target_or_default(),
        *settings.seed(),
    );
    config.validate()?;
    Ok(config)
}

/// Asks for a board size.
pub fn choose_board_size<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<BoardSize> {
    console.prompt(
        "First, let's choose a board size: Enter \"3\" for 3x3, \"5\" for 5x5, or \"9\" for 9x9.",
    )?;
    let error = "Invalid input. Please enter \"3\", \"5\", or \"9\".";
    let answer = console.ask(error, &["3", "5", "9"])?;
    answer.parse().context("Failed to read board size")
}

/// Asks who moves first.
pub fn choose_first_player<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Player> {
    console.prompt(
        "Who will go first? Enter \"u\" for user, or \"c\" for computer.",
    )?;
    let error = "Invalid input. Please enter \"u\" or \"c\".";
    let answer = console.ask(error, &["u", "c", "user", "computer"])?;
    answer.parse().context("Failed to read first player")
}

/// Plays rounds until one side reaches the target and returns the winner.
#[instrument(skip(console))]
pub fn play_match<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: MatchConfig,
) -> Result<Player> {
    let mut game = Match::new(config)?;
    let mut computer = ComputerPlayer::from_seed(*config.seed());

    loop {
        let result = play_round(console, &mut game, &mut computer)?;
        if let Some(winner) = game.record(result) {
            return Ok(winner);
        }
        console.prompt(&score_line(game.score()))?;
        console.prompt("Press \"Enter\" to start the next round.")?;
        console.wait_for_enter()?;
    }
}

fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Match,
    computer: &mut ComputerPlayer,
) -> Result<RoundResult> {
    let mut round = game.start_round();
    let number = *game.rounds_played();
    let mut last_computer_move = None;

    while round.result().is_none() {
        show_round(console, number, &round)?;
        match round.to_move() {
            Player::Human => {
                if let Some(message) = &last_computer_move {
                    console.print(&format!("{message}\n"))?;
                }
                let slot = ask_square(console, &round)?;
                round.play(slot)?;
            }
            Player::Computer => {
                let slot = round.play_computer(computer)?;
                last_computer_move = Some(format!("Computer has marked square {slot}."));
            }
        }
    }

    show_round(console, number, &round)?;
    let result = round.result().context("Round ended without a result")?;
    match result {
        RoundResult::Winner(player) => console.prompt(&format!("{} won!", player_label(player)))?,
        RoundResult::Tie => console.prompt("It's a tie!")?,
    }
    info!(round = number, %result, "Round finished");
    Ok(result)
}

fn show_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    number: u32,
    round: &Round,
) -> Result<()> {
    console.clear()?;
    console.print(&format!("========== Round {number} ==========\n\n"))?;
    console.print(&render_board(round.board()))?;
    console.print("\n")
}

fn ask_square<R: BufRead, W: Write>(console: &mut Console<R, W>, round: &Round) -> Result<Slot> {
    let empties = round.empty_slots();
    let options: Vec<String> = empties.iter().map(ToString::to_string).collect();
    let listed = join_or(&options, ", ", "or");
    console.prompt(&format!(
        "Your turn: Choose one of the following empty squares: {listed}"
    ))?;
    let error = format!(
        "Invalid input. Please enter one of the following numbers: {listed}"
    );
    let answer = console.ask(&error, &options)?;
    let number: usize = answer.parse().context("Failed to read square number")?;
    Ok(Slot::new(number))
}

/// Asks whether to start another match.
pub fn play_again<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<bool> {
    console.prompt("Would you like to play again? (y/n)")?;
    let error = "Invalid input. Please enter \"y\" or \"n\".";
    let answer = console.ask(error, &["y", "n", "yes", "no"])?;
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(c: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.output().clone()).unwrap()
    }

    #[test]
    fn test_resolve_config_asks_for_missing() {
        let mut c = console("4\n5\nx\nc\n");
        let config = resolve_config(&mut c, &Settings::default()).unwrap();
        assert_eq!(*config.board_size(), BoardSize::Five);
        assert_eq!(*config.first_player(), Player::Computer);
        assert_eq!(*config.target_wins(), 3);
        assert_eq!(output(&c).matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_play_again_answers() {
        assert!(play_again(&mut console("maybe\nyes\n")).unwrap());
        assert!(!play_again(&mut console("n\n")).unwrap());
    }

    #[test]
    fn test_scripted_match_finishes() {
        // The user always tries squares 1..=9 in order, so every turn takes
        // the lowest free square after rejected attempts.
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(200);
        let mut c = console(&script);
        let config = MatchConfig::new(BoardSize::Three, Player::Computer, 1, Some(21));

        let winner = play_match(&mut c, config).unwrap();
        let out = output(&c);
        assert!(out.contains("========== Round 1 =========="));
        assert!(out.contains("Computer has marked square 5."));
        assert!(out.contains(&format!("{} won!", player_label(winner))));
    }

    #[test]
    fn test_closed_input_aborts_round() {
        let mut c = console("");
        let config = MatchConfig::new(BoardSize::Five, Player::Human, 3, Some(1));
        assert!(play_match(&mut c, config).is_err());
    }
}
