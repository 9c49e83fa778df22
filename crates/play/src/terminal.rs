//! Interactive terminal front end.
//!
//! Reads one command per line, drives the engine, and redraws the board.
//! Empty cells show their 1-9 key so the board doubles as a keypad.

use anyhow::{Context, Result};
use noughts_core::{Board, GameError, Mark, MoveRejection, Outcome, ScoreTally};
use noughts_engine::{Engine, Opponent, TurnReport};
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Instant;

/// Advisory shown when a cell is picked before choosing sides.
pub const NO_PLAYER_WARNING: &str = "Pick X or O first";

const HELP: &str = "\
Commands:
  x        you move first (X)
  o        computer moves first (O)
  1-9      place your mark (row by row, top left is 1)
  r, n     reset the round (scores are kept)
  q        quit";

/// One line of user input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Choose who moves first.
    Start(Mark),
    /// Board index 0-8.
    Cell(usize),
    Reset,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "x" => Ok(Command::Start(Mark::Human)),
            "o" => Ok(Command::Start(Mark::Opponent)),
            "r" | "reset" | "n" | "new" => Ok(Command::Reset),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => match s.parse::<usize>() {
                Ok(key @ 1..=9) => Ok(Command::Cell(key - 1)),
                _ => Err(format!("unknown command {:?} (type h for help)", s)),
            },
        }
    }
}

/// Draw the board with key numbers in empty cells.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let cell = row * 3 + col;
                match board.get(cell) {
                    Some(mark) => format!(" {} ", mark),
                    None => format!(" {} ", cell + 1),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}

/// End-of-round banner.
pub fn banner(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Winner(Mark::Human) => Some("You Win!"),
        Outcome::Winner(Mark::Opponent) => Some("Computer Wins!"),
        Outcome::Draw => Some("It's a Draw!"),
        Outcome::Ongoing => None,
    }
}

fn scoreline(tally: ScoreTally) -> String {
    format!("Score: {}", tally)
}

/// Terminal session around one engine.
pub struct Session<'a, O: Opponent> {
    engine: &'a mut Engine<O>,
    warning_until: Option<Instant>,
}

impl<'a, O: Opponent> Session<'a, O> {
    pub fn new(engine: &'a mut Engine<O>) -> Self {
        Self {
            engine,
            warning_until: None,
        }
    }

    /// Run until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", HELP)?;
        self.draw(&mut out)?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(msg) => {
                    writeln!(out, "{}", msg)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => writeln!(out, "{}", HELP)?,
                Command::Reset => {
                    self.engine.reset_round();
                    self.warning_until = None;
                    writeln!(out, "New round. Choose x or o.")?;
                }
                Command::Start(first) => {
                    let result = self.engine.start_round(first);
                    self.handle(result, &mut out)?;
                }
                Command::Cell(cell) => {
                    let result = self.engine.apply_human_move(cell);
                    self.handle(result, &mut out)?;
                }
            }
            self.draw(&mut out)?;
        }

        writeln!(out, "{}", scoreline(self.engine.tally()))?;
        out.flush()?;
        Ok(())
    }

    /// Report a turn, waiting out and playing any pending reply.
    fn handle<W: Write>(
        &mut self,
        result: noughts_core::Result<TurnReport>,
        out: &mut W,
    ) -> Result<()> {
        let mut report = match result {
            Ok(report) => report,
            Err(err) => return self.explain(err, out),
        };

        while let Some(delay) = report.pending_reply {
            writeln!(out, "Computer is thinking...")?;
            out.flush()?;
            thread::sleep(delay);
            report = match self.engine.play_opponent_turn() {
                Ok(reply) => reply,
                Err(err) => return self.explain(err, out),
            };
        }

        for placement in report.placements.iter().filter(|p| p.mark == Mark::Opponent) {
            writeln!(out, "Computer plays {}", placement.cell + 1)?;
        }
        if let Some(text) = banner(report.outcome) {
            writeln!(out, "{}", text)?;
            writeln!(out, "Type r for a new round.")?;
        }
        Ok(())
    }

    fn explain<W: Write>(&mut self, err: GameError, out: &mut W) -> Result<()> {
        let msg = match err {
            GameError::NoPlayerSelected => {
                self.warning_until = Some(Instant::now() + self.engine.config().warning_duration);
                return Ok(());
            }
            GameError::RoundInProgress => "Finish or reset this round first.".to_string(),
            GameError::InvalidMove(MoveRejection::Occupied(cell)) => {
                format!("Cell {} is already taken.", cell + 1)
            }
            GameError::InvalidMove(MoveRejection::RoundOver) => {
                "The round is over. Type r for a new round.".to_string()
            }
            other => format!("{}", other),
        };
        writeln!(out, "{}", msg)?;
        Ok(())
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        write!(out, "{}", render(self.engine.state().board()))?;
        writeln!(out, "{}", scoreline(self.engine.tally()))?;

        match self.warning_until {
            Some(until) if Instant::now() < until => writeln!(out, "{}", NO_PLAYER_WARNING)?,
            Some(_) => self.warning_until = None,
            None => {}
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::{EngineConfig, HeuristicOpponent};
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;
    use std::time::Duration;

    fn engine() -> Engine<HeuristicOpponent<ChaCha8Rng>> {
        Engine::new(EngineConfig::synchronous(), HeuristicOpponent::seeded(42))
    }

    fn play(engine: &mut Engine<HeuristicOpponent<ChaCha8Rng>>, script: &str) -> String {
        let mut out = Vec::new();
        Session::new(engine).run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("x".parse::<Command>(), Ok(Command::Start(Mark::Human)));
        assert_eq!(" O ".parse::<Command>(), Ok(Command::Start(Mark::Opponent)));
        assert_eq!("5".parse::<Command>(), Ok(Command::Cell(4)));
        assert_eq!("9".parse::<Command>(), Ok(Command::Cell(8)));
        assert_eq!("new".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert!("10".parse::<Command>().is_err());
        assert!("zz".parse::<Command>().is_err());
    }

    #[test]
    fn test_render_numbers_empty_cells() {
        let board: Board = "X__ _O_ ___".parse().unwrap();
        let text = render(&board);
        assert!(text.starts_with(" X | 2 | 3 \n"));
        assert!(text.contains(" 4 | O | 6 "));
    }

    #[test]
    fn test_banners() {
        assert_eq!(banner(Outcome::Winner(Mark::Human)), Some("You Win!"));
        assert_eq!(banner(Outcome::Winner(Mark::Opponent)), Some("Computer Wins!"));
        assert_eq!(banner(Outcome::Draw), Some("It's a Draw!"));
        assert_eq!(banner(Outcome::Ongoing), None);
    }

    #[test]
    fn test_warning_before_start() {
        let mut engine = engine();
        let out = play(&mut engine, "5\nq\n");
        assert!(out.contains(NO_PLAYER_WARNING));
        assert_eq!(engine.state().move_count(), 0);
    }

    #[test]
    fn test_computer_wins_session() {
        let mut engine = engine();
        // X: 2, 3, 4 (cells 1, 2, 3); O completes 1-5-9.
        let out = play(&mut engine, "x\n2\n3\n4\nq\n");
        assert!(out.contains("Computer plays 5"));
        assert!(out.contains("Computer Wins!"));
        assert!(out.contains("Score: You 0 - 1 Computer"));
        assert_eq!(engine.tally().opponent_wins, 1);
    }

    #[test]
    fn test_taken_cell_reported() {
        let mut engine = engine();
        let out = play(&mut engine, "x\n1\n1\n");
        assert!(out.contains("Cell 1 is already taken."));
        assert_eq!(engine.state().move_count(), 2);
    }

    #[test]
    fn test_paced_reply_is_played() {
        let config = EngineConfig::with_reply_delay(Duration::from_millis(1));
        let mut engine = Engine::new(config.clone(), HeuristicOpponent::seeded(42));

        let out = play(&mut engine, "o\n");
        assert!(out.contains("Computer is thinking..."));
        assert!(out.contains("Computer plays 5"));
        assert_eq!(engine.state().board().get(4), Some(Mark::Opponent));

        let mut engine = Engine::new(config, HeuristicOpponent::seeded(42));
        let out = play(&mut engine, "x\n2\n3\n4\n");
        assert!(out.contains("Computer plays 1"));
        assert!(out.contains("Computer Wins!"));
        assert_eq!(engine.state().move_count(), 6);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut engine = engine();
        play(&mut engine, "o\nr\n");
        assert_eq!(engine.state().move_count(), 0);
    }
}
