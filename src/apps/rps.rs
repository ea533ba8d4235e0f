//! Rock, paper, scissors against the computer

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::io::Write;

use crate::apps::App;
use crate::console::{Console, LineSource};
use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChoice {
    Rock,
    Paper,
    Scissors,
}

impl GameChoice {
    pub const ALL: [GameChoice; 3] = [GameChoice::Rock, GameChoice::Paper, GameChoice::Scissors];

    /// The choice this one defeats
    pub fn beats(&self) -> GameChoice {
        match self {
            GameChoice::Rock => GameChoice::Scissors,
            GameChoice::Paper => GameChoice::Rock,
            GameChoice::Scissors => GameChoice::Paper,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> GameChoice {
        *Self::ALL.choose(rng).unwrap_or(&GameChoice::Rock)
    }
}

impl fmt::Display for GameChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameChoice::Rock => "Rock",
            GameChoice::Paper => "Paper",
            GameChoice::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// Result for the player
pub fn play_round(player: GameChoice, computer: GameChoice) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
    pub draws: u32,
}

impl Score {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player += 1,
            Outcome::Lose => self.computer += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn winner(&self) -> Option<Outcome> {
        use std::cmp::Ordering;

        match self.player.cmp(&self.computer) {
            Ordering::Greater => Some(Outcome::Win),
            Ordering::Less => Some(Outcome::Lose),
            Ordering::Equal if self.player + self.computer + self.draws == 0 => None,
            Ordering::Equal => Some(Outcome::Draw),
        }
    }
}

/// Best-of-N game; the random source is injectable for tests
pub struct Game<R: Rng> {
    rounds: u32,
    rng: R,
}

impl Game<rand::rngs::ThreadRng> {
    pub fn new(rounds: u32) -> Self {
        Game::with_rng(rounds, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rounds: u32, rng: R) -> Self {
        Game {
            rounds: rounds.max(1),
            rng,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    fn play_game<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<Score> {
        let mut score = Score::default();
        let labels: Vec<String> = GameChoice::ALL.iter().map(|c| c.to_string()).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

        for round in 1..=self.rounds {
            console.say(format!("\n\tRound {} of {}", round, self.rounds))?;
            let player = GameChoice::ALL[console.select_choice(&labels)? - 1];
            let computer = GameChoice::random(&mut self.rng);
            let outcome = play_round(player, computer);
            score.record(outcome);

            let verdict = match outcome {
                Outcome::Win => "You win this round!",
                Outcome::Lose => "The computer wins this round.",
                Outcome::Draw => "This round is a draw.",
            };
            console.say(format!("\tYou chose {}, the computer chose {}.", player, computer))?;
            console.show_result(verdict)?;
            tracing::debug!(round, %player, %computer, ?outcome, "round played");
        }

        Ok(score)
    }
}

impl<R: Rng> App for Game<R> {
    fn run<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_heading("Rock Paper Scissors")?;

        loop {
            let score = self.play_game(console)?;
            console.say(format!(
                "\n\tFinal score: you {} - computer {} ({} draw(s))",
                score.player, score.computer, score.draws
            ))?;
            let summary = match score.winner() {
                Some(Outcome::Win) => "You won the game!",
                Some(Outcome::Lose) => "The computer won the game.",
                _ => "The game is a draw.",
            };
            console.show_result(summary)?;

            if !console.ask_to_repeat()? {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_choice_beats_exactly_one() {
        for choice in GameChoice::ALL {
            let wins = GameChoice::ALL
                .iter()
                .filter(|&&other| play_round(choice, other) == Outcome::Win)
                .count();
            assert_eq!(wins, 1);
        }
    }

    #[test]
    fn test_play_round() {
        use GameChoice::*;

        assert_eq!(play_round(Rock, Scissors), Outcome::Win);
        assert_eq!(play_round(Scissors, Rock), Outcome::Lose);
        assert_eq!(play_round(Paper, Rock), Outcome::Win);
        assert_eq!(play_round(Paper, Paper), Outcome::Draw);
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::default();
        assert_eq!(score.winner(), None);

        score.record(Outcome::Draw);
        assert_eq!(score.winner(), Some(Outcome::Draw));

        score.record(Outcome::Lose);
        assert_eq!(score.winner(), Some(Outcome::Lose));

        score.record(Outcome::Win);
        score.record(Outcome::Win);
        assert_eq!(score.winner(), Some(Outcome::Win));
    }

    #[test]
    fn test_random_choice_is_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(GameChoice::random(&mut a), GameChoice::random(&mut b));
        }
    }

    #[test]
    fn test_rounds_at_least_one() {
        let game = Game::with_rng(0, StdRng::seed_from_u64(1));
        assert_eq!(game.rounds(), 1);
    }
}
