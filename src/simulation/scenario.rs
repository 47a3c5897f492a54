//! Scenarios: a plateau plus an ordered list of rovers and their instructions
//!
//! Used by the headless runner to deploy and drive a whole fleet in one go.

use anyhow::{bail, Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::str::FromStr;

use super::command::Command;
use super::command_center::CommandCenter;
use super::error::RoverError;
use super::types::{Point, RoverId};

/// Starting placement and instructions for one rover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverSpec {
    pub x: i32,
    pub y: i32,
    pub heading: char,
    pub commands: String,
}

impl RoverSpec {
    pub fn new(x: i32, y: i32, heading: char, commands: &str) -> Self {
        Self {
            x,
            y,
            heading,
            commands: commands.to_string(),
        }
    }
}

impl FromStr for RoverSpec {
    type Err = anyhow::Error;

    /// Parse `"X Y H COMMANDS"`, e.g. `"1 2 N LMLMLMLMM"`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 4 {
            bail!(
                "Expected \"X Y HEADING COMMANDS\", got {} field(s) in {:?}",
                parts.len(),
                s
            );
        }

        let x = parts[0]
            .parse()
            .with_context(|| format!("Invalid x coordinate {:?}", parts[0]))?;
        let y = parts[1]
            .parse()
            .with_context(|| format!("Invalid y coordinate {:?}", parts[1]))?;

        let mut heading_chars = parts[2].chars();
        let heading = match (heading_chars.next(), heading_chars.next()) {
            (Some(c), None) => c,
            _ => bail!("Heading must be a single letter, got {:?}", parts[2]),
        };

        Ok(Self::new(x, y, heading, parts[3]))
    }
}

/// What happened to one rover of a scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoverOutcome {
    /// All instructions ran; final `"X Y D"` state
    Completed { id: RoverId, report: String },
    /// Deployed, but the instructions were rejected part-way
    Stopped { id: RoverId, error: RoverError },
    /// The rover could not be placed
    NotDeployed { error: RoverError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub max_x: i32,
    pub max_y: i32,
    pub rovers: Vec<RoverSpec>,
}

impl Scenario {
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self {
            max_x,
            max_y,
            rovers: Vec::new(),
        }
    }

    pub fn with_rover(mut self, rover: RoverSpec) -> Self {
        self.rovers.push(rover);
        self
    }

    /// The classic two-rover run on a 5x5 plateau
    pub fn demo() -> Self {
        Self::new(5, 5)
            .with_rover(RoverSpec::new(1, 2, 'N', "LMLMLMLMM"))
            .with_rover(RoverSpec::new(3, 3, 'E', "MMRMMRMRRM"))
    }

    /// Random rovers on distinct starting cells with random instructions
    ///
    /// `count` is capped at the number of cells on the plateau. Pass a seed for
    /// a reproducible scenario.
    pub fn random(
        max_x: i32,
        max_y: i32,
        count: usize,
        commands_len: usize,
        seed: Option<u64>,
    ) -> Result<Self> {
        if max_x < 0 || max_y < 0 || (max_x == 0 && max_y == 0) {
            bail!("Cannot generate rovers for a {}x{} plateau", max_x, max_y);
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let cells = (max_x as usize + 1) * (max_y as usize + 1);
        let count = count.min(cells);
        let headings = ['N', 'E', 'S', 'W'];
        let alphabet = [Command::Left, Command::Right, Command::Move];

        let mut taken = HashSet::new();
        let mut scenario = Self::new(max_x, max_y);
        while scenario.rovers.len() < count {
            let start = Point::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            if !taken.insert(start) {
                continue;
            }

            let heading = *headings.choose(&mut rng).context("No headings to choose from")?;
            let commands: String = (0..commands_len.max(1))
                .filter_map(|_| alphabet.choose(&mut rng).map(|c| c.as_char()))
                .collect();

            scenario
                .rovers
                .push(RoverSpec::new(start.x, start.y, heading, &commands));
        }

        Ok(scenario)
    }

    /// Add the plateau to `center`, then deploy and drive each rover in order
    ///
    /// A rover that fails to deploy or stops early does not prevent the
    /// following rovers from running.
    pub fn run(&self, center: &mut CommandCenter) -> Result<Vec<RoverOutcome>> {
        center
            .add_plateau(self.max_x, self.max_y)
            .context("Failed to set up the plateau")?;

        let mut outcomes = Vec::with_capacity(self.rovers.len());
        for spec in &self.rovers {
            let id = match center.add_rover(spec.x, spec.y, spec.heading) {
                Ok(id) => id,
                Err(error) => {
                    outcomes.push(RoverOutcome::NotDeployed { error });
                    continue;
                }
            };

            let outcome = match center.move_rover(id, &spec.commands) {
                Ok(report) => RoverOutcome::Completed { id, report },
                Err(error) => RoverOutcome::Stopped { id, error },
            };
            outcomes.push(outcome);
        }

        let completed = outcomes
            .iter()
            .filter(|o| matches!(o, RoverOutcome::Completed { .. }))
            .count();
        info!("Rovers completed: {}/{}", completed, outcomes.len());

        Ok(outcomes)
    }
}
