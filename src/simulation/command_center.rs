//! Command center that owns every plateau and rover
//!
//! Rovers never see each other. All collision checks go through the command
//! center, which holds the authoritative fleet in deployment order.

use log::{debug, info, warn};

use super::command::{parse_commands, Command};
use super::error::{RoverError, RoverResult};
use super::plateau::Plateau;
use super::rover::Rover;
use super::types::{PlateauId, Point, RoverId, SimId};

/// A rover together with the plateau it was deployed on
#[derive(Debug, Clone)]
struct Deployment {
    plateau: PlateauId,
    rover: Rover,
}

/// Registry of plateaus and the rover fleet
///
/// Moves take `&mut self`, so a command string always runs to completion
/// before any other rover can move. Share one across threads behind a mutex.
#[derive(Debug, Clone, Default)]
pub struct CommandCenter {
    plateaus: Vec<Plateau>,
    fleet: Vec<Deployment>,
    /// Plateau new rovers are deployed on
    active_plateau: Option<PlateauId>,
    /// Last rover added or moved
    current_rover: Option<RoverId>,
}

impl CommandCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plateau and make it the target for subsequent [`add_rover`](Self::add_rover) calls
    pub fn add_plateau(&mut self, max_x: i32, max_y: i32) -> RoverResult<PlateauId> {
        let plateau = Plateau::new(max_x, max_y)?;
        let id = PlateauId(SimId(self.plateaus.len()));
        self.plateaus.push(plateau);
        self.active_plateau = Some(id);
        info!("Added plateau {:?} with upper-right corner {}", id.0 .0, plateau.max());
        Ok(id)
    }

    /// Make an existing plateau the target for new rovers
    pub fn select_plateau(&mut self, id: PlateauId) -> RoverResult<()> {
        self.plateau(id)?;
        self.active_plateau = Some(id);
        Ok(())
    }

    pub fn active_plateau(&self) -> Option<PlateauId> {
        self.active_plateau
    }

    pub fn plateau(&self, id: PlateauId) -> RoverResult<&Plateau> {
        self.plateaus
            .get(id.0 .0)
            .ok_or(RoverError::UnknownPlateau(id))
    }

    pub fn plateau_count(&self) -> usize {
        self.plateaus.len()
    }

    /// Deploy a rover on the active plateau
    ///
    /// Initial placements are trusted: a rover may be deployed onto a cell
    /// that another rover already occupies. Only moves are collision-checked.
    pub fn add_rover(&mut self, x: i32, y: i32, heading: char) -> RoverResult<RoverId> {
        let plateau_id = self.active_plateau.ok_or(RoverError::NoPlateau)?;
        self.add_rover_on(plateau_id, x, y, heading)
    }

    /// Deploy a rover on a specific plateau without changing the active one
    pub fn add_rover_on(
        &mut self,
        plateau_id: PlateauId,
        x: i32,
        y: i32,
        heading: char,
    ) -> RoverResult<RoverId> {
        let plateau = *self.plateau(plateau_id)?;
        let rover = Rover::new(plateau, x, y, heading)?;
        let id = RoverId(SimId(self.fleet.len()));
        info!(
            "Deployed rover {:?} on plateau {:?} at {} facing {}",
            id.0 .0,
            plateau_id.0 .0,
            rover.position(),
            rover.heading()
        );
        self.fleet.push(Deployment {
            plateau: plateau_id,
            rover,
        });
        self.current_rover = Some(id);
        Ok(id)
    }

    pub fn rover(&self, id: RoverId) -> RoverResult<&Rover> {
        self.fleet
            .get(id.0 .0)
            .map(|deployment| &deployment.rover)
            .ok_or(RoverError::UnknownRover(id))
    }

    /// Plateau the rover was deployed on
    pub fn rover_plateau(&self, id: RoverId) -> RoverResult<PlateauId> {
        self.fleet
            .get(id.0 .0)
            .map(|deployment| deployment.plateau)
            .ok_or(RoverError::UnknownRover(id))
    }

    /// All rovers in deployment order
    pub fn list_rovers(&self) -> Vec<&Rover> {
        self.fleet.iter().map(|deployment| &deployment.rover).collect()
    }

    pub fn rover_count(&self) -> usize {
        self.fleet.len()
    }

    pub fn current_rover(&self) -> Option<RoverId> {
        self.current_rover
    }

    /// Advisory number of rovers the active plateau could hold at once
    ///
    /// One rover per cell, `(max_x + 1) * (max_y + 1)`. Nothing enforces it.
    pub fn capacity_estimate(&self) -> Option<usize> {
        let id = self.active_plateau?;
        self.plateaus.get(id.0 .0).map(Plateau::cell_count)
    }

    /// Whether another rover on the same plateau as `id` stands on `point`
    fn occupied_by_other(&self, id: RoverId, point: Point) -> bool {
        let plateau = self.fleet[id.0 .0].plateau;
        self.fleet.iter().enumerate().any(|(index, deployment)| {
            index != id.0 .0 && deployment.plateau == plateau && deployment.rover.position() == point
        })
    }

    /// Run a command string against one rover and return its final `"X Y D"` state
    ///
    /// The whole string is validated before the rover moves. Commands then run
    /// left to right; the first move that would leave the plateau or hit another
    /// rover aborts the rest. Steps committed before the failure are kept.
    pub fn move_rover(&mut self, id: RoverId, commands: &str) -> RoverResult<String> {
        self.rover(id)?;
        let commands = parse_commands(commands)?;
        self.current_rover = Some(id);

        for command in commands {
            let index = id.0 .0;
            match command {
                Command::Left => self.fleet[index].rover.turn_left(),
                Command::Right => self.fleet[index].rover.turn_right(),
                Command::Move => {
                    let rover = &self.fleet[index].rover;
                    let candidate = match rover.forward() {
                        Some(point) if rover.plateau().contains(point) => point,
                        _ => {
                            let err = RoverError::OutOfBoundsMove {
                                position: rover.position(),
                                heading: rover.heading(),
                            };
                            warn!("Rover {:?} stopped: {}", index, err);
                            return Err(err);
                        }
                    };

                    if self.occupied_by_other(id, candidate) {
                        let err = RoverError::Collision {
                            position: rover.position(),
                            heading: rover.heading(),
                        };
                        warn!("Rover {:?} stopped: {}", index, err);
                        return Err(err);
                    }

                    self.fleet[index].rover.apply_move(candidate);
                }
            }
            debug!(
                "Rover {:?} after '{}': {}",
                index,
                command.as_char(),
                self.fleet[index].rover.report()
            );
        }

        Ok(self.fleet[id.0 .0].rover.report())
    }

    /// [`move_rover`](Self::move_rover) on the last rover added or moved
    pub fn move_current_rover(&mut self, commands: &str) -> RoverResult<String> {
        let id = self.current_rover.ok_or_else(|| {
            RoverError::InvalidCommand("No rover has been deployed to receive instructions.".to_string())
        })?;
        self.move_rover(id, commands)
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "Plateaus: {}, Rovers: {}",
            self.plateaus.len(),
            self.fleet.len()
        )];
        for (index, deployment) in self.fleet.iter().enumerate() {
            lines.push(format!(
                "  Rover {} on plateau {}: {}",
                index,
                deployment.plateau.0 .0,
                deployment.rover.report()
            ));
        }
        lines.join("\n")
    }

    /// Draw a plateau as ASCII, north at the top
    ///
    /// Empty cells are `.`, rovers are their heading letter, and a cell holding
    /// more than one rover is `*`.
    pub fn draw_map(&self, id: PlateauId) -> RoverResult<String> {
        let max = self.plateau(id)?.max();
        let width = max.x as usize + 1;
        let height = max.y as usize + 1;
        let mut grid = vec![vec!['.'; width]; height];

        for deployment in self.fleet.iter().filter(|d| d.plateau == id) {
            let position = deployment.rover.position();
            let cell = &mut grid[position.y as usize][position.x as usize];
            *cell = if *cell == '.' {
                deployment.rover.heading().as_char()
            } else {
                '*'
            };
        }

        let rows: Vec<String> = grid
            .iter()
            .rev()
            .map(|row| row.iter().collect())
            .collect();
        Ok(rows.join("\n"))
    }
}
