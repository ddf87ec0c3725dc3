//! The Raibot move state machine.
//!
//! Every instruction produces exactly one history event, and that event is
//! durably written before any error is handed back to the caller.

use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use raibot_core::history::RESULT_OK;
use raibot_core::{
    movement, Direction, Error, HistoryEvent, Instruction, Position, Result, Terrain, Tile,
};
use raibot_store::{DocumentKey, StateStore};

/// One request to the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorCommand {
    /// `start`, `left`, `right`, `up` or `down`
    pub direction: String,
    /// Start column, required for `start`
    pub start_x: Option<i64>,
    /// Start row, required for `start`
    pub start_y: Option<i64>,
}

impl SimulatorCommand {
    /// A `start` command at `(x, y)`.
    pub fn start(x: i64, y: i64) -> Self {
        Self {
            direction: "start".to_string(),
            start_x: Some(x),
            start_y: Some(y),
        }
    }

    /// A command with no start coordinates.
    pub fn direction(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            start_x: None,
            start_y: None,
        }
    }
}

/// Drives the robot over the terrain and keeps the store up to date.
///
/// Calls are serialized through an internal lock, so one `Simulator` never
/// interleaves two read-modify-write sequences. Separate processes sharing the
/// same data directory are not coordinated.
#[derive(Debug)]
pub struct Simulator {
    store: StateStore,
    terrain: Terrain,
    lock: Mutex<()>,
}

impl Simulator {
    /// Create a simulator over `store` using `terrain` as ground truth.
    pub fn new(store: StateStore, terrain: Terrain) -> Self {
        Self {
            store,
            terrain,
            lock: Mutex::new(()),
        }
    }

    /// Underlying store.
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Current robot location.
    pub async fn location(&self) -> Result<Position> {
        let _guard = self.lock.lock().await;
        self.store.location.read().await
    }

    /// Pretty-printed JSON of one document.
    pub async fn render(&self, key: DocumentKey) -> Result<String> {
        let _guard = self.lock.lock().await;
        self.store.render(key).await
    }

    /// Carry out `command`, returning a short confirmation.
    #[instrument(skip(self))]
    pub async fn execute(&self, command: &SimulatorCommand) -> Result<String> {
        let _guard = self.lock.lock().await;
        debug!("Raibot triggered with instruction: {}", command.direction);

        match Instruction::parse(&command.direction) {
            Ok(Instruction::Start) => self.start(command.start_x, command.start_y).await?,
            Ok(Instruction::Move(direction)) => self.advance(direction).await?,
            Err(err) => {
                let here = self.store.location.read().await?;
                return self.fail(here, here, &command.direction, err).await;
            }
        }

        Ok(format!("Raibot is moving {}.", command.direction))
    }

    async fn start(&self, start_x: Option<i64>, start_y: Option<i64>) -> Result<()> {
        let (Some(x), Some(y)) = (start_x, start_y) else {
            let here = self.store.location.read().await?;
            return self
                .fail(here, here, "start", Error::MissingStartCoordinates)
                .await;
        };
        let at = Position::new(x, y)?;

        info!("Raibot starting at column: {} row: {}", at.x(), at.y());

        // The reset entry is the history event for this instruction
        self.store.history.reset(at).await?;
        self.store.location.write(at).await?;
        self.store.map.reset().await?;
        self.store.map.write_cell(at, Tile::Clear).await
    }

    async fn advance(&self, direction: Direction) -> Result<()> {
        let from = self.store.location.read().await?;
        let instruction = direction.as_str();
        debug!("Raibot moving {} from {}", direction, from);

        let to = match movement::step(from, direction) {
            Ok(to) => to,
            Err(err) => return self.fail(from, from, instruction, err).await,
        };

        if !self.terrain.is_open(to) {
            let err = match self.store.map.write_cell(to, Tile::Obstacle).await {
                Ok(()) => Error::BlockedByObstacle(to),
                Err(err) => err,
            };
            return self.fail(from, to, instruction, err).await;
        }

        self.store
            .history
            .append(HistoryEvent::new(from, to, instruction, RESULT_OK))
            .await?;
        self.store.location.write(to).await?;
        self.store.map.write_cell(to, Tile::Clear).await?;

        info!("Raibot moved {} to {}", direction, to);
        Ok(())
    }

    /// Record the failed instruction, then return `err`.
    async fn fail<T>(
        &self,
        from: Position,
        to: Position,
        instruction: &str,
        err: Error,
    ) -> Result<T> {
        warn!("Instruction '{}' failed: {}", instruction, err);
        self.store
            .history
            .append(HistoryEvent::new(from, to, instruction, err.to_string()))
            .await?;
        Err(err)
    }
}
