use hecs::Entity;
use rand::{Rng, RngCore, SeedableRng};

/// Turns host timestamps (milliseconds) into frame deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,           // Delta of the latest tick, 0 on the first one
    pub now: f64,          // Latest host timestamp
    last: Option<f64>,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new timestamp and return the delta since the previous one.
    /// The first tick has nothing to diff against and yields 0.
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        self.dt = match self.last {
            Some(last) => (timestamp - last) as f32,
            None => 0.0,
        };
        self.last = Some(timestamp);
        self.now = timestamp;
        self.dt
    }
}

/// True when a frame delta should advance the simulation.
///
/// Only zero and NaN skip a frame; the magnitude is otherwise ignored
/// because velocities are applied per frame.
pub fn is_live_frame(dt: f32) -> bool {
    dt != 0.0 && !dt.is_nan()
}

/// Points earned by hitting targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.points = self.points.saturating_add(1);
    }
}

/// Random number source for target respawns
pub struct GameRng(Box<dyn RngCore>);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(Box::new(rand::rngs::StdRng::seed_from_u64(seed)))
    }

    /// Wrap any generator, e.g. `rand::rngs::mock::StepRng` in tests
    pub fn from_source(source: impl RngCore + 'static) -> Self {
        Self(Box::new(source))
    }

    /// Uniform in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    pub fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl std::fmt::Debug for GameRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GameRng")
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub targets_hit: Vec<Entity>,
    pub projectile_docked: bool,
    pub cannon_struck: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.targets_hit.clear();
        self.projectile_docked = false;
        self.cannon_struck = false;
    }

    pub fn was_hit(&self, target: Entity) -> bool {
        self.targets_hit.contains(&target)
    }
}
