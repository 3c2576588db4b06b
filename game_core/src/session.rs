//! Session controller
//!
//! Owns every entity of a single game and runs the per-frame update in a
//! fixed order: cannon, projectile, primary target, secondary target.

use hecs::{Entity, World};

use crate::systems::{
    aim_cannon, launch_projectile, move_cannon, move_projectile, read, steer_cannon,
    stop_cannon, update_target,
};
use crate::{
    is_live_frame, spawn_cannon, spawn_projectile, spawn_target, Arena, Body, Cannon, Config,
    Control, Events, GameRng, InputEvent, Projectile, Score, SessionAction, SessionState, Target,
    Transition,
};

/// Read-only view of a target for renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub entity: Entity,
    pub body: Body,
    pub target: Target,
    pub active: bool,
    pub hit: bool,
}

pub struct Session {
    world: World,
    config: Config,
    arena: Arena,
    state: SessionState,
    score: Score,
    events: Events,
    rng: GameRng,
    cannon: Entity,
    projectile: Entity,
    targets: [Entity; 2], // primary, secondary
    secondary_awake: bool,
}

impl Session {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();
        let arena = config.arena();

        let cannon = spawn_cannon(&mut world, &config);
        let projectile = spawn_projectile(&mut world, &config, cannon);

        let (pos, vel) = config.primary_spawn();
        let primary = spawn_target(&mut world, Target::primary(&config), Body::new(pos, vel));
        let (pos, vel) = config.secondary_spawn();
        let secondary = spawn_target(&mut world, Target::secondary(&config), Body::new(pos, vel));

        Self {
            world,
            config,
            arena,
            state: SessionState::default(),
            score: Score::new(),
            events: Events::new(),
            rng,
            cannon,
            projectile,
            targets: [primary, secondary],
            secondary_awake: false,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::new(), GameRng::new(seed))
    }

    pub fn move_left(&mut self) {
        if !self.state.is_game_over() {
            steer_cannon(&mut self.world, self.cannon, -1.0);
        }
    }

    pub fn move_right(&mut self) {
        if !self.state.is_game_over() {
            steer_cannon(&mut self.world, self.cannon, 1.0);
        }
    }

    pub fn stop_x(&mut self) {
        stop_cannon(&mut self.world, self.cannon);
    }

    pub fn aim_up(&mut self) {
        if self.state.is_running() {
            aim_cannon(&mut self.world, self.cannon, -self.config.aim_step);
        }
    }

    pub fn aim_down(&mut self) {
        if self.state.is_running() {
            aim_cannon(&mut self.world, self.cannon, self.config.aim_step);
        }
    }

    /// Fire the projectile along the pipe. Not gated: a frozen session
    /// never integrates the new velocity anyway.
    pub fn launch(&mut self) {
        launch_projectile(
            &mut self.world,
            self.projectile,
            self.cannon,
            self.config.launch_factor,
        );
    }

    pub fn toggle_pause(&mut self) -> Transition {
        let transition = self.state.transition(SessionAction::TogglePause);
        if transition.applied {
            log::debug!("session {:?} -> {:?}", transition.from, transition.to);
        }
        transition
    }

    /// Route a discrete input event to the matching control
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(Control::Left) => self.move_left(),
            InputEvent::Press(Control::Right) => self.move_right(),
            InputEvent::Press(Control::AimUp) => self.aim_up(),
            InputEvent::Press(Control::AimDown) => self.aim_down(),
            InputEvent::Press(Control::Fire) => self.launch(),
            InputEvent::Press(Control::Pause) => {
                self.toggle_pause();
            }
            // A release only cancels motion in its own direction
            InputEvent::Release(Control::Left) => {
                if self.cannon_velocity_x() < 0.0 {
                    self.stop_x();
                }
            }
            InputEvent::Release(Control::Right) => {
                if self.cannon_velocity_x() > 0.0 {
                    self.stop_x();
                }
            }
            InputEvent::Release(_) => {}
        }
    }

    /// Advance the session by one frame
    pub fn update(&mut self, dt: f32) {
        self.events.clear();
        if !self.state.is_running() || !is_live_frame(dt) {
            return;
        }

        move_cannon(&mut self.world, self.cannon, &self.arena, dt);
        if move_projectile(&mut self.world, self.projectile, self.cannon, &self.arena, dt) {
            self.events.projectile_docked = true;
        }

        for target in self.targets {
            if !self.is_target_active(target) {
                continue;
            }
            self.note_awake(target);

            let outcome = update_target(
                &mut self.world,
                target,
                self.cannon,
                self.projectile,
                &self.config,
                &mut self.rng,
                dt,
            );

            if outcome.struck_cannon {
                self.events.cannon_struck = true;
                if self.state.transition(SessionAction::CannonStruck).applied {
                    log::info!("game over with {} points", self.score.points);
                }
            }
            if outcome.hit {
                self.score.increment();
                self.events.targets_hit.push(target);
                log::debug!("target hit, points = {}", self.score.points);
            }
        }
    }

    fn is_target_active(&self, target: Entity) -> bool {
        read::<Target>(&self.world, target)
            .map(|t| t.is_active(self.score.points))
            .unwrap_or(false)
    }

    fn note_awake(&mut self, target: Entity) {
        if target == self.targets[1] && !self.secondary_awake {
            self.secondary_awake = true;
            log::info!("secondary target active at {} points", self.score.points);
        }
    }

    fn cannon_velocity_x(&self) -> f32 {
        read::<Body>(&self.world, self.cannon)
            .map(|body| body.vel.x)
            .unwrap_or(0.0)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn points(&self) -> u32 {
        self.score.points
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn cannon_entity(&self) -> Entity {
        self.cannon
    }

    pub fn projectile_entity(&self) -> Entity {
        self.projectile
    }

    pub fn target_entities(&self) -> [Entity; 2] {
        self.targets
    }

    pub fn cannon(&self) -> Option<(Body, Cannon)> {
        read::<Body>(&self.world, self.cannon).zip(read::<Cannon>(&self.world, self.cannon))
    }

    pub fn projectile(&self) -> Option<(Body, Projectile)> {
        read::<Body>(&self.world, self.projectile)
            .zip(read::<Projectile>(&self.world, self.projectile))
    }

    /// Both targets in update order, with activation and hit flags
    pub fn targets(&self) -> Vec<TargetView> {
        self.targets
            .iter()
            .filter_map(|&entity| {
                let body = read::<Body>(&self.world, entity)?;
                let target = read::<Target>(&self.world, entity)?;
                Some(TargetView {
                    entity,
                    body,
                    target,
                    active: target.is_active(self.score.points),
                    hit: self.events.was_hit(entity),
                })
            })
            .collect()
    }

    /// Overwrite an entity's position and velocity, e.g. to stage a scenario
    pub fn place(&mut self, entity: Entity, body: Body) {
        if let Ok(current) = self.world.query_one_mut::<&mut Body>(entity) {
            *current = body;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::new(), GameRng::default())
    }
}
