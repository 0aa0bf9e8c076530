//! Game loop - input, movement, ray fan, present, pace.
//!
//! One iteration:
//!
//! 1. Drain platform events; a quit request moves the loop to `Stopped`.
//! 2. Read held movement keys into at most one command per axis.
//! 3. Apply the commands to the player.
//! 4. Clear, render the ray fan, present.
//! 5. Sleep out the rest of the frame interval.
//!
//! A quit raised while sleeping is seen at the top of the next iteration.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::core::{CollisionProbe, CoreError, FrameRenderer, GridMap, Platform, Player, Settings};
use crate::pacer::FramePacer;
use crate::types::{MoveKey, PlayerCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Select this frame's commands from the held keys.
///
/// Translation and rotation are independent axes. Opposing keys on the
/// same axis cancel out.
pub fn frame_commands(held: impl Fn(MoveKey) -> bool) -> ArrayVec<PlayerCommand, 2> {
    let mut commands = ArrayVec::new();

    for (a, b) in [
        (MoveKey::Forward, MoveKey::Backward),
        (MoveKey::TurnLeft, MoveKey::TurnRight),
    ] {
        match (held(a), held(b)) {
            (true, false) => commands.push(a.command()),
            (false, true) => commands.push(b.command()),
            _ => {}
        }
    }

    commands
}

/// Owns the map and the player for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct GameLoop {
    map: GridMap,
    player: Player,
    renderer: FrameRenderer,
    state: LoopState,
    frames: u64,
}

impl GameLoop {
    /// Validate the settings and the spawn point, then build the loop.
    pub fn new(map: GridMap, player: Player, settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;

        let probe = CollisionProbe::new(&map, settings.tile_size);
        if probe.is_blocked(player.x(), player.y()) {
            return Err(CoreError::SpawnBlocked {
                x: player.x(),
                y: player.y(),
            });
        }

        Ok(Self {
            map,
            player,
            renderer: FrameRenderer::new(settings),
            state: LoopState::Running,
            frames: 0,
        })
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn settings(&self) -> &Settings {
        self.renderer.settings()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply one command. Returns `false` when a move was blocked by a wall.
    pub fn apply_command(&mut self, command: PlayerCommand) -> bool {
        let settings = *self.renderer.settings();
        let probe = CollisionProbe::new(&self.map, settings.tile_size);

        let moved = match command {
            PlayerCommand::MoveForward => self.player.move_forward(settings.move_speed, &probe),
            PlayerCommand::MoveBackward => self.player.move_backward(settings.move_speed, &probe),
            PlayerCommand::TurnLeft => {
                self.player.rotate(-settings.rot_speed);
                true
            }
            PlayerCommand::TurnRight => {
                self.player.rotate(settings.rot_speed);
                true
            }
        };

        if !moved {
            trace!(
                x = self.player.x(),
                y = self.player.y(),
                ?command,
                "move blocked"
            );
        }
        moved
    }

    /// Run one iteration without pacing.
    pub fn step<P: Platform>(&mut self, platform: &mut P) -> Result<LoopState, P::Error> {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        if platform.poll_quit_requested()? {
            self.state = LoopState::Stopped;
            info!(frames = self.frames, "quit requested");
            return Ok(LoopState::Stopped);
        }

        for command in frame_commands(|key| platform.key_held(key)) {
            self.apply_command(command);
        }

        platform.clear_frame()?;
        self.renderer.render(&self.map, &self.player, platform);
        platform.present_frame()?;

        self.frames += 1;
        Ok(LoopState::Running)
    }

    /// Run until the platform asks to quit. Returns the number of frames drawn.
    pub fn run<P: Platform>(
        &mut self,
        platform: &mut P,
        pacer: &mut FramePacer,
    ) -> Result<u64, P::Error> {
        let settings = self.settings();
        info!(
            rays = settings.ray_count,
            fov = settings.fov,
            max_distance = settings.max_distance,
            frame_ms = settings.frame_ms,
            "game loop started"
        );

        pacer.reset();
        while self.step(platform)? == LoopState::Running {
            pacer.wait();
        }

        debug!(frames = self.frames, "game loop stopped");
        Ok(self.frames)
    }
}
