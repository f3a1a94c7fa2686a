use std::f64::consts::FRAC_PI_2;
use std::fmt;
use rand::Rng;
use crate::shared_wheel_game::PrizeList;
use crate::wheel_render::TAU;

pub const SPIN_DURATION_MS: f64 = 5000.0;
pub const MIN_FULL_TURNS: f64 = 5.0;
/// Rounding slack for the forward distance of a spin at large accumulated rotations.
pub const TURN_EPSILON: f64 = 1e-9;
/// Pointer sits at the top of the wheel.
pub const DEFAULT_POINTER_ANGLE: f64 = -FRAC_PI_2;

/// Quadratic ease-out: `b` at `t = 0`, `b + c` at `t = d`, slowing down in between.
pub fn ease_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

/// Rotation that parks the centre of `winning_index` under the pointer, reached by turning
/// forward from `current` through at least `MIN_FULL_TURNS` whole turns.
///
/// When the winner is already under the pointer the result is `current + MIN_FULL_TURNS * TAU`
/// in f64, so `target - current` can come out a few ulps short of the exact turn count.
/// Compare it with a tolerance of `TURN_EPSILON`.
pub fn target_rotation(current: f64, winning_index: usize, segments: usize, pointer_angle: f64) -> f64 {
    let step = TAU / segments as f64;
    let mut target = pointer_angle - winning_index as f64 * step - step / 2.0;
    while target < current {
        target += TAU;
    }
    target + MIN_FULL_TURNS * TAU
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejected {
    AlreadySpinning,
    NoPrizes,
}

impl fmt::Display for SpinRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySpinning => f.write_str("a spin is already in progress"),
            Self::NoPrizes => f.write_str("no prizes loaded"),
        }
    }
}

impl std::error::Error for SpinRejected {}

/// One spin in flight. Holds the prize snapshot the winning index refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    pub winning_index: usize,
    pub prizes: PrizeList,
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub start_timestamp: Option<f64>,
    pub duration_ms: f64,
}

/// Result of feeding one frame timestamp to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Still easing. The session comes back for the next frame.
    Animating { session: SpinSession, rotation: f64 },
    /// Duration elapsed. `rotation` is exactly the target.
    Finished { rotation: f64, outcome: SpinOutcome },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winning_index: usize,
    pub prize: String,
}

impl SpinSession {
    pub fn winning_prize(&self) -> &str {
        self.prizes.get(self.winning_index).unwrap_or_default()
    }

    pub fn advance(mut self, now: f64) -> Frame {
        let start = *self.start_timestamp.get_or_insert(now);
        let elapsed = (now - start).max(0.0);

        if elapsed < self.duration_ms {
            let rotation = ease_out_quad(
                elapsed,
                self.start_rotation,
                self.target_rotation - self.start_rotation,
                self.duration_ms,
            );
            Frame::Animating { session: self, rotation }
        } else {
            Frame::Finished {
                rotation: self.target_rotation,
                outcome: SpinOutcome {
                    winning_index: self.winning_index,
                    prize: self.winning_prize().to_string(),
                },
            }
        }
    }
}

/// What the host should do after a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinUpdate {
    Idle,
    /// Draw at `rotation` and request another frame.
    Animating { rotation: f64 },
    /// Draw at `rotation` once more, then hand `outcome` to the player.
    Finished { rotation: f64, outcome: SpinOutcome },
}

/// Owns the wheel rotation and the `Idle -> Spinning -> Idle` lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinController {
    rotation: f64,
    pointer_angle: f64,
    session: Option<SpinSession>,
}

impl Default for SpinController {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinController {
    pub fn new() -> Self {
        Self::with_pointer_angle(DEFAULT_POINTER_ANGLE)
    }

    pub fn with_pointer_angle(pointer_angle: f64) -> Self {
        Self {
            rotation: 0.0,
            pointer_angle,
            session: None,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn pointer_angle(&self) -> f64 {
        self.pointer_angle
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    /// Picks the outcome and starts a session. `None` means the list is still loading.
    pub fn request_spin<R: Rng + ?Sized>(
        &mut self,
        prizes: Option<&PrizeList>,
        rng: &mut R,
    ) -> Result<&SpinSession, SpinRejected> {
        if self.session.is_some() {
            return Err(SpinRejected::AlreadySpinning);
        }
        let prizes = match prizes {
            Some(prizes) if !prizes.is_empty() => prizes.clone(),
            _ => return Err(SpinRejected::NoPrizes),
        };

        let winning_index = rng.gen_range(0..prizes.len());
        let target = target_rotation(self.rotation, winning_index, prizes.len(), self.pointer_angle);

        Ok(&*self.session.insert(SpinSession {
            winning_index,
            prizes,
            start_rotation: self.rotation,
            target_rotation: target,
            start_timestamp: None,
            duration_ms: SPIN_DURATION_MS,
        }))
    }

    /// Advances the active session to `now` (milliseconds, host clock).
    pub fn tick(&mut self, now: f64) -> SpinUpdate {
        let Some(session) = self.session.take() else {
            return SpinUpdate::Idle;
        };

        match session.advance(now) {
            Frame::Animating { session, rotation } => {
                self.rotation = rotation;
                self.session = Some(session);
                SpinUpdate::Animating { rotation }
            }
            Frame::Finished { rotation, outcome } => {
                self.rotation = rotation;
                SpinUpdate::Finished { rotation, outcome }
            }
        }
    }

    /// Abandons the active spin where it stands. Returns whether a spin was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}
