use crate::config::SPARKLE_FRAMES;
use crate::game::TickEvent;
use crate::grid::Position;

/// Kinds of transient visual markers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EffectKind {
    Sparkle,
}

/// One transient visual marker, counted down per rendered frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub position: Position,
    pub remaining_frames: u8,
}

impl Effect {
    /// Fraction of the effect's life already elapsed, in `[0, 1]`.
    #[must_use]
    pub fn elapsed_fraction(&self) -> f32 {
        let total = match self.kind {
            EffectKind::Sparkle => SPARKLE_FRAMES,
        };
        1.0 - f32::from(self.remaining_frames) / f32::from(total)
    }
}

/// Frame-scoped presentation state: the animation pulse counter and the list
/// of live effects. Carried by the outer loop and handed to the renderer;
/// the simulation never reads it.
#[derive(Debug, Clone, Default)]
pub struct PresentationState {
    pulse: u64,
    effects: Vec<Effect>,
}

impl PresentationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a sparkle over the cell where something was eaten.
    pub fn spawn_sparkle(&mut self, position: Position) {
        self.effects.push(Effect {
            kind: EffectKind::Sparkle,
            position,
            remaining_frames: SPARKLE_FRAMES,
        });
    }

    /// Turns consumption events from a tick into visual effects.
    pub fn absorb(&mut self, events: &[TickEvent]) {
        for event in events {
            match *event {
                TickEvent::AteRegular { position } | TickEvent::AteBonus { position } => {
                    self.spawn_sparkle(position);
                }
                TickEvent::SpeedIncreased { .. }
                | TickEvent::BonusSpawned { .. }
                | TickEvent::BonusExpired => {}
            }
        }
    }

    /// Advances one rendered frame: bumps the pulse counter, counts effects
    /// down, and prunes the expired ones.
    pub fn advance_frame(&mut self) {
        self.pulse = self.pulse.wrapping_add(1);
        for effect in &mut self.effects {
            effect.remaining_frames = effect.remaining_frames.saturating_sub(1);
        }
        self.effects.retain(|effect| effect.remaining_frames > 0);
    }

    /// Drops all live effects, for round restarts.
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Free-running animation counter.
    #[must_use]
    pub fn pulse(&self) -> u64 {
        self.pulse
    }

    /// Currently live effects.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}
