//! Secondary-phase resolution: everything a move does besides its primary
//! damage, expressed as one distribution per move.
//!
//! Damage-derived effects (drain, recoil, follow-up hits, retaliation) take
//! the already-sampled primary damage as input; the phase never re-rolls it.

use crate::data::moves::{MoveData, SecondaryShape};
use crate::error::EngineError;
use crate::sim::conditions::TransientKind;
use crate::sim::outcome::{EffectKind, Outcome, OutcomeDistribution};

/// Damage context the secondary phase reads: what the move just dealt, what
/// the user last received, and the user's own maximum HP.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondaryContext {
    pub damage_dealt: u16,
    pub damage_taken: u16,
    pub user_max_hp: u16,
}

/// Resolves the secondary phase of a move. Negative HP magnitudes heal.
pub fn resolve_secondary(
    mv: &'static MoveData,
    ctx: SecondaryContext,
) -> Result<OutcomeDistribution, EngineError> {
    let dealt = i32::from(ctx.damage_dealt);
    match mv.secondary {
        SecondaryShape::None => Ok(OutcomeDistribution::none()),
        SecondaryShape::StatChange {
            on_user,
            stat,
            stages,
            chance,
        } => gated(on_user, EffectKind::Stat(stat), i32::from(stages), chance),
        SecondaryShape::TransientStatus {
            on_user,
            kind,
            chance,
        } => gated(on_user, EffectKind::Transient(kind), 1, chance),
        SecondaryShape::PersistentStatus {
            on_user,
            kind,
            chance,
        } => {
            let duration = kind.duration();
            if duration == 0 {
                return gated(on_user, EffectKind::Persistent(kind), 1, chance);
            }
            // A duration-carrying condition spreads its chance uniformly over
            // the possible initial countdowns.
            let hit = chance.unwrap_or(1.0);
            if !(hit > 0.0 && hit <= 1.0) {
                return Err(EngineError::ChanceOutOfRange(hit));
            }
            let per_turn = hit / f64::from(duration);
            let mut outcomes: Vec<Outcome> = (1..=i32::from(duration))
                .map(|turns| Outcome::new(turns, per_turn))
                .collect();
            if hit < 1.0 {
                outcomes.push(Outcome::new(0, 1.0 - hit));
            }
            OutcomeDistribution::new(on_user, EffectKind::Persistent(kind), outcomes)
        }
        SecondaryShape::Drain => Ok(OutcomeDistribution::certain(
            true,
            EffectKind::HitPoints,
            -(dealt / 2),
        )),
        SecondaryShape::Recoil { divisor } => Ok(OutcomeDistribution::certain(
            true,
            EffectKind::HitPoints,
            dealt / i32::from(divisor.max(1)),
        )),
        SecondaryShape::MultiHit => {
            if dealt == 0 {
                return Ok(OutcomeDistribution::certain(false, EffectKind::HitPoints, 0));
            }
            OutcomeDistribution::new(
                false,
                EffectKind::HitPoints,
                vec![
                    Outcome::new(dealt, 0.125),
                    Outcome::new(dealt * 2, 0.375),
                    Outcome::new(dealt * 3, 0.375),
                    Outcome::new(dealt * 4, 0.125),
                ],
            )
        }
        SecondaryShape::ExtraHit => Ok(OutcomeDistribution::certain(
            false,
            EffectKind::HitPoints,
            dealt,
        )),
        SecondaryShape::Recharge => Ok(OutcomeDistribution::certain(
            true,
            EffectKind::Transient(TransientKind::Recharging),
            1,
        )),
        SecondaryShape::Kamikaze => Ok(OutcomeDistribution::certain(
            true,
            EffectKind::HitPoints,
            i32::from(ctx.user_max_hp),
        )),
        SecondaryShape::HalfHeal => Ok(OutcomeDistribution::certain(
            true,
            EffectKind::HitPoints,
            -i32::from(ctx.user_max_hp / 2),
        )),
        SecondaryShape::CrashDamage => Ok(OutcomeDistribution::certain(
            true,
            EffectKind::HitPoints,
            1,
        )),
        SecondaryShape::Retaliation => Ok(OutcomeDistribution::certain(
            false,
            EffectKind::HitPoints,
            i32::from(ctx.damage_taken) * 2,
        )),
    }
}

fn gated(
    on_user: bool,
    effect: EffectKind,
    magnitude: i32,
    chance: Option<f64>,
) -> Result<OutcomeDistribution, EngineError> {
    match chance {
        Some(p) => OutcomeDistribution::chance(on_user, effect, magnitude, p),
        None => Ok(OutcomeDistribution::certain(on_user, effect, magnitude)),
    }
}
