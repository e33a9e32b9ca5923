//! Combatant state: the immutable build of a trained creature plus the
//! per-battle layer of stages and conditions on top of it.

use anyhow::{anyhow, bail, Result};

use crate::data::moves::{get_move, MoveData};
use crate::data::species::{get_species, SpeciesData};
use crate::data::types::Type;
use crate::sim::conditions::ConditionState;
use crate::sim::stats::{calc_hp, calc_stat, effective_stat, Stat, StageTrack};

/// One known move and its remaining uses.
#[derive(Clone, Copy, Debug)]
pub struct MoveSlot {
    pub data: &'static MoveData,
    pub pp_left: u8,
    /// Cleared while the slot is disabled.
    pub enabled: bool,
}

impl MoveSlot {
    pub fn new(data: &'static MoveData) -> Self {
        Self {
            data,
            pp_left: data.pp,
            enabled: true,
        }
    }

    pub fn can_use(&self) -> bool {
        self.enabled && self.pp_left > 0
    }

    pub fn spend(&mut self) {
        self.pp_left = self.pp_left.saturating_sub(1);
    }
}

/// A trained creature: species reference, level, computed stats, current HP
/// and known moves. Everything battle-transient lives in [`Battler`].
#[derive(Clone, Debug)]
pub struct Pokemon {
    pub species: &'static SpeciesData,
    pub level: u8,
    pub max_hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spc: u16,
    pub spe: u16,
    pub current_hp: u16,
    pub moves: Vec<MoveSlot>,
}

impl Pokemon {
    /// Builds a creature from catalog names. `iv` and `stat_exp` apply
    /// uniformly to every stat.
    pub fn new(
        species_name: &str,
        level: u8,
        iv: u8,
        stat_exp: u16,
        move_names: &[&str],
    ) -> Result<Self> {
        let species = get_species(species_name)
            .ok_or_else(|| anyhow!("species '{}' not found", species_name))?;
        if level == 0 {
            bail!("level must be at least 1");
        }
        if move_names.is_empty() || move_names.len() > 4 {
            bail!("a creature knows between 1 and 4 moves, got {}", move_names.len());
        }
        let moves = move_names
            .iter()
            .map(|name| {
                get_move(name)
                    .map(MoveSlot::new)
                    .ok_or_else(|| anyhow!("move '{}' not found", name))
            })
            .collect::<Result<Vec<_>>>()?;

        let base = species.base_stats;
        let max_hp = calc_hp(base.hp, iv, stat_exp, level);
        Ok(Self {
            species,
            level,
            max_hp,
            atk: calc_stat(base.atk, iv, stat_exp, level),
            def: calc_stat(base.def, iv, stat_exp, level),
            spc: calc_stat(base.spc, iv, stat_exp, level),
            spe: calc_stat(base.spe, iv, stat_exp, level),
            current_hp: max_hp,
            moves,
        })
    }

    pub fn types(&self) -> [Type; 2] {
        self.species.types
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Applies damage, saturating at zero. Returns whether the creature is
    /// still standing.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.current_hp = self.current_hp.saturating_sub(amount);
        !self.is_fainted()
    }

    /// Restores HP, capped at the maximum.
    pub fn heal(&mut self, amount: u16) {
        self.current_hp = (self.current_hp + amount).min(self.max_hp);
    }
}

/// A creature actively on the field: its build plus stage counters and
/// condition state. Stages and conditions reset on switch-out; the build
/// does not.
#[derive(Clone, Debug)]
pub struct Battler {
    pub pokemon: Pokemon,
    pub stages: StageTrack,
    pub conditions: ConditionState,
}

impl Battler {
    pub fn new(pokemon: Pokemon) -> Self {
        Self {
            pokemon,
            stages: StageTrack::new(),
            conditions: ConditionState::new(),
        }
    }

    pub fn level(&self) -> u8 {
        self.pokemon.level
    }

    pub fn types(&self) -> [Type; 2] {
        self.pokemon.types()
    }

    /// Stage-modified attack. Condition-based halving (burn, paralysis) is
    /// the driver's concern.
    pub fn atk(&self) -> u16 {
        effective_stat(self.pokemon.atk, self.stages.stage(Stat::Atk))
    }

    pub fn def(&self) -> u16 {
        effective_stat(self.pokemon.def, self.stages.stage(Stat::Def))
    }

    pub fn spc(&self) -> u16 {
        effective_stat(self.pokemon.spc, self.stages.stage(Stat::Spc))
    }

    pub fn spe(&self) -> u16 {
        effective_stat(self.pokemon.spe, self.stages.stage(Stat::Spe))
    }

    /// Species base speed, the input to the critical-hit threshold.
    pub fn base_speed(&self) -> u8 {
        self.pokemon.species.base_stats.spe
    }

    /// Applies a stage delta; `false` without state change when the counter
    /// would leave its bounds.
    pub fn modify_stat(&mut self, stat: Stat, delta: i8) -> bool {
        self.stages.try_modify(stat, delta)
    }

    /// Switch-out semantics: stages clear, the build and its persistent
    /// condition remain.
    pub fn reset_stages(&mut self) {
        self.stages.reset();
    }
}
