//! Per-turn systems.
//!
//! Each system is a plain function over the civilization state, invoked in a
//! fixed order by the turn orchestrator.

pub mod identity;
pub mod milestones;
pub mod progression;
pub mod resolver;

pub use identity::{compute_ni, update_ni};
pub use milestones::{
    age_gate_key, apply_milestones, crossing_key, major_key, minor_key, tier, MilestoneRules,
};
pub use progression::ProgressionCurve;
pub use resolver::{
    accumulate_experience, apply_event_deltas, apply_event_multipliers, pick_actions, roll_event,
};
