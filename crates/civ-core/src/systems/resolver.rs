//! Action and Event Resolution
//!
//! Draws the turn's two actions and optional world event, and folds them into
//! an experience ledger. Draw order is part of the determinism contract:
//! first action, second action, event roll, event pick.

use civ_events::DomainValues;
use rand::Rng;

use crate::catalog::{Action, EventDefinition, EVENT_CATALOG};

/// Draws two actions uniformly, with replacement.
pub fn pick_actions<R: Rng + ?Sized>(rng: &mut R) -> [Action; 2] {
    let first = Action::ALL[rng.gen_range(0..Action::ALL.len())];
    let second = Action::ALL[rng.gen_range(0..Action::ALL.len())];
    [first, second]
}

/// Sums per-domain experience for the chosen actions.
pub fn accumulate_experience(actions: &[Action]) -> DomainValues {
    let mut xp = DomainValues::zero();
    for action in actions {
        for &(domain, amount) in action.experience() {
            xp[domain] += amount;
        }
    }
    xp
}

/// Rolls for a world event. Always consumes one draw for the roll, and one
/// more for the pick when the roll succeeds.
pub fn roll_event<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> Option<&'static EventDefinition> {
    if rng.gen::<f64>() < chance {
        Some(&EVENT_CATALOG[rng.gen_range(0..EVENT_CATALOG.len())])
    } else {
        None
    }
}

/// Scales experience by the event's multipliers. Unlisted domains are untouched.
pub fn apply_event_multipliers(xp: &mut DomainValues, event: &EventDefinition) {
    for &(domain, multiplier) in event.xp_multipliers {
        xp[domain] *= multiplier;
    }
}

/// Adds the event's flat deltas to domain values.
pub fn apply_event_deltas(domains: &mut DomainValues, event: &EventDefinition) {
    for &(domain, delta) in event.domain_deltas {
        domains[domain] += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civ_events::Domain;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_accumulate_is_additive() {
        let xp = accumulate_experience(&[Action::Raid, Action::Trade]);

        assert_eq!(xp[Domain::Warfare], 2.0);
        assert_eq!(xp[Domain::Production], 1.5);
        assert_eq!(xp[Domain::Social], 0.5);
        assert_eq!(xp[Domain::Exploration], 1.0);
        assert_eq!(xp[Domain::Survival], 0.0);
        assert_eq!(xp[Domain::Expression], 0.0);
    }

    #[test]
    fn test_same_action_twice_doubles() {
        let xp = accumulate_experience(&[Action::Farm, Action::Farm]);
        assert_eq!(xp[Domain::Survival], 4.0);
        assert_eq!(xp[Domain::Production], 2.0);
    }

    #[test]
    fn test_multipliers_only_touch_listed_domains() {
        let drought = EventDefinition::by_name("Drought").unwrap();
        let mut xp = accumulate_experience(&[Action::Farm, Action::Hunt]);

        apply_event_multipliers(&mut xp, drought);

        assert!((xp[Domain::Survival] - 2.7).abs() < 1e-12);
        assert_eq!(xp[Domain::Production], 1.0);
        assert_eq!(xp[Domain::Warfare], 0.5);
    }

    #[test]
    fn test_event_deltas() {
        let plague = EventDefinition::by_name("Plague").unwrap();
        let mut domains = DomainValues::default();

        apply_event_deltas(&mut domains, plague);

        assert!((domains[Domain::Social] - 4.55).abs() < 1e-12);
        assert!((domains[Domain::Expression] - 4.85).abs() < 1e-12);
        assert_eq!(domains[Domain::Survival], 5.0);
    }

    #[test]
    fn test_roll_event_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(roll_event(&mut rng, 0.0).is_none());
            assert!(roll_event(&mut rng, 1.0).is_some());
        }
    }

    #[test]
    fn test_roll_event_frequency() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let fired = (0..10_000)
            .filter(|_| roll_event(&mut rng, 0.30).is_some())
            .count();
        assert!((2_700..3_300).contains(&fired), "fired {} times", fired);
    }

    #[test]
    fn test_pick_actions_deterministic() {
        let mut rng1 = SmallRng::seed_from_u64(99);
        let mut rng2 = SmallRng::seed_from_u64(99);
        let picks1: Vec<[Action; 2]> = (0..50).map(|_| pick_actions(&mut rng1)).collect();
        let picks2: Vec<[Action; 2]> = (0..50).map(|_| pick_actions(&mut rng2)).collect();
        assert_eq!(picks1, picks2);
    }
}
