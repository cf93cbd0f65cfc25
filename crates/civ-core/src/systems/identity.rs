//! National Identity
//!
//! NI summarises cohesion and culture against militarisation. It is
//! recomputed from scratch at the end of every turn and always clamped.

use civ_events::{Civilization, Domain, DomainValues, NI_MAX, NI_MIN};

/// Computes clamped NI from domain values.
pub fn compute_ni(domains: &DomainValues) -> f64 {
    let social = domains[Domain::Social];
    let raw = 5.0
        + 0.25 * (social - 10.0) // institutions
        + 0.20 * (domains[Domain::Expression] - 10.0) // culture
        + 0.10 * (domains[Domain::Survival] - 10.0) // prosperity
        - 0.07 * (domains[Domain::Warfare] - social).max(0.0); // militarism over cohesion
    raw.clamp(NI_MIN, NI_MAX)
}

/// Recomputes and stores the civilization's NI.
pub fn update_ni(civ: &mut Civilization) -> f64 {
    civ.ni = compute_ni(&civ.domains);
    civ.ni
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_ni() {
        // 5 - 1.25 - 1.0 - 0.5
        let ni = compute_ni(&DomainValues::default());
        assert!((ni - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_clamps_high() {
        let mut domains = DomainValues::uniform(0.0);
        domains[Domain::Social] = 100.0;
        domains[Domain::Expression] = 100.0;
        assert_eq!(compute_ni(&domains), 10.0);
    }

    #[test]
    fn test_clamps_low() {
        let mut domains = DomainValues::uniform(0.0);
        domains[Domain::Warfare] = 100.0;
        assert_eq!(compute_ni(&domains), 0.0);
    }

    #[test]
    fn test_update_ni_stores_value() {
        let mut civ = Civilization::default();
        civ.domains[Domain::Social] = 20.0;
        let ni = update_ni(&mut civ);
        assert_eq!(civ.ni, ni);
        // 5 + 2.5 - 1.0 - 0.5
        assert!((ni - 6.0).abs() < 1e-12);
    }
}
