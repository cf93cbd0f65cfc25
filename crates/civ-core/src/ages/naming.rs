//! Age Naming
//!
//! Builds a display name from ranked signals by filling one of five
//! templates with words from the lexicon.

use civ_events::{Signal, SignalKind};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{words, WordClass, FALLBACK_KIND};

/// Name templates, picked uniformly.
pub const NAME_TEMPLATES: [&str; 5] = [
    "The {Adj} {Noun}",
    "{Noun} of {Concept}",
    "Era of {Concept}",
    "The {Adj} {Concept}",
    "{Biome} {Noun}",
];

/// Substituted for `{Biome}` when no hint is given
pub const DEFAULT_BIOME: &str = "Wilds";

/// Chance the biome hint is prefixed to the noun
const BIOME_PREFIX_CHANCE: f64 = 0.5;

/// Generates an Age name.
///
/// Draw order: template, adjective, noun, concept, then the biome coin if a
/// hint is present. Words come from the lexicon entries of the two
/// strongest signals; with fewer than two signals the tail repeats the head,
/// and with none the head is `social`.
pub fn build_name<R: Rng + ?Sized>(
    rng: &mut R,
    signals: &[Signal],
    biome_hint: Option<&str>,
) -> String {
    let template = NAME_TEMPLATES[rng.gen_range(0..NAME_TEMPLATES.len())];

    let (head, tail) = head_and_tail(signals);

    let adjective = pick_word(rng, WordClass::Adjective, head, tail);
    let mut noun = pick_word(rng, WordClass::Noun, head, tail).to_string();
    let concept = pick_word(rng, WordClass::Noun, head, tail);

    let hint = biome_hint.filter(|h| !h.is_empty());
    if let Some(hint) = hint {
        if rng.gen::<f64>() < BIOME_PREFIX_CHANCE {
            noun = format!("{} {}", hint, noun);
        }
    }

    template
        .replace("{Adj}", adjective)
        .replace("{Noun}", &noun)
        .replace("{Concept}", concept)
        .replace("{Biome}", hint.unwrap_or(DEFAULT_BIOME))
}

/// Strongest and second-strongest signal kinds.
fn head_and_tail(signals: &[Signal]) -> (SignalKind, SignalKind) {
    let mut ranked: Vec<&Signal> = signals.iter().filter(|s| s.weight > 0.0).collect();
    // Stable sort: equal weights keep their extraction order
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let head = ranked.first().map(|s| s.kind).unwrap_or(FALLBACK_KIND);
    let tail = ranked.get(1).map(|s| s.kind).unwrap_or(head);
    (head, tail)
}

fn pick_word<R: Rng + ?Sized>(
    rng: &mut R,
    class: WordClass,
    head: SignalKind,
    tail: SignalKind,
) -> &'static str {
    let mut bag: Vec<&'static str> = words(class, head)
        .iter()
        .chain(words(class, tail))
        .copied()
        .collect();
    if bag.is_empty() {
        bag.extend_from_slice(words(class, FALLBACK_KIND));
    }
    bag.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use civ_events::Domain;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const WARFARE_WORDS: [&str; 8] = [
        "Martial",
        "Bronzeclad",
        "Hardened",
        "Bannered",
        "Standards",
        "Spears",
        "Legions",
        "Strongholds",
    ];

    fn strip_template(name: &str) -> Vec<String> {
        name.split_whitespace()
            .filter(|w| !matches!(*w, "The" | "of" | "Era" | "Wilds"))
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn test_single_signal_uses_only_its_lexicon() {
        let signals = [Signal::new(Domain::Warfare, 2.0)];
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let name = build_name(&mut rng, &signals, None);
            for word in strip_template(&name) {
                assert!(
                    WARFARE_WORDS.contains(&word.as_str()),
                    "{} in {}",
                    word,
                    name
                );
            }
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let signals = [
            Signal::new(Domain::Survival, 0.5),
            Signal::new(Domain::Expression, 1.2),
            Signal::new(SignalKind::Unity, 1.0),
        ];
        let mut rng1 = SmallRng::seed_from_u64(12345);
        let mut rng2 = SmallRng::seed_from_u64(12345);

        let names1: Vec<String> = (0..20)
            .map(|_| build_name(&mut rng1, &signals, Some("River")))
            .collect();
        let names2: Vec<String> = (0..20)
            .map(|_| build_name(&mut rng2, &signals, Some("River")))
            .collect();

        assert_eq!(names1, names2);
    }

    #[test]
    fn test_draw_order_for_seed() {
        // Template, adjective, noun, concept, then the biome coin
        let signals = [
            Signal::new(Domain::Survival, 0.5),
            Signal::new(Domain::Expression, 1.2),
            Signal::new(SignalKind::Unity, 1.0),
        ];
        let mut rng = SmallRng::seed_from_u64(12345);
        let names: Vec<String> = (0..5)
            .map(|_| build_name(&mut rng, &signals, Some("River")))
            .collect();

        assert_eq!(
            names,
            vec![
                "The Golden River Theater",
                "River Concord of Concord",
                "Era of Muse",
                "The Harmonic Constellations",
                "The Radiant Unity",
            ]
        );
    }

    #[test]
    fn test_head_and_tail_ranking() {
        let signals = [
            Signal::new(Domain::Survival, 0.5),
            Signal::new(Domain::Expression, 1.2),
            Signal::new(SignalKind::Unity, 1.0),
        ];
        assert_eq!(
            head_and_tail(&signals),
            (SignalKind::Expression, SignalKind::Unity)
        );
    }

    #[test]
    fn test_head_and_tail_fallbacks() {
        assert_eq!(head_and_tail(&[]), (SignalKind::Social, SignalKind::Social));
        assert_eq!(
            head_and_tail(&[Signal::new(Domain::Production, 0.3)]),
            (SignalKind::Production, SignalKind::Production)
        );
        // Zero weights are filtered before ranking
        assert_eq!(
            head_and_tail(&[Signal::new(Domain::Warfare, 0.0)]),
            (SignalKind::Social, SignalKind::Social)
        );
    }

    #[test]
    fn test_equal_weights_keep_order() {
        let signals = [
            Signal::new(Domain::Production, 1.0),
            Signal::new(SignalKind::Unity, 1.0),
        ];
        assert_eq!(
            head_and_tail(&signals),
            (SignalKind::Production, SignalKind::Unity)
        );
    }

    #[test]
    fn test_biome_placeholder() {
        let signals = [Signal::new(Domain::Exploration, 1.0)];
        let mut saw_wilds = false;
        let mut saw_river = false;

        for seed in 0..300 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let name = build_name(&mut rng, &signals, None);
            assert!(!name.contains('{'), "unfilled placeholder in {}", name);
            saw_wilds |= name.starts_with("Wilds ");

            let mut rng = SmallRng::seed_from_u64(seed);
            let name = build_name(&mut rng, &signals, Some("River"));
            assert!(!name.contains("Wilds"));
            saw_river |= name.contains("River");
        }

        assert!(saw_wilds);
        assert!(saw_river);
    }

    #[test]
    fn test_empty_hint_counts_as_none() {
        let signals = [Signal::new(Domain::Social, 1.0)];
        let mut rng1 = SmallRng::seed_from_u64(3);
        let mut rng2 = SmallRng::seed_from_u64(3);

        assert_eq!(
            build_name(&mut rng1, &signals, Some("")),
            build_name(&mut rng2, &signals, None)
        );
    }
}
