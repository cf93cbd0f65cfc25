//! Age Lexicon
//!
//! Four adjectives and four nouns per signal kind. Concepts reuse the nouns.

use civ_events::SignalKind;

/// Category used when the word bag would otherwise be empty
pub const FALLBACK_KIND: SignalKind = SignalKind::Social;

/// Word class a placeholder draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Adjective,
    Noun,
}

const SURVIVAL_ADJ: &[&str] = &["Fertile", "Resilient", "Provisioned", "Green"];
const PRODUCTION_ADJ: &[&str] = &["Forged", "Masoned", "Industrious", "Artisan"];
const WARFARE_ADJ: &[&str] = &["Martial", "Bronzeclad", "Hardened", "Bannered"];
const EXPLORATION_ADJ: &[&str] = &["Wandering", "Seafaring", "Expansive", "Astral"];
const SOCIAL_ADJ: &[&str] = &["Ordered", "Civic", "Codified", "Cohesive"];
const EXPRESSION_ADJ: &[&str] = &["Radiant", "Golden", "Sacred", "Harmonic"];
const CRISIS_ADJ: &[&str] = &["Fractured", "Tempest", "Ashen", "Trial"];
const UNITY_ADJ: &[&str] = &["United", "Concord", "Commonweal", "Harmonic"];

const SURVIVAL_NOUNS: &[&str] = &["Harvest", "Granaries", "Rivers", "Plenty"];
const PRODUCTION_NOUNS: &[&str] = &["Stoneworks", "Forges", "Workshops", "Engines"];
const WARFARE_NOUNS: &[&str] = &["Standards", "Spears", "Legions", "Strongholds"];
const EXPLORATION_NOUNS: &[&str] = &["Ways", "Currents", "Horizons", "Maps"];
const SOCIAL_NOUNS: &[&str] = &["Edicts", "Assemblies", "Laws", "Provinces"];
const EXPRESSION_NOUNS: &[&str] = &["Rites", "Muse", "Theater", "Constellations"];
const CRISIS_NOUNS: &[&str] = &["Trials", "Storms", "Woe", "Upheaval"];
const UNITY_NOUNS: &[&str] = &["Unity", "Concord", "Accord", "Commons"];

/// Lexicon entries for a signal kind.
pub fn words(class: WordClass, kind: SignalKind) -> &'static [&'static str] {
    match class {
        WordClass::Adjective => match kind {
            SignalKind::Survival => SURVIVAL_ADJ,
            SignalKind::Production => PRODUCTION_ADJ,
            SignalKind::Warfare => WARFARE_ADJ,
            SignalKind::Exploration => EXPLORATION_ADJ,
            SignalKind::Social => SOCIAL_ADJ,
            SignalKind::Expression => EXPRESSION_ADJ,
            SignalKind::Crisis => CRISIS_ADJ,
            SignalKind::Unity => UNITY_ADJ,
        },
        WordClass::Noun => match kind {
            SignalKind::Survival => SURVIVAL_NOUNS,
            SignalKind::Production => PRODUCTION_NOUNS,
            SignalKind::Warfare => WARFARE_NOUNS,
            SignalKind::Exploration => EXPLORATION_NOUNS,
            SignalKind::Social => SOCIAL_NOUNS,
            SignalKind::Expression => EXPRESSION_NOUNS,
            SignalKind::Crisis => CRISIS_NOUNS,
            SignalKind::Unity => UNITY_NOUNS,
        },
    }
}
