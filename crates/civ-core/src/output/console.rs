//! Human-readable console lines.

use civ_events::{AgeFamily, ChronicleEvent, Domain, TurnRecord};

/// One-line turn summary with one-decimal values.
///
/// `T03 [hunt, raid]: S=5.5 P=5.5 W=6.2 E=5.0 SO=4.8 X=5.0 | NI=2.1  [Event: Drought]`
pub fn format_turn_line(record: &TurnRecord) -> String {
    let values: Vec<String> = Domain::ALL
        .iter()
        .map(|&d| format!("{}={:.1}", d.abbreviation(), record.domains[d]))
        .collect();

    let mut line = format!(
        "T{:02} [{}, {}]: {} | NI={:.1}",
        record.turn,
        record.action1,
        record.action2,
        values.join(" "),
        record.ni
    );
    if let Some(event) = &record.event {
        line.push_str(&format!("  [Event: {}]", event));
    }
    line
}

/// Indented description of a chronicle event.
pub fn format_chronicle(event: &ChronicleEvent) -> String {
    match event {
        ChronicleEvent::EventStruck { name, .. } => format!("    ! {} strikes", name),
        ChronicleEvent::MinorPerk { domain, tier, .. } => {
            format!("    > minor perk unlocked in {} (+5 x{})", domain, tier)
        }
        ChronicleEvent::MajorBreakthrough { domain, tier, .. } => {
            format!("    >> MAJOR breakthrough in {} (tier {})", domain, tier)
        }
        ChronicleEvent::AgeBegan {
            name,
            domain,
            family: AgeFamily::Gate,
            threshold,
            ..
        } => format!("        [AGE] {}  (from {} >= {})", name, domain, threshold),
        ChronicleEvent::AgeBegan {
            name,
            domain,
            family: AgeFamily::Crossing,
            ..
        } => format!("        [AGE] {} (triggered by {})", name, domain),
    }
}
