//! Built-in advice and tone text

use super::types::PalaceAdvice;
use crate::chart::Palace;
use std::collections::BTreeMap;

const ADVICE: [(Palace, [&str; 2], [&str; 2], [&str; 1]); 12] = [
    (
        Palace::Life,
        ["Lean on each other's strengths in shared decisions", "Let the stronger temperament lead in crises"],
        ["Agree on boundaries before committing to joint plans", "Expect friction in self-image; avoid scoring points"],
        ["Take time to learn each other's pace"],
    ),
    (
        Palace::Siblings,
        ["Bring each other into your circle of peers", "Share practical help freely"],
        ["Keep family and peer disputes out of the relationship", "Avoid lending or borrowing without terms"],
        ["Peer relations are steady; keep them light"],
    ),
    (
        Palace::Spouse,
        ["Invest in shared rituals and long-term plans", "Say the appreciation out loud"],
        ["Set clear expectations about commitment early", "Cool off before discussing sore points"],
        ["Build trust through small consistent gestures"],
    ),
    (
        Palace::Children,
        ["Collaborate on creative projects or parenting", "Play together; it renews the bond"],
        ["Align on parenting and teaching styles", "Do not project ambitions onto the next generation"],
        ["Creative plans move at an ordinary pace"],
    ),
    (
        Palace::Wealth,
        ["Pool resources on well-scoped ventures", "One partner's instincts can grow the other's income"],
        ["Keep finances separate until habits are aligned", "Write down any money arrangement"],
        ["Review joint spending periodically"],
    ),
    (
        Palace::Health,
        ["Encourage each other's routines and rest", "Shared exercise suits this pairing"],
        ["Watch for stress passing between you", "Give each other recovery space"],
        ["Keep an eye on energy levels together"],
    ),
    (
        Palace::Travel,
        ["Travel and relocate together; outside ventures go well", "Represent each other in public"],
        ["Plan trips carefully and keep contingency time", "Do not let outside pressures spill into the home"],
        ["Outside affairs are manageable with planning"],
    ),
    (
        Palace::Friends,
        ["Merge social networks; mutual friends help", "Host together"],
        ["Keep third parties out of private matters", "Check how each other's friends are treated"],
        ["Social life is neither a strength nor a strain"],
    ),
    (
        Palace::Career,
        ["Partner on professional projects with clear roles", "Promote each other's work"],
        ["Avoid working under each other", "Separate workplace conflicts from the relationship"],
        ["Support careers without entangling them"],
    ),
    (
        Palace::Property,
        ["Buying or building a home together is favored", "Shared household projects go well"],
        ["Clarify ownership before buying together", "Divide household responsibilities explicitly"],
        ["Home matters are stable; keep agreements explicit"],
    ),
    (
        Palace::Fortune,
        ["Cultivate shared hobbies and inner peace", "Spiritual or reflective practice together helps"],
        ["Respect different ways of unwinding", "Do not take each other's moods personally"],
        ["Leave room for individual interests"],
    ),
    (
        Palace::Parents,
        ["Families are likely to welcome the pairing", "Elders and mentors can back you both"],
        ["Handle family expectations with patience", "Keep elders' opinions from deciding for you"],
        ["Family relations need ordinary care"],
    ),
];

const TONES: [(&str, &str); 6] = [
    ("Resonant", "Deep resonance, each lifts the other"),
    ("Strong", "Strong affinity with plenty of mutual support"),
    ("Harmonious", "Harmonious and easy to cooperate"),
    ("Neutral", "Neither helping nor hindering; results depend on effort"),
    ("Tense", "Some tension; needs patience and clear communication"),
    ("Clashing", "Prone to clashes; handle this area with care"),
];

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|s| s.to_string()).collect()
}

pub fn default_advice() -> Vec<PalaceAdvice> {
    ADVICE
        .iter()
        .map(|(palace, favorable, adverse, neutral)| PalaceAdvice {
            palace: *palace,
            favorable: owned(favorable),
            adverse: owned(adverse),
            neutral: owned(neutral),
        })
        .collect()
}

pub fn default_tones() -> BTreeMap<String, String> {
    TONES
        .iter()
        .map(|(bucket, tone)| (bucket.to_string(), tone.to_string()))
        .collect()
}
