//! Fixed English text tables for the adapters, keyed by vibration digit.
//!
//! Single-digit tables are indexed by `digit - 1`. Lookups of values outside
//! 1-9 fall back to the entry for 1.

use numen_base::reduce;

/// Index for a reduced vibration; 0 for anything outside 1-9.
pub(crate) fn slot(n: u32) -> usize {
    match reduce(n, false) {
        d @ 1..=9 => (d - 1) as usize,
        _ => 0,
    }
}

pub(crate) const ADDRESS_MEANINGS: [&str; 9] = [
    "Address of independence and initiative. Ideal for new beginnings and leadership.",
    "Address of cooperation and harmony. Favors partnerships and relationships.",
    "Creative and expressive address. Ideal for artistic activities and communication.",
    "Address of stability and building. Favors work and organization.",
    "Dynamic and versatile address. Favors changes and adventure.",
    "Address of responsibility and family harmony. Ideal for family.",
    "Address of introspection and wisdom. Ideal for study and reflection.",
    "Address of material achievement. Favors financial success and business.",
    "Address of compassion and service. Ideal for humanitarian activities.",
];

/// Master addresses keep their own text.
pub(crate) fn address_meaning(n: u32) -> &'static str {
    match n {
        11 => "Master address of spiritual inspiration. Ideal for spiritual activities.",
        22 => "Master address of large-scale building. Ideal for large projects.",
        33 => "Master address of teaching and healing. Ideal for service activities.",
        _ => ADDRESS_MEANINGS[slot(n)],
    }
}

pub(crate) const ADDRESS_AFFINITY: [&str; 9] = [
    "Compatible with independent and ambitious people.",
    "Compatible with sensitive and cooperative people.",
    "Compatible with creative and expressive people.",
    "Compatible with stable and organized people.",
    "Compatible with dynamic and adventurous people.",
    "Compatible with responsible and caring people.",
    "Compatible with analytical and spiritual people.",
    "Compatible with ambitious and success-oriented people.",
    "Compatible with compassionate and generous people.",
];

pub(crate) fn business_address_meaning(n: u32) -> &'static str {
    if reduce(n, false) == 8 {
        "Material success energy. Ideal for business and financial achievements."
    } else {
        "Leadership and innovation energy. Ideal for startups and new businesses."
    }
}

pub(crate) const COMMUNICATION_STYLES: [&str; 9] = [
    "Direct and assertive communication. You prefer to lead conversations.",
    "Diplomatic and sensitive communication. You listen actively and cooperate.",
    "Creative and expressive communication. You use humor and creativity.",
    "Practical and organized communication. You prefer clarity and structure.",
    "Dynamic and versatile communication. You adapt style to situation.",
    "Empathetic and caring communication. You focus on relationships.",
    "Analytical and deep communication. You prefer intellectual conversations.",
    "Authoritative and efficient communication. You focus on results.",
    "Compassionate and understanding communication. You focus on common good.",
];

pub(crate) const PHONE_IMPACTS: [&str; 9] = [
    "Number that favors leadership and initiative in communication.",
    "Number that favors cooperation and harmony in relationships.",
    "Number that favors creativity and expression in communication.",
    "Number that favors stability and organization.",
    "Number that favors changes and adaptability.",
    "Number that favors responsibility and care for others.",
    "Number that favors introspection and wisdom.",
    "Number that favors material success and achievements.",
    "Number that favors compassion and service.",
];

pub(crate) fn phone_note(n: u32) -> &'static str {
    match reduce(n, false) {
        1 => "Excellent for leadership and initiative. Ideal for business.",
        8 => "Excellent for material success and achievements. Ideal for business.",
        _ => "Suitable number for general communication.",
    }
}

type Traits = (&'static [&'static str], &'static [&'static str]);

const COMMUNICATION_TRAITS: [Traits; 3] = [
    (
        &["Clarity", "Persuasion", "Leadership"],
        &["May be too direct", "Risk of dominance"],
    ),
    (
        &["Diplomacy", "Empathy", "Cooperation"],
        &["May be too passive", "Risk of indecision"],
    ),
    (
        &["Creativity", "Expressiveness", "Energy"],
        &["May be too expressive", "Risk of superficiality"],
    ),
];

const GENERIC_TRAITS: Traits = (&["Efficient communication"], &["No major challenges"]);

/// (strengths, challenges) by vibration; only 1-3 carry specific lists.
pub(crate) fn communication_traits(n: u32) -> Traits {
    match reduce(n, false) {
        d @ 1..=3 => COMMUNICATION_TRAITS[(d - 1) as usize],
        _ => GENERIC_TRAITS,
    }
}

pub(crate) const PLATE_ENERGIES: [&str; 9] = [
    "Leadership and independence energy. Car for pioneers.",
    "Cooperation and harmony energy. Car for partnerships.",
    "Creative and expressive energy. Car for adventure and joy.",
    "Stability and reliability energy. Practical and durable car.",
    "Dynamic and versatile energy. Car for changes and exploration.",
    "Responsibility and comfort energy. Car for family.",
    "Introspection and elegance energy. Car for reflection.",
    "Success and prestige energy. Car for achievements.",
    "Compassion and service energy. Car for helping others.",
];

pub(crate) const PLATE_TRAITS: [[&str; 3]; 9] = [
    ["Fast", "Dynamic", "Independent"],
    ["Comfortable", "Harmonious", "Diplomatic"],
    ["Expressive", "Creative", "Joyful"],
    ["Reliable", "Stable", "Practical"],
    ["Versatile", "Adaptable", "Adventurous"],
    ["Safe", "Comfortable", "Family-oriented"],
    ["Elegant", "Refined", "Mysterious"],
    ["Prestigious", "Powerful", "Success"],
    ["Generous", "Service", "Humanitarian"],
];

pub(crate) fn plate_note(n: u32) -> &'static str {
    match reduce(n, false) {
        1 | 8 => "Excellent for leadership and success. Ideal for business.",
        4 | 6 => "Excellent for family and daily use. Reliable and safe.",
        _ => "Suitable for general use. Consider compatibility with Life Path.",
    }
}
