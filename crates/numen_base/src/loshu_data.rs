//! Fixed tables for the Lo Shu grid: layout, plane and arrow meanings, and
//! the per-digit remedy table.

use serde::Serialize;

/// Traditional Lo Shu layout, row-major.
pub const LO_SHU_LAYOUT: [[u32; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// Grid position `(row, col)` for digits 1-9 (index 0 = digit 1).
pub const LO_SHU_POSITIONS: [(usize, usize); 9] = [
    (2, 1), // 1
    (0, 2), // 2
    (1, 0), // 3
    (0, 0), // 4
    (1, 1), // 5
    (2, 2), // 6
    (1, 2), // 7
    (2, 0), // 8
    (0, 1), // 9
];

/// Plane meanings, indexed `[plane][strength]` in `ALL_PLANES` /
/// `PlaneStrength` order (empty, weak, balanced, strong, dominant).
pub(crate) const PLANE_MEANINGS: [[&str; 5]; 6] = [
    [
        "Empty mental plane - difficulties in abstract thinking",
        "Weak mental plane - limited concentration",
        "Balanced mental plane - clear thinking",
        "Strong mental plane - excellent intellectual abilities",
        "Dominant mental plane - analytical genius, risk of emotional detachment",
    ],
    [
        "Empty emotional plane - difficulties expressing feelings",
        "Weak emotional plane - reduced sensitivity",
        "Balanced emotional plane - healthy empathy",
        "Strong emotional plane - high intuition and sensitivity",
        "Dominant emotional plane - intense emotions, possibly overwhelming",
    ],
    [
        "Empty practical plane - difficulties in organization",
        "Weak practical plane - tendency to daydream",
        "Balanced practical plane - good daily organization",
        "Strong practical plane - excellent manifestation abilities",
        "Dominant practical plane - materialistic, risk of spiritual neglect",
    ],
    [
        "Empty thought plane - difficulties in long-term planning",
        "Weak thought plane - scattered ideas",
        "Balanced thought plane - good analytical capacity",
        "Strong thought plane - visionary and strategist",
        "Dominant thought plane - overthinking, analysis paralysis",
    ],
    [
        "Empty will plane - lack of determination",
        "Weak will plane - easily influenced",
        "Balanced will plane - healthy determination",
        "Strong will plane - natural leader",
        "Dominant will plane - stubbornness, possibly authoritarian",
    ],
    [
        "Empty action plane - difficulties completing projects",
        "Weak action plane - procrastination",
        "Balanced action plane - efficient execution",
        "Strong action plane - exceptional achiever",
        "Dominant action plane - workaholic, risk of burnout",
    ],
];

pub(crate) const DETERMINATION_MEANING: &str =
    "Arrow of Determination (1-5-9) - Strong perseverance and ability to overcome obstacles";
pub(crate) const HESITATION_MEANING: &str =
    "Arrow of Hesitation - Tendency to give up when things get difficult";
pub(crate) const SPIRITUALITY_MEANING: &str =
    "Arrow of Spirituality (3-5-7) - Deep connection with inner self and wisdom";
pub(crate) const FRUSTRATION_MEANING: &str =
    "Arrow of Frustration - Tendency to feel overwhelmed and lacking meaning";
pub(crate) const PLANNER_MEANING: &str =
    "Arrow of the Planner (1-2-3) - Excellent at organization and planning";
pub(crate) const SUCCESS_MEANING: &str =
    "Arrow of Success (4-5-6) - Great potential for achievements and abundance";
pub(crate) const DISAPPOINTMENT_MEANING: &str =
    "Arrow of Disappointment - Tendency to have unrealistic expectations";
pub(crate) const ACTIVITY_MEANING: &str =
    "Arrow of Activity (7-8-9) - Strong physical and mental energy";
pub(crate) const EMOTIONAL_BALANCE_MEANING: &str =
    "Arrow of Emotional Balance (2-5-8) - Emotional stability and intuition";

/// Suggested remedy for a digit missing from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remedy {
    pub digit: u32,
    /// Hex colour codes.
    pub colors: &'static [&'static str],
    pub gemstones: &'static [&'static str],
    pub mantras: &'static [&'static str],
    pub days: &'static [&'static str],
    pub element: &'static str,
    pub direction: &'static str,
    pub description: &'static str,
}

/// Remedy table for digits 1-9 (index 0 = digit 1).
pub static REMEDIES: [Remedy; 9] = [
    Remedy {
        digit: 1,
        colors: &["#FF0000", "#FFCC00"],
        gemstones: &["Ruby", "Garnet"],
        mantras: &["Om Hreem Surya Namaha"],
        days: &["Sunday"],
        element: "Fire",
        direction: "East",
        description: "For missing number 1: Wear red or gold, recommended stones are ruby and garnet.",
    },
    Remedy {
        digit: 2,
        colors: &["#FFFFFF", "#F5F5DC"],
        gemstones: &["Pearl", "Moonstone"],
        mantras: &["Om Chandraya Namaha"],
        days: &["Monday"],
        element: "Water",
        direction: "North-West",
        description: "For missing number 2: Wear white or cream, recommended stones are pearl and moonstone.",
    },
    Remedy {
        digit: 3,
        colors: &["#FFFF00", "#FFA500"],
        gemstones: &["Citrine", "Yellow Topaz"],
        mantras: &["Om Brihaspate Namaha"],
        days: &["Thursday"],
        element: "Fire",
        direction: "North-East",
        description: "For missing number 3: Wear yellow or orange, recommended stones are citrine and yellow topaz.",
    },
    Remedy {
        digit: 4,
        colors: &["#808080", "#0000FF"],
        gemstones: &["Hessonite", "Blue Sapphire"],
        mantras: &["Om Rahave Namaha"],
        days: &["Saturday"],
        element: "Air",
        direction: "South-West",
        description: "For missing number 4: Wear grey or blue, recommended stones are hessonite and blue sapphire.",
    },
    Remedy {
        digit: 5,
        colors: &["#008000", "#90EE90"],
        gemstones: &["Emerald", "Peridot"],
        mantras: &["Om Budhaya Namaha"],
        days: &["Wednesday"],
        element: "Earth",
        direction: "North",
        description: "For missing number 5: Wear green, recommended stones are emerald and peridot.",
    },
    Remedy {
        digit: 6,
        colors: &["#FFC0CB", "#F0E68C"],
        gemstones: &["Diamond", "White Opal"],
        mantras: &["Om Shukraya Namaha"],
        days: &["Friday"],
        element: "Water",
        direction: "South-East",
        description: "For missing number 6: Wear pink or pastel shades, recommended stones are diamond and white opal.",
    },
    Remedy {
        digit: 7,
        colors: &["#808080", "#F5F5F5"],
        gemstones: &["Cat's Eye", "Tourmaline"],
        mantras: &["Om Ketave Namaha"],
        days: &["Tuesday"],
        element: "Water",
        direction: "South",
        description: "For missing number 7: Wear grey or off-white, recommended stones are cat's eye and tourmaline.",
    },
    Remedy {
        digit: 8,
        colors: &["#000080", "#000000"],
        gemstones: &["Blue Sapphire", "Amethyst"],
        mantras: &["Om Shanicharaya Namaha"],
        days: &["Saturday"],
        element: "Earth",
        direction: "West",
        description: "For missing number 8: Wear dark blue or black, recommended stones are blue sapphire and amethyst.",
    },
    Remedy {
        digit: 9,
        colors: &["#FF0000", "#8B0000"],
        gemstones: &["Red Coral", "Ruby"],
        mantras: &["Om Mangalaya Namaha"],
        days: &["Tuesday"],
        element: "Fire",
        direction: "South",
        description: "For missing number 9: Wear red, recommended stones are red coral and ruby.",
    },
];

/// Title and energy keyword for each digit's grid cell (index 0 = digit 1).
pub const DIGIT_MEANINGS: [(&str, &str); 9] = [
    ("Communication", "Verbal and expressive energy"),
    ("Intuition", "Intuitive and receptive energy"),
    ("Creativity", "Creative and expressive energy"),
    ("Stability", "Stable and structured energy"),
    ("Balance", "Central and balancing energy"),
    ("Responsibility", "Caring and protective energy"),
    ("Spirituality", "Contemplative and analytical energy"),
    ("Abundance", "Material and manifesting energy"),
    ("Compassion", "Compassionate and universal energy"),
];

/// Remedy for a digit 1-9; `None` outside that range.
pub fn remedy(digit: u32) -> Option<&'static Remedy> {
    match digit {
        1..=9 => REMEDIES.get((digit - 1) as usize),
        _ => None,
    }
}
