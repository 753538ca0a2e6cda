//! Sign-pair harmony lookup and the banded commentary lists.

use crate::ephemeris::types::ZodiacSign;
use crate::synastry::types::ScoreBand;
use crate::western::Element;

pub const SAME_ELEMENT: u8 = 90;
pub const COMPLEMENTARY_ELEMENTS: u8 = 75;
pub const OPPOSING_ELEMENTS: u8 = 50;

pub fn element_harmony(a: Element, b: Element) -> u8 {
    if a == b {
        SAME_ELEMENT
    } else if a.is_complementary(b) {
        COMPLEMENTARY_ELEMENTS
    } else {
        OPPOSING_ELEMENTS
    }
}

/// Harmony (0-100) between two signs, keyed on their elements. Symmetric.
pub fn sign_harmony(a: ZodiacSign, b: ZodiacSign) -> u8 {
    element_harmony(Element::of(a), Element::of(b))
}

const EXCELLENT_STRENGTHS: &[&str] = &[
    "Natural chemistry and a shared outlook",
    "Deep emotional understanding",
    "Energies that reinforce each other",
];
const EXCELLENT_CHALLENGES: &[&str] = &["Comfort can turn into taking each other for granted"];

const GOOD_STRENGTHS: &[&str] = &[
    "Balanced give and take",
    "Complementary perspectives",
];
const GOOD_CHALLENGES: &[&str] = &[
    "Different paces in showing affection",
    "Occasional friction over priorities",
];

const CHALLENGING_STRENGTHS: &[&str] = &["Plenty of room to learn from each other"];
const CHALLENGING_CHALLENGES: &[&str] = &[
    "Contrasting emotional needs",
    "Communication takes deliberate effort",
    "Clashing approaches to conflict",
];

/// Fixed strengths and challenges for a band, in display order.
pub fn commentary(band: ScoreBand) -> (&'static [&'static str], &'static [&'static str]) {
    match band {
        ScoreBand::Excellent => (EXCELLENT_STRENGTHS, EXCELLENT_CHALLENGES),
        ScoreBand::Good => (GOOD_STRENGTHS, GOOD_CHALLENGES),
        ScoreBand::Challenging => (CHALLENGING_STRENGTHS, CHALLENGING_CHALLENGES),
    }
}
