//! Skill offer fixtures and the client-side search filter.
//!
//! The offer list is a fixed set of demo records; nothing is ever created,
//! updated, or deleted at runtime. Search is a plain case-insensitive
//! substring test over skill, description, and category.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOffer {
    pub id: &'static str,
    pub skill: &'static str,
    pub user: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const OFFERS: &[SkillOffer] = &[
    SkillOffer {
        id: "1",
        skill: "Python Tutoring",
        user: "Ali",
        description: "Learn Python fundamentals from scratch.",
        category: "Programming",
    },
    SkillOffer {
        id: "2",
        skill: "Guitar Lessons",
        user: "Fatima",
        description: "Acoustic and electric basics with chords and rhythm.",
        category: "Music",
    },
    SkillOffer {
        id: "3",
        skill: "Drawing Basics",
        user: "Ahmed",
        description: "Pencil drawing, shading, and composition for beginners.",
        category: "Art",
    },
    SkillOffer {
        id: "4",
        skill: "Yoga & Meditation",
        user: "Sara",
        description: "Breathing, stretching, and mindfulness practices.",
        category: "Wellness",
    },
];

/// Categories selectable on the create-post form.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("music", "Music"),
    ("language", "Language"),
    ("art", "Art"),
    ("programming", "Programming"),
    ("wellness", "Wellness"),
    ("photography", "Photography"),
    ("cooking", "Cooking"),
    ("sports", "Sports"),
    ("other", "Other"),
];

/// Filter `offers` by a free-text query.
///
/// Case-insensitive substring match against skill, description, or category.
/// An empty or whitespace-only query returns the full list. Order is
/// preserved; the filter is pure, so equal inputs always yield equal output.
pub fn filter_offers<'a>(offers: &'a [SkillOffer], query: &str) -> Vec<&'a SkillOffer> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return offers.iter().collect();
    }
    offers
        .iter()
        .filter(|offer| {
            offer.skill.to_lowercase().contains(&query)
                || offer.description.to_lowercase().contains(&query)
                || offer.category.to_lowercase().contains(&query)
        })
        .collect()
}
