// SPDX-License-Identifier: MPL-2.0
//! Built-in sample content.
//!
//! There is no recognition backend and no plant database: every scan resolves
//! to [`BLUE_SAGE`], and the home and garden screens are populated from the
//! static tables below. Everything here is `'static` and never mutated.
//!
//! Screen chrome (section titles, button labels) is translated through
//! Fluent. The record text itself is literal sample content.

/// A single row in the "Details" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRow {
    /// Fluent key of the row label.
    pub label_key: &'static str,
    pub value: &'static str,
    pub kind: DetailKind,
}

/// Icon family for a [`DetailRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Temperature,
    Sunlight,
    Water,
    Pests,
    Repotting,
    Fertilizing,
}

/// Identifies an entry of [`PlantRecord::problems`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemId {
    WiltingLeaves,
    Overcrowding,
}

/// A common problem with its explanation and care advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub id: ProblemId,
    pub title: &'static str,
    pub about: &'static str,
    pub how_to_care: &'static str,
}

/// A frequently asked question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Full care sheet for one plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantRecord {
    pub common_name: &'static str,
    pub category: &'static str,
    pub scientific_name: &'static str,
    pub care_tags: &'static [&'static str],
    pub health_summary: &'static str,
    pub about: &'static str,
    pub details: &'static [DetailRow],
    pub problems: &'static [Problem],
    pub faqs: &'static [Faq],
    pub fun_facts: &'static [&'static str],
}

impl PlantRecord {
    /// Looks up a problem by id.
    #[must_use]
    pub fn problem(&self, id: ProblemId) -> Option<&Problem> {
        self.problems.iter().find(|problem| problem.id == id)
    }
}

const EVENING_FRAGRANCE: &str = "Eranthemum roseum flowers don't have much scent during the day, \
but they are very fragrant in the evening";

/// The record every scan resolves to.
pub static BLUE_SAGE: PlantRecord = PlantRecord {
    common_name: "Blue Sage",
    category: "Shrub",
    scientific_name: "Eranthemum roseoum",
    care_tags: &["Moderate to care", "Medium", "Flowering"],
    health_summary: "Your plant may not be healthy!",
    about: "Eranthemum roseum, commonly known as the rose eranthemum, is a tropical \
evergreen shrub with glossy green leaves and clusters of small pink flowers. It is native \
to India and Southeast Asia.",
    details: &[
        DetailRow {
            label_key: "detail-row-temperature",
            value: "25-30 degrees",
            kind: DetailKind::Temperature,
        },
        DetailRow {
            label_key: "detail-row-sunlight",
            value: "Full sun",
            kind: DetailKind::Sunlight,
        },
        DetailRow {
            label_key: "detail-row-water",
            value: "every 4-7 days",
            kind: DetailKind::Water,
        },
        DetailRow {
            label_key: "detail-row-pests",
            value: "Syprus",
            kind: DetailKind::Pests,
        },
        DetailRow {
            label_key: "detail-row-repotting",
            value: "every 1-2 years",
            kind: DetailKind::Repotting,
        },
        DetailRow {
            label_key: "detail-row-fertilizing",
            value: "every 1-2 months",
            kind: DetailKind::Fertilizing,
        },
    ],
    problems: &[
        Problem {
            id: ProblemId::WiltingLeaves,
            title: "Wilting Leaves",
            about: "Wilting leaves usually signify underwatering, root damage, or excessive \
heat. When plants lack water, they lose turgor pressure, causing them to wilt.",
            how_to_care: "Water the plant thoroughly and consistently, ensuring water reaches \
the root zone. Check soil moisture regularly and adjust watering frequency as needed. \
Provide shade during hot weather to prevent wilting from heat stress.",
        },
        Problem {
            id: ProblemId::Overcrowding,
            title: "Overcrowding",
            about: "Overcrowding occurs when plants are too close together, competing for \
space, nutrients, light, and water. This can lead to stunted growth, poor air circulation, \
increased disease risk, and reduced flowering or fruiting.",
            how_to_care: "Thin out crowded plants by removing excess seedlings or dividing \
mature plants. Ensure proper spacing between plants according to their mature size. Repot \
container plants into larger pots when roots become root-bound. Prune regularly to maintain \
adequate air circulation and prevent competition for resources.",
        },
    ],
    faqs: &[
        Faq {
            question: "How often should you water Eranthemum roseum?",
            answer: "Eranthemum roseum should be watered when the top inch of soil feels dry \
to the touch. Generally, this means watering every 4-7 days during the growing season, \
depending on temperature and humidity. Reduce watering frequency in winter when the plant is \
dormant. Always ensure proper drainage to prevent root rot.",
        },
        Faq {
            question: "What is the best sunlight condition for Eranthemum roseum?",
            answer: "Eranthemum roseum thrives in full sun to partial shade. It prefers bright, \
indirect light for at least 4-6 hours daily. In very hot climates, provide some afternoon \
shade to prevent leaf scorching. The plant will produce more flowers when it receives \
adequate sunlight.",
        },
        Faq {
            question: "When should I repot my Eranthemum roseum?",
            answer: "Repot Eranthemum roseum every 1-2 years, preferably in spring before the \
growing season begins. Signs that repotting is needed include roots growing out of drainage \
holes, slowed growth, or the plant becoming top-heavy. Choose a pot that is 1-2 inches larger \
in diameter than the current one.",
        },
    ],
    fun_facts: &[EVENING_FRAGRANCE, EVENING_FRAGRANCE],
};

// =============================================================================
// Home content
// =============================================================================

/// What a home feature card does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Opens the camera.
    Identify,
    /// No behaviour yet.
    Inert,
}

/// A large card in the home feature row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title_key: &'static str,
    pub subtitle_key: &'static str,
    pub action: CardAction,
}

pub static FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title_key: "home-card-identify",
        subtitle_key: "home-card-subtitle",
        action: CardAction::Identify,
    },
    FeatureCard {
        title_key: "home-card-diagnose",
        subtitle_key: "home-card-subtitle",
        action: CardAction::Inert,
    },
    FeatureCard {
        title_key: "home-card-garden",
        subtitle_key: "home-card-subtitle",
        action: CardAction::Inert,
    },
];

/// Fluent keys of the "Care Tools" row, in display order.
pub static CARE_TOOLS: [&str; 3] = [
    "care-tool-reminder",
    "care-tool-light-meter",
    "care-tool-water-calculator",
];

/// Empty state shown in a garden sub-tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title_key: &'static str,
    pub hint_key: &'static str,
    pub action_key: &'static str,
}

pub static NO_PLANTS: EmptyState = EmptyState {
    title_key: "garden-no-plants",
    hint_key: "garden-no-plants-hint",
    action_key: "garden-add-plant",
};

pub static NO_REMINDERS: EmptyState = EmptyState {
    title_key: "garden-no-reminders",
    hint_key: "garden-no-reminders-hint",
    action_key: "garden-add-reminder",
};

// =============================================================================
// Onboarding content
// =============================================================================

/// One onboarding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingPage {
    /// Headline with optional subtitle (Fluent keys).
    Headline {
        title_key: &'static str,
        subtitle_key: Option<&'static str>,
    },
    /// Full-page illustration only.
    Illustration,
}

pub static ONBOARDING_PAGES: [OnboardingPage; 6] = [
    OnboardingPage::Headline {
        title_key: "onboarding-identify-title",
        subtitle_key: None,
    },
    OnboardingPage::Illustration,
    OnboardingPage::Illustration,
    OnboardingPage::Illustration,
    OnboardingPage::Headline {
        title_key: "onboarding-garden-title",
        subtitle_key: None,
    },
    OnboardingPage::Headline {
        title_key: "onboarding-welcome-title",
        subtitle_key: Some("onboarding-welcome-subtitle"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_record_has_all_sections() {
        assert_eq!(BLUE_SAGE.common_name, "Blue Sage");
        assert_eq!(BLUE_SAGE.care_tags.len(), 3);
        assert_eq!(BLUE_SAGE.details.len(), 6);
        assert_eq!(BLUE_SAGE.problems.len(), 2);
        assert_eq!(BLUE_SAGE.faqs.len(), 3);
        assert_eq!(BLUE_SAGE.fun_facts.len(), 2);
    }

    #[test]
    fn problems_are_addressable_by_id() {
        let wilting = BLUE_SAGE.problem(ProblemId::WiltingLeaves);
        assert_eq!(wilting.map(|p| p.title), Some("Wilting Leaves"));
        let crowding = BLUE_SAGE.problem(ProblemId::Overcrowding);
        assert!(crowding.is_some_and(|p| p.how_to_care.starts_with("Thin out")));
    }

    #[test]
    fn detail_rows_cover_every_kind_once() {
        let kinds: Vec<_> = BLUE_SAGE.details.iter().map(|row| row.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DetailKind::Temperature,
                DetailKind::Sunlight,
                DetailKind::Water,
                DetailKind::Pests,
                DetailKind::Repotting,
                DetailKind::Fertilizing,
            ]
        );
    }

    #[test]
    fn only_identify_card_is_active() {
        let active: Vec<_> = FEATURE_CARDS
            .iter()
            .filter(|card| card.action == CardAction::Identify)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title_key, "home-card-identify");
    }

    #[test]
    fn onboarding_ends_on_welcome_page() {
        assert!(matches!(
            ONBOARDING_PAGES.last(),
            Some(OnboardingPage::Headline {
                subtitle_key: Some(_),
                ..
            })
        ));
    }
}
