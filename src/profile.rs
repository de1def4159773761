use crate::types::trait_type::DiscType;
use serde::Serialize;

/// Descriptive material shown alongside a primary type.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProfile {
    pub trait_type: DiscType,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub summary: &'static str,
    pub strengths: &'static [&'static str],
    pub development_areas: &'static [&'static str],
    pub color: &'static str,
}

static PROFILES: [TypeProfile; 4] = [
    TypeProfile {
        trait_type: DiscType::D,
        name: "Dominance",
        subtitle: "The challenging leader",
        summary: "Results-oriented and decisive. Moves quickly, takes on challenges and \
                  accepts risk in pursuit of goals.",
        strengths: &[
            "Strong leadership and drive",
            "Fast decision making",
            "Composure in a crisis",
            "Focus on outcomes",
        ],
        development_areas: &[
            "Listening to other views",
            "Attention to detail",
            "Patience with slower processes",
        ],
        color: "#e74c3c",
    },
    TypeProfile {
        trait_type: DiscType::I,
        name: "Influence",
        subtitle: "The inspiring communicator",
        summary: "Sociable and optimistic. Energised by people, persuasive and quick to \
                  generate ideas.",
        strengths: &[
            "Communication",
            "Creativity",
            "Optimism",
            "Persuasion",
        ],
        development_areas: &[
            "Sustained focus",
            "Planning and follow-through",
            "Objectivity under pressure",
        ],
        color: "#38a169",
    },
    TypeProfile {
        trait_type: DiscType::S,
        name: "Steadiness",
        subtitle: "The dependable supporter",
        summary: "Patient and cooperative. Values stability and harmony and is steady \
                  and reliable in a team.",
        strengths: &[
            "Cooperation",
            "Patience",
            "Reliability",
            "Consistency",
        ],
        development_areas: &[
            "Adapting to change",
            "Asserting own needs",
            "Making quick decisions",
        ],
        color: "#3182ce",
    },
    TypeProfile {
        trait_type: DiscType::C,
        name: "Conscientiousness",
        subtitle: "The careful analyst",
        summary: "Accurate and systematic. Values quality, follows procedure and \
                  analyses before acting.",
        strengths: &[
            "Accuracy",
            "Analytical thinking",
            "Systematic approach",
            "High standards",
        ],
        development_areas: &[
            "Flexibility",
            "Deciding with incomplete data",
            "Tempering criticism",
        ],
        color: "#805ad5",
    },
];

pub fn profile(trait_type: DiscType) -> &'static TypeProfile {
    match trait_type {
        DiscType::D => &PROFILES[0],
        DiscType::I => &PROFILES[1],
        DiscType::S => &PROFILES[2],
        DiscType::C => &PROFILES[3],
    }
}
