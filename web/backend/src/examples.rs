use serde::{Deserialize, Serialize};

/// Canned review the UI's example buttons draw from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleReview {
    pub id: String,
    pub title: String,
    pub text: String,
}

pub fn builtin_examples() -> Vec<ExampleReview> {
    vec![
        ExampleReview {
            id: "glowing".to_string(),
            title: "Glowing review".to_string(),
            text: "An absolutely brilliant film! The performances were stunning, \
                   the pacing never dragged, and the ending left me in tears. \
                   Easily one of the best movies I have seen in years. 10/10."
                .to_string(),
        },
        ExampleReview {
            id: "scathing".to_string(),
            title: "Scathing review".to_string(),
            text: "Terrible from the first scene.<br /><br />The plot made no sense, \
                   the dialogue was wooden, and I kept checking my watch. Boring, \
                   predictable, and a complete waste of two hours."
                .to_string(),
        },
        ExampleReview {
            id: "mixed".to_string(),
            title: "Mixed review".to_string(),
            text: "The first half is great fun with some genuinely clever twists, \
                   but the second half collapses into cliches. Worth a watch on a \
                   rainy afternoon, nothing more."
                .to_string(),
        },
        ExampleReview {
            id: "oneliner".to_string(),
            title: "One-liner".to_string(),
            text: "Brilliant. Just brilliant.".to_string(),
        },
    ]
}
