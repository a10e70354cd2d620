//! Static excuse template bank and random picker.
//!
//! The bank is built once at startup and shared read-only through `AppState`.
//! Lookups never fail: an unknown category falls back to "general", an
//! unknown tone falls back to the first tone of the resolved category.

use rand::Rng;

/// Candidates at or above this many characters don't get a context
/// annotation appended.
const CONTEXT_ANNOTATION_LIMIT: usize = 120;

/// Template lines for a single tone.
struct ToneTemplates {
    name: &'static str,
    lines: &'static [&'static str],
}

/// Templates for a single category. Tone order is fixed; the first tone is
/// the default when the requested one is unrecognized.
struct CategoryTemplates {
    name: &'static str,
    tones: Vec<ToneTemplates>,
}

pub struct TemplateBank {
    categories: Vec<CategoryTemplates>,
}

impl TemplateBank {
    /// The built-in bank: four categories, three tones each, two lines per
    /// tone. The "general" category comes first and doubles as the fallback.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                CategoryTemplates {
                    name: "general",
                    tones: vec![
                        ToneTemplates {
                            name: "polite",
                            lines: &[
                                "I’m so sorry, I can’t chat right now — I need to focus on something urgent. Can we talk later?",
                                "I’d love to, but I’m actually running late and need to handle something. Thanks for understanding!",
                            ],
                        },
                        ToneTemplates {
                            name: "blunt",
                            lines: &[
                                "I’m just not up for talking now.",
                                "Not interested, thanks.",
                            ],
                        },
                        ToneTemplates {
                            name: "funny",
                            lines: &[
                                "I’d love to, but my introvert battery is at 2% — must recharge!",
                                "I have an appointment with my couch. Rain check?",
                            ],
                        },
                    ],
                },
                CategoryTemplates {
                    name: "social",
                    tones: vec![
                        ToneTemplates {
                            name: "polite",
                            lines: &[
                                "I’m feeling a bit overwhelmed in crowds today — can we catch up another time?",
                                "I’ve had a long day and need to step away, sorry!",
                            ],
                        },
                        ToneTemplates {
                            name: "blunt",
                            lines: &[
                                "Crowds drain me — I need to sit this one out.",
                                "Not feeling social right now.",
                            ],
                        },
                        ToneTemplates {
                            name: "funny",
                            lines: &[
                                "My social battery died — sending a rescue text later!",
                                "I’m performing a solo invisibility act right now.",
                            ],
                        },
                    ],
                },
                CategoryTemplates {
                    name: "work",
                    tones: vec![
                        ToneTemplates {
                            name: "polite",
                            lines: &[
                                "I have a deadline I must finish right now — sorry I can’t talk.",
                                "I’m in the middle of something work-related. Can we talk after I finish?",
                            ],
                        },
                        ToneTemplates {
                            name: "blunt",
                            lines: &[
                                "I need to focus on work, talk later.",
                                "Can’t chat — work in progress.",
                            ],
                        },
                        ToneTemplates {
                            name: "funny",
                            lines: &[
                                "If I stop working now my boss will notice — gotta go behave like a responsible adult.",
                                "My to-do list has me trapped. Rescue me later.",
                            ],
                        },
                    ],
                },
                CategoryTemplates {
                    name: "family",
                    tones: vec![
                        ToneTemplates {
                            name: "polite",
                            lines: &[
                                "I’m dealing with something personal right now — can we talk later?",
                                "I need a little quiet time, please understand.",
                            ],
                        },
                        ToneTemplates {
                            name: "blunt",
                            lines: &[
                                "I don’t want to discuss this now.",
                                "I need space.",
                            ],
                        },
                        ToneTemplates {
                            name: "funny",
                            lines: &[
                                "Currently practicing the ancient art of staying silent. Will resume later.",
                                "My 'avoid awkward convo' skill is at level expert today.",
                            ],
                        },
                    ],
                },
            ],
        }
    }

    fn category(&self, name: &str) -> &CategoryTemplates {
        self.categories
            .iter()
            .find(|c| c.name == name)
            // "general" is always the first builtin category
            .unwrap_or(&self.categories[0])
    }

    /// Candidate lines for a (category, tone) pair, after fallback
    /// resolution. Always non-empty.
    pub fn candidates(&self, category: &str, tone: &str) -> &[&'static str] {
        let cat = self.category(category);
        cat.tones
            .iter()
            .find(|t| t.name == tone)
            .unwrap_or(&cat.tones[0])
            .lines
    }
}

/// Pick a template-based excuse.
///
/// The context annotation is applied before length shaping, so a "short"
/// request cuts at the first period and can drop the annotation along with
/// everything after it. That quirk is intentional.
pub fn pick<R: Rng + ?Sized>(
    bank: &TemplateBank,
    rng: &mut R,
    category: &str,
    tone: &str,
    length: &str,
    context: &str,
) -> String {
    let choices = bank.candidates(category, tone);
    let mut excuse = choices[rng.gen_range(0..choices.len())].to_string();

    if !context.is_empty() && excuse.chars().count() < CONTEXT_ANNOTATION_LIMIT {
        excuse = format!("{} ({})", excuse, context);
    }

    match length {
        "short" => {
            let first_sentence = excuse.split('.').next().unwrap_or(&excuse);
            format!("{}.", first_sentence.trim())
        }
        "long" => {
            let second = choices[rng.gen_range(0..choices.len())];
            if second != excuse {
                format!("{} {}", excuse, second)
            } else {
                excuse
            }
        }
        _ => excuse,
    }
}
