//! Descriptor inference - rule-based classification of asset content
//!
//! Rules run in a fixed order. Each one sees the tokens emitted before it and
//! returns only what it adds, so a rule can be tested on its own. Tokens are
//! never re-sorted or removed here; deduplication happens at name synthesis.

use tracing::debug;

use crate::category::Category;
use crate::features::{ElementKind, FeatureCounts};

/// One descriptive word in a generated name
pub type Token = &'static str;

/// Style adjectives recognized in annotations, in emission order
pub const ADJECTIVES: [Token; 29] = [
    "bold",
    "simple",
    "classic",
    "minimal",
    "organic",
    "geometric",
    "rounded",
    "angular",
    "layered",
    "stacked",
    "centered",
    "outline",
    "filled",
    "thick",
    "thin",
    "wavy",
    "straight",
    "curved",
    "pointed",
    "soft",
    "sharp",
    "horizontal",
    "vertical",
    "diagonal",
    "scattered",
    "tight",
    "wide",
    "tall",
    "chunky",
];

/// Annotation keywords and the multiplicity they imply; first match wins
const MULTIPLICITY_KEYWORDS: [(&[&str], Token); 4] = [
    (&["double", "dual"], "double"),
    (&["triple", "three"], "triple"),
    (&["four", "quad"], "quad"),
    (&["cluster", "multi"], "cluster"),
];

/// Everything the rules may look at for one asset
#[derive(Debug, Clone)]
pub struct ClassificationInput<'a> {
    annotation: Option<String>,
    pub category: &'a Category,
    pub counts: &'a FeatureCounts,
}

impl<'a> ClassificationInput<'a> {
    pub fn new(annotation: Option<&str>, category: &'a Category, counts: &'a FeatureCounts) -> Self {
        Self {
            annotation: annotation.map(str::to_lowercase),
            category,
            counts,
        }
    }

    /// Substring test against the lowercased annotation. No annotation never matches.
    pub fn mentions(&self, word: &str) -> bool {
        self.annotation
            .as_deref()
            .is_some_and(|text| text.contains(word))
    }

    fn count(&self, kind: ElementKind) -> usize {
        self.counts.of(kind)
    }
}

/// A single inference rule
pub trait Rule: Send + Sync {
    /// Name of the rule, for tracing
    fn name(&self) -> &'static str;

    /// Tokens this rule adds given what earlier rules emitted
    fn apply(&self, input: &ClassificationInput<'_>, emitted: &[Token]) -> Vec<Token>;
}

/// Multiplicity words in the annotation
pub struct AnnotationMultiplicity;

impl Rule for AnnotationMultiplicity {
    fn name(&self) -> &'static str {
        "annotation_multiplicity"
    }

    fn apply(&self, input: &ClassificationInput<'_>, _emitted: &[Token]) -> Vec<Token> {
        MULTIPLICITY_KEYWORDS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|word| input.mentions(word)))
            .map(|(_, token)| vec![*token])
            .unwrap_or_default()
    }
}

/// Style adjectives in the annotation
pub struct AnnotationAdjectives;

impl Rule for AnnotationAdjectives {
    fn name(&self) -> &'static str {
        "annotation_adjectives"
    }

    fn apply(&self, input: &ClassificationInput<'_>, _emitted: &[Token]) -> Vec<Token> {
        ADJECTIVES
            .iter()
            .copied()
            .filter(|word| input.mentions(word))
            .collect()
    }
}

/// Circle counts implying multiplicity for small repeated decorations
pub struct CountMultiplicity;

impl Rule for CountMultiplicity {
    fn name(&self) -> &'static str {
        "count_multiplicity"
    }

    fn apply(&self, input: &ClassificationInput<'_>, emitted: &[Token]) -> Vec<Token> {
        if !input.category.is_multiplicity_sensitive() {
            return Vec::new();
        }

        let circles = input.count(ElementKind::Circle);
        let polygons = input.count(ElementKind::Polygon);
        let has = |token: Token| emitted.contains(&token);

        let token = if circles > 3 && polygons > 0 {
            (!has("cluster")).then_some("cluster")
        } else if circles >= 3 {
            (!has("triple") && !has("cluster")).then_some("triple")
        } else if circles == 2 {
            (!has("double")).then_some("double")
        } else {
            None
        };

        token.into_iter().collect()
    }
}

/// Mostly unfilled shapes read as an outline
pub struct OutlineRatio;

impl Rule for OutlineRatio {
    fn name(&self) -> &'static str {
        "outline_ratio"
    }

    fn apply(&self, input: &ClassificationInput<'_>, emitted: &[Token]) -> Vec<Token> {
        let total = input.counts.shape_total();
        // no_fill > total / 2
        if total > 0 && 2 * input.counts.no_fill > total && !emitted.contains(&"outline") {
            vec!["outline"]
        } else {
            Vec::new()
        }
    }
}

/// Conventions specific to each category
pub struct CategorySpecific;

impl Rule for CategorySpecific {
    fn name(&self) -> &'static str {
        "category_specific"
    }

    fn apply(&self, input: &ClassificationInput<'_>, emitted: &[Token]) -> Vec<Token> {
        let polygons = input.count(ElementKind::Polygon);
        let circles = input.count(ElementKind::Circle);
        let paths = input.count(ElementKind::Path);
        let rects = input.count(ElementKind::Rect);
        let ellipses = input.count(ElementKind::Ellipse);
        let lines = input.count(ElementKind::Line);
        let has = |token: Token| emitted.contains(&token);

        let mut tokens = Vec::new();
        match input.category {
            Category::Mountains => {
                if polygons >= 4 {
                    tokens.push("range");
                } else if polygons >= 3 {
                    if !has("layered") {
                        tokens.push("layered");
                    }
                } else if polygons == 2 {
                    if !has("double") {
                        tokens.push("dual");
                    }
                } else if polygons == 1 {
                    tokens.push("single");
                }
            }
            Category::Waves => {
                if paths >= 3 {
                    tokens.push("triple");
                } else if paths == 2 {
                    tokens.push("double");
                }
                if has("outline") {
                    tokens.push("line");
                }
            }
            Category::Compasses => {
                if circles >= 2 {
                    tokens.push("ringed");
                }
                if polygons >= 8 {
                    tokens.push("eightpoint");
                } else if polygons >= 4 {
                    tokens.push("fourpoint");
                }
            }
            Category::Dividers => {
                if circles >= 3 {
                    tokens.push("dotted");
                } else if circles >= 1 {
                    tokens.push("centered");
                }
                if polygons > 0 {
                    tokens.push("decorated");
                }
            }
            Category::Badges | Category::Shields => {
                if circles > 10 {
                    tokens.push("scalloped");
                } else if polygons >= 1 {
                    tokens.extend(first_mentioned(
                        input,
                        &[
                            ("hex", "hexagon"),
                            ("octagon", "octagon"),
                            ("diamond", "diamond"),
                            ("star", "star"),
                        ],
                    ));
                }
            }
            Category::Frames => {
                if rects >= 2 || circles >= 2 {
                    tokens.push("double");
                }
                // The octagon branch is shadowed by the hexagon threshold;
                // existing catalogs were named this way.
                if polygons >= 6 {
                    tokens.push("hexagon");
                } else if polygons >= 8 {
                    tokens.push("octagon");
                }
                if input.mentions("corner") {
                    tokens.push("corner");
                }
            }
            Category::Blobs => {
                if ellipses >= 1 || circles >= 1 {
                    tokens.push(if rects >= 1 { "rounded" } else { "oval" });
                }
                if input.mentions("asymmetric") {
                    tokens.push("asymmetric");
                }
            }
            Category::Lightning => {
                if polygons >= 2 {
                    tokens.push("double");
                }
                tokens.extend(first_mentioned(
                    input,
                    &[("zigzag", "zigzag"), ("compact", "compact")],
                ));
            }
            Category::SpeechBubbles => {
                if circles >= 3 {
                    tokens.push("thought");
                } else if ellipses >= 3 {
                    tokens.push("cloud");
                }
                if input.mentions("tail") {
                    tokens.push("tail");
                }
            }
            Category::Accents => {
                if lines >= 2 {
                    tokens.push("double");
                }
                if circles >= 4 {
                    tokens.push("dotted");
                } else if circles == 1 {
                    tokens.push("circle");
                }
                if rects >= 2 {
                    tokens.push("square");
                }
            }
            Category::StickerOutlines => {
                if polygons >= 1 {
                    tokens.extend(first_mentioned(
                        input,
                        &[("hex", "hexagon"), ("star", "star")],
                    ));
                }
            }
            Category::Hearts
            | Category::Stars
            | Category::Sparkles
            | Category::SunMoon
            | Category::Unrecognized(_) => {}
        }

        tokens
    }
}

fn first_mentioned(input: &ClassificationInput<'_>, table: &[(&str, Token)]) -> Option<Token> {
    table
        .iter()
        .find(|(keyword, _)| input.mentions(keyword))
        .map(|(_, token)| *token)
}

/// Ordered rule pipeline producing descriptor tokens
pub struct DescriptorEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl DescriptorEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(AnnotationMultiplicity),
            Box::new(AnnotationAdjectives),
            Box::new(CountMultiplicity),
            Box::new(OutlineRatio),
            Box::new(CategorySpecific),
        ];

        Self { rules }
    }

    /// Run every rule in order. Same input, same tokens.
    pub fn infer(&self, input: &ClassificationInput<'_>) -> Vec<Token> {
        let mut tokens = Vec::new();
        for rule in &self.rules {
            let added = rule.apply(input, &tokens);
            if !added.is_empty() {
                debug!(rule = rule.name(), ?added, "rule fired");
            }
            tokens.extend(added);
        }
        tokens
    }
}

impl Default for DescriptorEngine {
    fn default() -> Self {
        Self::new()
    }
}
