//! Asset categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual motif of an asset, taken from its category directory name.
///
/// Known labels map to a fixed variant with its own inference rules.
/// Anything else is carried as [`Category::Unrecognized`] and only gets a
/// base word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Hearts,
    Stars,
    Sparkles,
    Blobs,
    Mountains,
    Waves,
    Compasses,
    Badges,
    Shields,
    Frames,
    Dividers,
    Lightning,
    SpeechBubbles,
    Accents,
    StickerOutlines,
    SunMoon,
    Unrecognized(String),
}

impl Category {
    /// All known categories in label order.
    pub const KNOWN: [Category; 16] = [
        Category::Accents,
        Category::Badges,
        Category::Blobs,
        Category::Compasses,
        Category::Dividers,
        Category::Frames,
        Category::Hearts,
        Category::Lightning,
        Category::Mountains,
        Category::Shields,
        Category::Sparkles,
        Category::SpeechBubbles,
        Category::Stars,
        Category::StickerOutlines,
        Category::SunMoon,
        Category::Waves,
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "hearts" => Category::Hearts,
            "stars" => Category::Stars,
            "sparkles" => Category::Sparkles,
            "blobs" => Category::Blobs,
            "mountains" => Category::Mountains,
            "waves" => Category::Waves,
            "compasses" => Category::Compasses,
            "badges" => Category::Badges,
            "shields" => Category::Shields,
            "frames" => Category::Frames,
            "dividers" => Category::Dividers,
            "lightning" => Category::Lightning,
            "speech_bubbles" => Category::SpeechBubbles,
            "accents" => Category::Accents,
            "sticker_outlines" => Category::StickerOutlines,
            "sun_moon" => Category::SunMoon,
            other => Category::Unrecognized(other.to_string()),
        }
    }

    /// Directory label of the category
    pub fn label(&self) -> &str {
        match self {
            Category::Hearts => "hearts",
            Category::Stars => "stars",
            Category::Sparkles => "sparkles",
            Category::Blobs => "blobs",
            Category::Mountains => "mountains",
            Category::Waves => "waves",
            Category::Compasses => "compasses",
            Category::Badges => "badges",
            Category::Shields => "shields",
            Category::Frames => "frames",
            Category::Dividers => "dividers",
            Category::Lightning => "lightning",
            Category::SpeechBubbles => "speech_bubbles",
            Category::Accents => "accents",
            Category::StickerOutlines => "sticker_outlines",
            Category::SunMoon => "sun_moon",
            Category::Unrecognized(label) => label,
        }
    }

    /// Singular word that ends every generated name in this category.
    ///
    /// Unrecognized labels lose one trailing `s`.
    pub fn base_word(&self) -> &str {
        match self {
            Category::Hearts => "heart",
            Category::Stars => "star",
            Category::Sparkles => "sparkle",
            Category::Blobs => "blob",
            Category::Mountains => "mountain",
            Category::Waves => "wave",
            Category::Compasses => "compass",
            Category::Badges => "badge",
            Category::Shields => "shield",
            Category::Frames => "frame",
            Category::Dividers => "divider",
            Category::Lightning => "lightning",
            Category::SpeechBubbles => "bubble",
            Category::Accents => "accent",
            Category::StickerOutlines => "sticker",
            Category::SunMoon => "celestial",
            Category::Unrecognized(label) => label.strip_suffix('s').unwrap_or(label),
        }
    }

    /// Categories of small repeated decorations whose circle count implies
    /// a multiplicity.
    pub fn is_multiplicity_sensitive(&self) -> bool {
        matches!(
            self,
            Category::Hearts | Category::Stars | Category::Sparkles
        )
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
