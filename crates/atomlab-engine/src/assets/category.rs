use serde::{Deserialize, Serialize};

/// Label of the synthetic filter option that lets every element through.
pub const NO_FILTER_LABEL: &str = "All";

/// Label returned for category keys outside the closed set.
pub const FALLBACK_LABEL: &str = "Unknown";

/// Style token returned for category keys outside the closed set.
pub const FALLBACK_COLOR_TOKEN: &str = "text-slate-400 border-slate-400/40 bg-slate-400/5";

/// Element category used for filtering and color coding.
///
/// Serialized with the kebab-case keys used by the dataset
/// (`"alkaline-earth"`, `"post-transition"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Alkali,
    AlkalineEarth,
    Transition,
    PostTransition,
    Metalloid,
    Nonmetal,
    Noble,
    Lanthanide,
    Actinide,
    Unknown,
}

impl Category {
    /// All categories in declaration order. Filter options follow this order.
    pub const ALL: [Category; 10] = [
        Self::Alkali,
        Self::AlkalineEarth,
        Self::Transition,
        Self::PostTransition,
        Self::Metalloid,
        Self::Nonmetal,
        Self::Noble,
        Self::Lanthanide,
        Self::Actinide,
        Self::Unknown,
    ];

    /// Parse a dataset key. Returns None for anything outside the closed set.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "alkali" => Some(Self::Alkali),
            "alkaline-earth" => Some(Self::AlkalineEarth),
            "transition" => Some(Self::Transition),
            "post-transition" => Some(Self::PostTransition),
            "metalloid" => Some(Self::Metalloid),
            "nonmetal" => Some(Self::Nonmetal),
            "noble" => Some(Self::Noble),
            "lanthanide" => Some(Self::Lanthanide),
            "actinide" => Some(Self::Actinide),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// The dataset key for this category.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Alkali => "alkali",
            Self::AlkalineEarth => "alkaline-earth",
            Self::Transition => "transition",
            Self::PostTransition => "post-transition",
            Self::Metalloid => "metalloid",
            Self::Nonmetal => "nonmetal",
            Self::Noble => "noble",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label, also the value the category filter matches on.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alkali => "Alkali Metals",
            Self::AlkalineEarth => "Alkaline Earth Metals",
            Self::Transition => "Transition Metals",
            Self::PostTransition => "Post-transition Metals",
            Self::Metalloid => "Metalloids",
            Self::Nonmetal => "Reactive Nonmetals",
            Self::Noble => "Noble Gases",
            Self::Lanthanide => "Lanthanides",
            Self::Actinide => "Actinides",
            Self::Unknown => "Unknown Properties",
        }
    }

    /// Opaque style token (utility classes) for the UI tile of this category.
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Alkali => "text-rose-400 border-rose-400/40 bg-rose-400/5 shadow-rose-400/10",
            Self::AlkalineEarth => "text-orange-400 border-orange-400/40 bg-orange-400/5 shadow-orange-400/10",
            Self::Transition => "text-sky-400 border-sky-400/40 bg-sky-400/5 shadow-sky-400/10",
            Self::PostTransition => "text-teal-400 border-teal-400/40 bg-teal-400/5 shadow-teal-400/10",
            Self::Metalloid => "text-amber-300 border-amber-300/40 bg-amber-300/5 shadow-amber-300/10",
            Self::Nonmetal => "text-emerald-400 border-emerald-400/40 bg-emerald-400/5 shadow-emerald-400/10",
            Self::Noble => "text-violet-400 border-violet-400/40 bg-violet-400/5 shadow-violet-400/10",
            Self::Lanthanide => "text-pink-400 border-pink-400/40 bg-pink-400/5 shadow-pink-400/10",
            Self::Actinide => "text-indigo-400 border-indigo-400/40 bg-indigo-400/5 shadow-indigo-400/10",
            Self::Unknown => FALLBACK_COLOR_TOKEN,
        }
    }
}

/// Label for a raw category key. Unrecognized keys map to [`FALLBACK_LABEL`].
pub fn category_label_for_key(key: &str) -> &'static str {
    Category::from_key(key).map_or(FALLBACK_LABEL, |c| c.label())
}

/// Style token for a raw category key. Unrecognized keys map to [`FALLBACK_COLOR_TOKEN`].
pub fn category_color_token_for_key(key: &str) -> &'static str {
    Category::from_key(key).map_or(FALLBACK_COLOR_TOKEN, |c| c.color_token())
}

/// Filter choices for the UI: the no-filter label, then every category label
/// in declaration order.
pub fn filter_options() -> Vec<&'static str> {
    std::iter::once(NO_FILTER_LABEL)
        .chain(Category::ALL.iter().map(Category::label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_key() {
        for cat in Category::ALL {
            assert_eq!(Category::from_key(cat.key()), Some(cat));
        }
        assert_eq!(Category::from_key("halogen"), None);
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = Category::ALL.iter().map(Category::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 10);
        assert!(!labels.contains(&NO_FILTER_LABEL));
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(category_label_for_key("halogen"), FALLBACK_LABEL);
        assert_eq!(category_label_for_key("noble"), "Noble Gases");
        assert_eq!(category_color_token_for_key(""), FALLBACK_COLOR_TOKEN);
        assert_eq!(
            category_color_token_for_key("alkali"),
            Category::Alkali.color_token()
        );
    }

    #[test]
    fn filter_options_start_with_no_filter() {
        let options = filter_options();
        assert_eq!(
            options,
            vec![
                "All",
                "Alkali Metals",
                "Alkaline Earth Metals",
                "Transition Metals",
                "Post-transition Metals",
                "Metalloids",
                "Reactive Nonmetals",
                "Noble Gases",
                "Lanthanides",
                "Actinides",
                "Unknown Properties",
            ]
        );
        let declared: Vec<&str> = std::iter::once(NO_FILTER_LABEL)
            .chain(Category::ALL.iter().map(Category::label))
            .collect();
        assert_eq!(options, declared);
    }

    #[test]
    fn serde_uses_dataset_keys() {
        let json = serde_json::to_string(&Category::AlkalineEarth).unwrap();
        assert_eq!(json, "\"alkaline-earth\"");
        let parsed: Category = serde_json::from_str("\"post-transition\"").unwrap();
        assert_eq!(parsed, Category::PostTransition);
        assert!(serde_json::from_str::<Category>("\"halogen\"").is_err());
    }
}
