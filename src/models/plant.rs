use serde::{Deserialize, Serialize};

/// Language a plant description can be read in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }

    /// Label shown on the language switcher, in the language itself.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
        }
    }

    /// Key used for this language in the data files.
    pub fn key(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }
}

/// Bilingual description. Both variants are required by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub hindi: String,
}

impl Description {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
        }
    }
}

/// One entry of the plant catalog, as stored in `plants.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: u32,
    pub name: String,
    pub scientific_name: String,
    #[serde(rename = "type")]
    pub plant_type: String,
    pub description: Description,
    #[serde(default)]
    pub uses: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
}

impl PlantRecord {
    pub fn description(&self, language: Language) -> &str {
        self.description.get(language)
    }

    /// Icon shown next to the plant type.
    pub fn icon(&self) -> &'static str {
        match self.plant_type.as_str() {
            "Tree" => "🌳",
            "Medicinal" => "🌿",
            "Flower" => "🌸",
            _ => "🌱",
        }
    }

    /// Case-insensitive substring match against the name or scientific name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.scientific_name.to_lowercase().contains(needle)
    }
}
