use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Odia,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Odia,
            Language::Odia => Language::English,
        }
    }

    pub fn is_odia(self) -> bool {
        matches!(self, Language::Odia)
    }

    /// Odia text when Odia is active and a translation exists, English otherwise.
    pub fn t<'a>(self, english: &'a str, odia: Option<&'a str>) -> &'a str {
        match (self, odia) {
            (Language::Odia, Some(text)) => text,
            _ => english,
        }
    }

    /// Label for the toggle button: the language you would switch to,
    /// written in the active script, and its name in the other script.
    pub fn toggle_label(self) -> (&'static str, &'static str) {
        match self {
            Language::English => ("Odia", "ଓଡ଼ିଆ"),
            Language::Odia => ("ଇଂରାଜୀ", "English"),
        }
    }
}
