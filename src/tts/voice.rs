use serde::Serialize;

use super::engine::{Engine, EngineFamily};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub language: String,
}

impl VoiceInfo {
    fn new(id: &str, name: &str, language: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            language: language.to_string(),
        }
    }
}

/// Advisory voice list for an engine. Static per family; the engine is never
/// queried for its installed voices.
pub fn catalog(engine: &Engine) -> Vec<VoiceInfo> {
    match engine.family() {
        Some(EngineFamily::Espeak) => vec![
            VoiceInfo::new("default", "Default", "en"),
            VoiceInfo::new("en", "English", "en"),
            VoiceInfo::new("en-us", "US English", "en"),
        ],
        Some(EngineFamily::Festival) => vec![VoiceInfo::new("default", "Festival Default", "en")],
        None => vec![VoiceInfo::new("none", "No Engine Available", "en")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn espeak_family_has_three_voices() {
        for name in ["espeak-ng", "espeak"] {
            let engine = Engine::Espeak {
                name,
                program: PathBuf::from(name),
            };
            let voices = catalog(&engine);
            assert_eq!(voices.len(), 3);
            assert_eq!(voices[2].id, "en-us");
        }
    }

    #[test]
    fn festival_has_one_voice() {
        let engine = Engine::Festival {
            program: PathBuf::from("festival"),
        };
        assert_eq!(
            catalog(&engine),
            vec![VoiceInfo::new("default", "Festival Default", "en")]
        );
    }

    #[test]
    fn no_engine_has_placeholder() {
        let voices = catalog(&Engine::None);
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].id, "none");
    }
}
