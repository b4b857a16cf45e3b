use crate::logger;

/// Wrapper over the platform speech engine. The engine is an external
/// collaborator with a one-call contract: speak this word, interrupting
/// whatever is currently being spoken. When the engine is unavailable (init
/// failed, or the `speech` feature is off) pronounce becomes a no-op.
pub struct Speaker {
    #[cfg(feature = "speech")]
    engine: Option<tts::Tts>,
}

impl Speaker {
    #[cfg(feature = "speech")]
    pub fn new() -> Self {
        match tts::Tts::default() {
            Ok(engine) => Self {
                engine: Some(engine),
            },
            Err(e) => {
                logger::log(&format!("speech engine unavailable: {e}"));
                Self { engine: None }
            }
        }
    }

    #[cfg(not(feature = "speech"))]
    pub fn new() -> Self {
        logger::log("built without speech support, pronounce is a no-op");
        Self {}
    }

    /// A speaker that never speaks, for tests.
    pub fn disabled() -> Self {
        Self {
            #[cfg(feature = "speech")]
            engine: None,
        }
    }

    pub fn is_available(&self) -> bool {
        #[cfg(feature = "speech")]
        {
            self.engine.is_some()
        }
        #[cfg(not(feature = "speech"))]
        {
            false
        }
    }

    #[cfg(feature = "speech")]
    pub fn pronounce(&mut self, word: &str) {
        if let Some(engine) = self.engine.as_mut()
            && let Err(e) = engine.speak(word.to_string(), true)
        {
            logger::log(&format!("failed to pronounce '{word}': {e}"));
        }
    }

    #[cfg(not(feature = "speech"))]
    pub fn pronounce(&mut self, _word: &str) {}
}

impl Default for Speaker {
    fn default() -> Self {
        Self::new()
    }
}
