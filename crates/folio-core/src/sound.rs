use crate::constants::*;
use crate::error::SiteResult;
use fnv::FnvHashMap;

/// Minimal persistent key-value store (browser local storage on the web).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> SiteResult<()>;
}

/// In-memory store; also the fallback when local storage is unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The one persisted preference: whether UI sounds play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundPreference {
    enabled: bool,
}

impl Default for SoundPreference {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SoundPreference {
    /// Only an explicit "off" disables sound; a missing or unknown value is on.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let enabled = !matches!(store.get(SOUND_PREF_KEY).as_deref(), Some("off"));
        Self { enabled }
    }

    /// Flip and persist immediately. The in-memory state flips even if the
    /// write fails.
    pub fn toggle(&mut self, store: &mut impl KeyValueStore) -> bool {
        self.enabled = !self.enabled;
        if let Err(e) = store.set(SOUND_PREF_KEY, self.stored_value()) {
            log::warn!("[sound] preference not saved: {}", e);
        }
        self.enabled
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn stored_value(&self) -> &'static str {
        if self.enabled {
            "on"
        } else {
            "off"
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.enabled {
            "🔊"
        } else {
            "🔇"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundKind {
    Toggle,
    Click,
    Other,
}

impl SoundKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "toggle" => SoundKind::Toggle,
            "click" => SoundKind::Click,
            _ => SoundKind::Other,
        }
    }

    pub fn frequency_hz(self) -> f32 {
        match self {
            SoundKind::Toggle => TONE_FREQ_TOGGLE_HZ,
            SoundKind::Click => TONE_FREQ_CLICK_HZ,
            SoundKind::Other => TONE_FREQ_DEFAULT_HZ,
        }
    }
}

/// Gain envelope of a one-shot tone: exponential decay, then stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneEnvelope {
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_sec: f64,
}

impl ToneEnvelope {
    pub const UI: ToneEnvelope = ToneEnvelope {
        start_gain: 0.1,
        end_gain: 0.01,
        duration_sec: 0.1,
    };
}

/// Lazily constructed resource whose construction failure is cached.
#[derive(Debug)]
pub enum AudioInit<T> {
    Pending,
    Ready(T),
    Failed,
}

impl<T> Default for AudioInit<T> {
    fn default() -> Self {
        AudioInit::Pending
    }
}

impl<T> AudioInit<T> {
    /// Build on first use. After one failure every later call returns `None`
    /// without invoking `build` again.
    pub fn get_or_try_init(
        &mut self,
        build: impl FnOnce() -> SiteResult<T>,
    ) -> Option<&T> {
        if let AudioInit::Pending = self {
            *self = match build() {
                Ok(value) => AudioInit::Ready(value),
                Err(e) => {
                    log::debug!("[sound] {}", e);
                    AudioInit::Failed
                }
            };
        }
        match self {
            AudioInit::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            AudioInit::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AudioInit::Failed)
    }
}
