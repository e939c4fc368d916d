// Host-side tests for the sound preference and lazy audio init.

use folio_core::*;
use std::cell::Cell;

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> SiteResult<()> {
        Err(SiteError::Storage("quota exceeded".into()))
    }
}

#[test]
fn sound_defaults_to_on() {
    let store = MemoryStore::default();
    let pref = SoundPreference::load(&store);
    assert!(pref.enabled());
    assert_eq!(pref.icon(), "🔊");
}

#[test]
fn one_toggle_persists_off() {
    let mut store = MemoryStore::default();
    let mut pref = SoundPreference::load(&store);
    assert!(!pref.toggle(&mut store));
    assert_eq!(store.get(SOUND_PREF_KEY).as_deref(), Some("off"));
    assert_eq!(pref.icon(), "🔇");
    assert!(!SoundPreference::load(&store).enabled());
}

#[test]
fn two_toggles_restore_preference() {
    let mut store = MemoryStore::default();
    let mut pref = SoundPreference::load(&store);
    pref.toggle(&mut store);
    pref.toggle(&mut store);
    assert!(pref.enabled());
    assert_eq!(store.get(SOUND_PREF_KEY).as_deref(), Some("on"));
}

#[test]
fn only_explicit_off_disables() {
    let mut store = MemoryStore::default();
    for value in ["on", "", "OFF", "false"] {
        store.set(SOUND_PREF_KEY, value).unwrap();
        assert!(SoundPreference::load(&store).enabled(), "{:?}", value);
    }
    store.set(SOUND_PREF_KEY, "off").unwrap();
    assert!(!SoundPreference::load(&store).enabled());
}

#[test]
fn toggle_flips_even_when_write_fails() {
    let mut store = ReadOnlyStore;
    let mut pref = SoundPreference::load(&store);
    assert!(!pref.toggle(&mut store));
    assert!(!pref.enabled());
}

#[test]
fn tone_frequencies() {
    assert_eq!(SoundKind::from_name("toggle").frequency_hz(), 600.0);
    assert_eq!(SoundKind::from_name("click").frequency_hz(), 1000.0);
    assert_eq!(SoundKind::from_name("whoosh"), SoundKind::Other);
    assert_eq!(SoundKind::Other.frequency_hz(), 800.0);
}

#[test]
fn ui_envelope_decays() {
    let env = ToneEnvelope::UI;
    assert!(env.start_gain > env.end_gain);
    assert!(env.end_gain > 0.0, "exponential ramps cannot reach zero");
    assert!((env.duration_sec - 0.1).abs() < 1e-9);
}

#[test]
fn audio_init_builds_once() {
    let calls = Cell::new(0);
    let mut init: AudioInit<u32> = AudioInit::default();
    for _ in 0..3 {
        let v = init.get_or_try_init(|| {
            calls.set(calls.get() + 1);
            Ok(7)
        });
        assert_eq!(v, Some(&7));
    }
    assert_eq!(calls.get(), 1);
    assert_eq!(init.get(), Some(&7));
}

#[test]
fn audio_init_failure_is_cached() {
    let calls = Cell::new(0);
    let mut init: AudioInit<u32> = AudioInit::default();
    for _ in 0..3 {
        let v = init.get_or_try_init(|| {
            calls.set(calls.get() + 1);
            Err(SiteError::AudioUnavailable("blocked".into()))
        });
        assert_eq!(v, None);
    }
    assert_eq!(calls.get(), 1);
    assert!(init.is_failed());
}
