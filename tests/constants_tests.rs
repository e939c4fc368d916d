// Host-side tests for the DOM contract and tuning constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::{
    MascotLook, SectionId, CARD_TRIGGER_END, CARD_TRIGGER_START, CONTENT_TRIGGER_END,
    CONTENT_TRIGGER_START, MAX_PIXEL_RATIO, PARTICLE_COUNT_MAX, PARTICLE_COUNT_MIN,
    PARTICLE_OPACITY, SNAP_BACK_MS, TITLE_TRIGGER_END, TITLE_TRIGGER_START,
};

#[test]
fn element_ids_are_plain_ids() {
    for id in [
        CANVAS_ID,
        LOADING_SCREEN_ID,
        LOADING_PROFILE_ID,
        MASCOT_ID,
        MASCOT_CANVAS_ID,
        SOUND_TOGGLE_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#') && !id.contains(' '), "{}", id);
    }
}

#[test]
fn selectors_are_class_or_attribute_selectors() {
    for sel in [
        SECTION_SELECTOR,
        SECTION_TITLE_SELECTOR,
        CARD_SELECTOR,
        BUTTON_SELECTOR,
        SCROLL_DOT_SELECTOR,
        NAV_LINK_SELECTOR,
        CLICK_SOUND_SELECTOR,
        MOTION_PATH_SELECTOR,
    ] {
        assert!(sel.starts_with('.') || sel.starts_with('['), "{}", sel);
    }
    assert!(MASCOT_SECTION_SELECTOR.starts_with(SECTION_SELECTOR));
    assert!(MASCOT_SECTION_SELECTOR.contains(SECTION_ATTR));
}

#[test]
fn state_classes_do_not_collide_with_mascot_looks() {
    for look in MascotLook::ALL {
        assert_ne!(look.class_name(), ACTIVE_CLASS);
        assert_ne!(look.class_name(), FLOATING_CLASS);
    }
}

#[test]
fn section_attribute_values_parse() {
    for id in SectionId::ALL {
        assert!(id.as_str().parse::<SectionId>().is_ok());
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT_MIN <= PARTICLE_COUNT_MAX);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(SNAP_BACK_MS > 0);

    // start line sits below the end line for every range
    for (start, end) in [
        (TITLE_TRIGGER_START, TITLE_TRIGGER_END),
        (CONTENT_TRIGGER_START, CONTENT_TRIGGER_END),
        (CARD_TRIGGER_START, CARD_TRIGGER_END),
    ] {
        assert!((0.0..=1.0).contains(&start) && (0.0..=1.0).contains(&end));
        assert!(start > end);
    }
}

#[test]
fn mascot_asset_is_a_rive_file() {
    assert!(MASCOT_ASSET.ends_with(".riv"));
    assert!(!MASCOT_STATE_MACHINE.is_empty());
}
