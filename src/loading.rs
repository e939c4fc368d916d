use crate::constants::{LOADING_PROFILE_ID, LOADING_SCREEN_ID};
use crate::dom;
use folio_core::{LoadingPhase, LoadingSchedule};
use web_sys as web;

#[inline]
pub fn show_profile_indicator(document: &web::Document) {
    if let Some(el) = dom::html_element_by_id(document, LOADING_PROFILE_ID) {
        dom::set_style(&el, "display", "block");
    }
}

/// Style the loading screen for `phase`. A missing screen is ignored.
pub fn apply_phase(document: &web::Document, phase: LoadingPhase) {
    let Some(el) = dom::html_element_by_id(document, LOADING_SCREEN_ID) else {
        return;
    };
    match phase {
        LoadingPhase::Visible => dom::set_style(&el, "opacity", "1"),
        LoadingPhase::FadingOut => dom::set_style(&el, "opacity", "0"),
        LoadingPhase::Hidden => dom::set_style(&el, "display", "none"),
    }
}

/// Run the window `load` sequence: indicator on, hold, fade, hide.
pub fn run(document: &web::Document, schedule: LoadingSchedule) {
    show_profile_indicator(document);
    log::debug!("[boot] loading screen for {} ms", schedule.total_ms());
    let doc = document.clone();
    let fade_at = schedule.delay_ms;
    dom::set_timeout(fade_at, move || {
        apply_phase(&doc, schedule.phase_at(fade_at));
        let hide_at = schedule.total_ms();
        dom::set_timeout(schedule.fade_ms, move || {
            apply_phase(&doc, schedule.phase_at(hide_at));
        });
    });
}
