// Host-side tests for scroll choreography decisions.

use folio_core::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn toggle_actions_parse_and_display() {
    let actions: ToggleActions = "play none none reverse".parse().unwrap();
    assert_eq!(actions, ToggleActions::PLAY_REVERSE);
    assert_eq!(actions.to_string(), "play none none reverse");
    assert_eq!(
        ToggleActions::PLAY_ONCE.to_string(),
        "play none none none"
    );
    assert_eq!(actions.action(TriggerEvent::LeaveBack), ToggleAction::Reverse);
}

#[test]
fn toggle_actions_reject_bad_input() {
    assert!("play none".parse::<ToggleActions>().is_err());
    assert!("play none none bogus".parse::<ToggleActions>().is_err());
    assert!("".parse::<ToggleActions>().is_err());
}

#[test]
fn trigger_ranges_render_as_scroll_positions() {
    assert_eq!(TITLE_RANGE.start.to_string(), "top 80%");
    assert_eq!(TITLE_RANGE.end.to_string(), "bottom 20%");
    assert_eq!(CONTENT_RANGE.start.to_string(), "top 70%");
    assert_eq!(CARD_RANGE.end.to_string(), "bottom 10%");
    assert_eq!(SECTION_RANGE.start.to_string(), "top 50%");
}

#[test]
fn entrance_reverts_when_scrolled_back_above() {
    let mut entrance = EntranceTrigger::new(ToggleActions::PLAY_REVERSE);
    assert_eq!(entrance.state(), EntranceState::Hidden);
    assert_eq!(entrance.handle(TriggerEvent::Enter), Some(ToggleAction::Play));
    assert_eq!(entrance.state(), EntranceState::Shown);
    assert_eq!(entrance.handle(TriggerEvent::Leave), None);
    assert_eq!(entrance.handle(TriggerEvent::EnterBack), None);
    assert_eq!(
        entrance.handle(TriggerEvent::LeaveBack),
        Some(ToggleAction::Reverse)
    );
    assert_eq!(entrance.state(), EntranceState::Hidden);
    // re-armed
    assert_eq!(entrance.handle(TriggerEvent::Enter), Some(ToggleAction::Play));
}

#[test]
fn duplicate_callbacks_do_not_replay() {
    let mut entrance = EntranceTrigger::new(ToggleActions::PLAY_REVERSE);
    entrance.handle(TriggerEvent::Enter);
    assert_eq!(entrance.handle(TriggerEvent::Enter), None);
    entrance.handle(TriggerEvent::LeaveBack);
    assert_eq!(entrance.handle(TriggerEvent::LeaveBack), None);
}

#[test]
fn one_shot_reveal_never_reverses() {
    let mut reveal = EntranceTrigger::new(ToggleActions::PLAY_ONCE);
    reveal.handle(TriggerEvent::Enter);
    assert_eq!(reveal.handle(TriggerEvent::LeaveBack), None);
    assert_eq!(reveal.state(), EntranceState::Shown);
}

#[test]
fn stagger_offsets_follow_dom_order() {
    let offsets = stagger_offsets(3, STAGGER_STEP_SEC);
    assert_eq!(offsets.len(), 3);
    for (i, o) in offsets.iter().enumerate() {
        assert!((o - i as f32 * 0.2).abs() < 1e-6);
    }
    assert!(stagger_offsets(0, 0.2).is_empty());
}

#[test]
fn hero_intro_plays_title_then_subtitle_then_buttons() {
    let delays: Vec<f32> = HERO_INTRO.iter().map(|t| t.delay_sec).collect();
    assert_eq!(delays, [0.0, 0.3, 0.6]);
    assert_eq!(HERO_INTRO[0].from_y, 100.0);
    assert!(HERO_INTRO.iter().all(|t| t.ease == Ease::Power3Out));
}

#[test]
fn hover_and_scroll_scales() {
    assert_eq!(hover_scale(true), 1.05);
    assert_eq!(hover_scale(false), 1.0);
    assert_eq!(button_hover_scale(true), BUTTON_HOVER_SCALE);
    assert_eq!(button_hover_scale(false), BUTTON_PULSE_SCALE);
    assert_eq!(card_scroll_scale(TriggerEvent::Enter), Some(1.05));
    assert_eq!(card_scroll_scale(TriggerEvent::Leave), Some(1.0));
    assert_eq!(card_scroll_scale(TriggerEvent::EnterBack), None);
}

#[test]
fn parallax_moves_at_half_scroll_speed() {
    assert_eq!(parallax_offset(0.0), 0.0);
    assert_eq!(parallax_offset(200.0), 100.0);
}

#[test]
fn breathing_specs_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let card = BreathingSpec::sample(BreathingKind::CardFloat, &mut rng);
        assert!((2.5..3.5).contains(&card.duration_sec));
        assert_eq!(card.target, BreathTarget::TranslateY(18.0));

        let button = BreathingSpec::sample(BreathingKind::ButtonPulse, &mut rng);
        assert!((1.5..2.5).contains(&button.duration_sec));

        let drift = BreathingSpec::sample(BreathingKind::SectionDrift, &mut rng);
        assert!((6.0..8.0).contains(&drift.duration_sec));
        match drift.target {
            BreathTarget::BackgroundPosition { x_pct, y_pct } => {
                assert!((50.0..60.0).contains(&x_pct));
                assert!((50.0..60.0).contains(&y_pct));
            }
            other => panic!("unexpected target {:?}", other),
        }
        for spec in [card, button, drift] {
            assert!((0.0..1.0).contains(&spec.delay_sec));
        }
    }
}

#[test]
fn floating_elements_scatter_inside_section() {
    let mut rng = StdRng::seed_from_u64(5);
    let dots = FloatingElement::scatter(FLOATING_ELEMENTS_PER_SECTION, &mut rng);
    assert_eq!(dots.len(), 3);
    for d in dots {
        assert!((0.0..100.0).contains(&d.left_pct));
        assert!((0.0..100.0).contains(&d.top_pct));
        assert!((0.0..6.0).contains(&d.delay_sec));
    }
}

#[test]
fn motion_path_origins_cycle_by_three() {
    assert_eq!(motion_path_origin(0), Vec3::new(-200.0, -100.0, -200.0));
    assert_eq!(motion_path_origin(1), Vec3::new(200.0, 120.0, -150.0));
    assert_eq!(motion_path_origin(2), Vec3::new(0.0, 200.0, -100.0));
    assert_eq!(motion_path_origin(3), motion_path_origin(0));
}

#[test]
fn mascot_waypoints_stay_on_screen_and_descend() {
    for (x, y) in MASCOT_WAYPOINTS {
        assert!((0.0..=100.0).contains(&x));
        assert!((0.0..=100.0).contains(&y));
    }
    assert!(MASCOT_WAYPOINTS.windows(2).all(|w| w[0].1 < w[1].1));
}

#[test]
fn ease_names_match_tween_engine() {
    assert_eq!(Ease::Power3Out.as_str(), "power3.out");
    assert_eq!(BreathingSpec::EASE.as_str(), "sine.inOut");
    assert_eq!(Ease::Power1InOut.as_str(), "power1.inOut");
}
