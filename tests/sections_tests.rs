// Host-side tests for section geometry and the scroll indicator.

use folio_core::*;

fn section(id: Option<SectionId>, top: f32, height: f32) -> Section {
    Section { id, top, height }
}

fn page() -> SectionRegistry {
    SectionRegistry::new(vec![
        section(Some(SectionId::Home), 0.0, 800.0),
        section(Some(SectionId::About), 800.0, 600.0),
        section(Some(SectionId::Services), 1400.0, 1000.0),
    ])
}

#[test]
fn midpoint_selects_containing_section() {
    let reg = page();
    assert_eq!(reg.active_index(0.0, 800.0), Some(0));
    assert_eq!(reg.active_index(600.0, 800.0), Some(1));
    assert_eq!(reg.active_index(1500.0, 800.0), Some(2));
}

#[test]
fn section_bounds_are_half_open() {
    let reg = page();
    // midpoint exactly at 800 belongs to the second section
    assert_eq!(reg.active_index(400.0, 800.0), Some(1));
    assert_eq!(reg.active_index(399.0, 800.0), Some(0));
}

#[test]
fn midpoint_past_last_section_is_none() {
    assert_eq!(page().active_index(2400.0, 800.0), None);
    assert_eq!(SectionRegistry::default().active_index(0.0, 800.0), None);
}

#[test]
fn overlapping_sections_pick_first_in_document_order() {
    let reg = SectionRegistry::new(vec![
        section(None, 0.0, 1000.0),
        section(None, 500.0, 1000.0),
    ]);
    assert_eq!(reg.active_index(300.0, 800.0), Some(0));
}

#[test]
fn progress_through_section() {
    let reg = page();
    // section 1 spans 800..1400, midpoint 1100
    assert!((reg.progress(1, 700.0, 800.0) - 0.5).abs() < 1e-6);
    assert_eq!(reg.progress(1, 0.0, 800.0), 0.0);
    assert_eq!(reg.progress(1, 5000.0, 800.0), 1.0);
    assert_eq!(reg.progress(9, 0.0, 800.0), 0.0);
}

#[test]
fn zero_height_section_has_no_progress() {
    let reg = SectionRegistry::new(vec![section(None, 100.0, 0.0)]);
    assert_eq!(reg.progress(0, 0.0, 200.0), 0.0);
    assert_eq!(reg.active_index(0.0, 200.0), None);
}

#[test]
fn active_progress_pairs_index_and_progress() {
    let (i, p) = page().active_progress(700.0, 800.0).unwrap();
    assert_eq!(i, 1);
    assert!((p - 0.5).abs() < 1e-6);
}

#[test]
fn indicator_reports_only_changes() {
    let reg = page();
    let mut dots = IndicatorState::default();
    assert_eq!(dots.active(), None);
    assert_eq!(dots.sync(&reg, 0.0, 800.0), Some(0));
    assert_eq!(dots.sync(&reg, 100.0, 800.0), None);
    assert_eq!(dots.sync(&reg, 600.0, 800.0), Some(1));
    assert_eq!(dots.active(), Some(1));
}

#[test]
fn indicator_keeps_last_dot_in_gaps() {
    let reg = page();
    let mut dots = IndicatorState::default();
    dots.sync(&reg, 1500.0, 800.0);
    assert_eq!(dots.sync(&reg, 9000.0, 800.0), None);
    assert_eq!(dots.active(), Some(2));
}

#[test]
fn exactly_one_dot_active_per_section() {
    let reg = page();
    let mut dots = IndicatorState::default();
    for (i, s) in reg.iter().enumerate() {
        // scroll so the midpoint sits inside section i
        let scroll = s.top + s.height / 2.0 - 400.0;
        dots.sync(&reg, scroll, 800.0);
        assert_eq!(dots.active(), Some(i));
    }
}

#[test]
fn section_ids_parse_from_markup_values() {
    assert_eq!("services".parse::<SectionId>(), Ok(SectionId::Services));
    assert_eq!(" about ".parse::<SectionId>(), Ok(SectionId::About));
    assert_eq!(
        "blog".parse::<SectionId>(),
        Err(UnknownSection("blog".to_string()))
    );
    for id in SectionId::ALL {
        assert_eq!(id.to_string().parse::<SectionId>(), Ok(id));
    }
}
