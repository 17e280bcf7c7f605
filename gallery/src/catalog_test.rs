use super::*;

// =============================================================
// PanelId
// =============================================================

#[test]
fn panel_id_rejects_zero_and_past_end() {
    assert_eq!(PanelId::new(0), None);
    assert_eq!(PanelId::new(PANEL_COUNT + 1), None);
    assert_eq!(PanelId::new(u8::MAX), None);
}

#[test]
fn panel_id_accepts_full_range() {
    for raw in 1..=PANEL_COUNT {
        assert_eq!(PanelId::new(raw).map(PanelId::get), Some(raw));
    }
}

#[test]
fn panel_id_default_is_first() {
    assert_eq!(PanelId::default(), PanelId::FIRST);
    assert_eq!(PanelId::FIRST.get(), 1);
    assert_eq!(PanelId::LAST.get(), 6);
}

#[test]
fn panel_id_next_saturates_at_last() {
    assert_eq!(PanelId::LAST.next(), None);
    assert_eq!(PanelId::FIRST.next(), PanelId::new(2));
}

#[test]
fn panel_id_previous_saturates_at_first() {
    assert_eq!(PanelId::FIRST.previous(), None);
    assert_eq!(PanelId::LAST.previous(), PanelId::new(5));
}

#[test]
fn panel_id_all_is_ordered() {
    let raw: Vec<u8> = PanelId::all().map(PanelId::get).collect();
    assert_eq!(raw, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn panel_id_display_is_plain_number() {
    assert_eq!(PanelId::LAST.to_string(), "6");
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn panel_lookup_matches_display_order() {
    assert_eq!(panel(PanelId::FIRST).company, "Siemens Healthineers");
    assert_eq!(panel(PanelId::LAST).company, "Coming soon...");
}

#[test]
fn every_panel_has_metadata() {
    for id in PanelId::all() {
        let p = panel(id);
        assert!(!p.title.is_empty(), "panel {id} title");
        assert!(!p.description.is_empty(), "panel {id} description");
        assert!(!p.achievements.is_empty(), "panel {id} achievements");
        assert!(!p.skills.is_empty(), "panel {id} skills");
    }
}

#[test]
fn panel_four_has_three_achievements() {
    let p = panel(PanelId::new(4).unwrap_or_default());
    assert_eq!(p.achievements.len(), 3);
    assert_eq!(p.skills, &["Team Leadership", "Strategic Planning", "Supplier Management"]);
}

// =============================================================
// Asset paths
// =============================================================

#[test]
fn image_path_follows_naming_convention() {
    assert_eq!(image_path(PanelId::FIRST), "images/panel1.png");
    assert_eq!(image_path(PanelId::LAST), "images/panel6.png");
}

#[test]
fn image_alt_names_the_panel() {
    assert_eq!(image_alt(PanelId::new(3).unwrap_or_default()), "Comic Panel 3");
}

#[test]
fn image_paths_cover_every_panel() {
    let paths = image_paths();
    assert_eq!(paths.len(), usize::from(PANEL_COUNT));
    assert_eq!(paths[1], "images/panel2.png");
}
