use super::*;

#[test]
fn tab_label_trims_title() {
    assert_eq!(tab_label("  Onboarding  "), "Onboarding");
}

#[test]
fn tab_label_falls_back_for_blank_title() {
    assert_eq!(tab_label(""), UNTITLED);
    assert_eq!(tab_label("   "), UNTITLED);
}

#[test]
fn finished_tab_points_at_project_dashboard() {
    let spec = finished_tab("p-3", "Exit poll");
    assert_eq!(spec.path, "/console/project/p-3");
    assert_eq!(spec.name, "Exit poll");
    assert_eq!(spec.header_name, "Exit poll results");
    assert_eq!(spec.project_id.as_deref(), Some("p-3"));
}
