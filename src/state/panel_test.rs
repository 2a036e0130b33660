use super::*;

#[test]
fn empty_result_is_empty_panel() {
    let panel: ListPanel<i64> = ListPanel::from_result(Ok(vec![]), "prompts");
    assert_eq!(panel, ListPanel::Empty);
    assert!(panel.has_heading());
    assert!(panel.items().is_empty());
}

#[test]
fn items_keep_response_order() {
    let panel = ListPanel::from_result(Ok(vec![3, 1, 2]), "prompts");
    assert_eq!(panel.items(), &[3, 1, 2]);
}

#[test]
fn error_result_is_failed_panel() {
    let panel: ListPanel<i64> = ListPanel::from_result(Err(ApiError::Unavailable), "files");
    assert_eq!(panel, ListPanel::Failed);
    assert!(!panel.has_heading());
}

#[test]
fn default_panel_is_cleared() {
    assert_eq!(ListPanel::<i64>::default(), ListPanel::Cleared);
}

#[test]
fn only_latest_load_ticket_is_current() {
    let mut loads = LoadTicket::default();
    let first = loads.issue();
    let second = loads.issue();
    assert!(!loads.is_current(first));
    assert!(loads.is_current(second));
}

#[test]
fn parse_project_id_accepts_select_values() {
    assert_eq!(parse_project_id("12"), Some(12));
    assert_eq!(parse_project_id(""), None);
    assert_eq!(parse_project_id("abc"), None);
}
