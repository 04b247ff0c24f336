use super::*;

fn sample_asset() -> Asset {
    Asset {
        id: "a-1".to_owned(),
        asset_no: "FA-0042".to_owned(),
        line_no: "7".to_owned(),
        asset_name: "Hydraulic Pump".to_owned(),
        condition: "Good".to_owned(),
        category_code: "MCH".to_owned(),
        acq_value: Some(1250.0),
        book_value: Some(800.0),
        pis_date: "2023-04-01".to_owned(),
        trans_date: String::new(),
        images: vec!["pump.jpg".to_owned()],
    }
}

// =============================================================
// Asset form lifecycle
// =============================================================

#[test]
fn default_state_is_closed_and_idle() {
    let s = AssetFormState::default();
    assert!(!s.show_form);
    assert_eq!(s.phase, SubmitPhase::Idle);
    assert!(s.editing_id.is_none());
    assert!(s.error.is_none());
}

#[test]
fn start_create_opens_a_blank_draft() {
    let mut s = AssetFormState::default();
    s.draft.asset_name = "leftover".to_owned();
    s.start_create();
    assert!(s.show_form);
    assert!(s.editing_id.is_none());
    assert_eq!(s.draft, AssetFormValues::default());
}

#[test]
fn start_edit_loads_the_asset_values() {
    let mut s = AssetFormState::default();
    s.start_edit(&sample_asset());
    assert!(s.show_form);
    assert_eq!(s.editing_id.as_deref(), Some("a-1"));
    assert_eq!(s.draft.asset_no, "FA-0042");
    assert_eq!(s.draft.asset_name, "Hydraulic Pump");
    assert_eq!(s.draft.acq_value, Some(1250.0));
    assert_eq!(s.draft.images, ["pump.jpg"]);
}

#[test]
fn cancel_discards_the_draft_and_closes() {
    let mut s = AssetFormState::default();
    s.start_edit(&sample_asset());
    s.cancel();
    assert_eq!(s, AssetFormState::default());
}

// =============================================================
// Submission phases
// =============================================================

#[test]
fn begin_submit_suppresses_reentry_while_submitting() {
    let mut s = AssetFormState::default();
    s.start_create();
    assert!(s.begin_submit());
    assert_eq!(s.phase, SubmitPhase::Submitting);
    assert!(!s.begin_submit());
}

#[test]
fn begin_submit_clears_a_previous_error() {
    let mut s = AssetFormState::default();
    s.start_create();
    s.finish_failure("boom".to_owned());
    assert!(s.begin_submit());
    assert!(s.error.is_none());
}

#[test]
fn finish_failure_keeps_the_draft_and_the_form_open() {
    let mut s = AssetFormState::default();
    s.start_edit(&sample_asset());
    assert!(s.begin_submit());
    s.finish_failure("network error: timeout".to_owned());
    assert_eq!(s.phase, SubmitPhase::Idle);
    assert!(s.show_form);
    assert_eq!(s.editing_id.as_deref(), Some("a-1"));
    assert_eq!(s.draft.asset_name, "Hydraulic Pump");
    assert_eq!(s.error.as_deref(), Some("network error: timeout"));
}

#[test]
fn finish_success_resets_everything() {
    let mut s = AssetFormState::default();
    s.start_edit(&sample_asset());
    assert!(s.begin_submit());
    s.finish_success();
    assert_eq!(s, AssetFormState::default());
}

#[test]
fn retry_after_failure_is_allowed() {
    let mut s = AssetFormState::default();
    s.start_create();
    assert!(s.begin_submit());
    s.finish_failure("boom".to_owned());
    assert!(s.begin_submit());
}

// =============================================================
// Validation and field parsing
// =============================================================

#[test]
fn validate_requires_an_asset_name() {
    let mut values = AssetFormValues::default();
    assert!(values.validate().is_err());
    values.asset_name = "   ".to_owned();
    assert!(values.validate().is_err());
    values.asset_name = "Pump".to_owned();
    assert!(values.validate().is_ok());
}

#[test]
fn parse_amount_treats_blank_and_junk_as_none() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("12.5"), Some(12.5));
    assert_eq!(parse_amount(" 40 "), Some(40.0));
}

#[test]
fn asset_draft_serializes_camel_case() {
    let draft = AssetFormValues {
        asset_no: "FA-1".to_owned(),
        asset_name: "Pump".to_owned(),
        acq_value: Some(10.0),
        ..AssetFormValues::default()
    };
    let value = serde_json::to_value(&draft).expect("draft serializes");
    assert_eq!(value["assetNo"], "FA-1");
    assert_eq!(value["assetName"], "Pump");
    assert_eq!(value["acqValue"], 10.0);
}

// =============================================================
// Inspection entry
// =============================================================

#[test]
fn inspection_draft_binds_the_asset_and_prefills() {
    let d = InspectionDraft::for_asset("a-1", "Pat", "2026-08-06");
    assert_eq!(d.asset_id, "a-1");
    assert_eq!(d.checked_by, "Pat");
    assert_eq!(d.check_date, "2026-08-06");
    assert_eq!(d.status, "Good");
    assert!(d.remarks.is_empty());
}

#[test]
fn inspection_draft_serializes_camel_case() {
    let d = InspectionDraft::for_asset("a-1", "Pat", "2026-08-06");
    let value = serde_json::to_value(&d).expect("draft serializes");
    assert_eq!(value["assetId"], "a-1");
    assert_eq!(value["checkedBy"], "Pat");
    assert_eq!(value["checkDate"], "2026-08-06");
}

#[test]
fn inspection_validate_requires_asset_and_condition() {
    let mut d = InspectionDraft::default();
    assert!(d.validate().is_err());
    d.asset_id = "a-1".to_owned();
    assert!(d.validate().is_err());
    d.status = "Poor".to_owned();
    assert!(d.validate().is_ok());
}

#[test]
fn inspection_failure_keeps_the_draft_for_correction() {
    let mut s = InspectionFormState::new(InspectionDraft::for_asset("a-1", "Pat", "2026-08-06"));
    s.draft.remarks = "hairline crack".to_owned();
    assert!(s.begin_submit());
    s.finish_failure("invalid condition".to_owned());
    assert_eq!(s.phase, SubmitPhase::Idle);
    assert_eq!(s.draft.remarks, "hairline crack");
    assert_eq!(s.error.as_deref(), Some("invalid condition"));
}

#[test]
fn inspection_success_resets_to_a_fresh_prefilled_draft() {
    let mut s = InspectionFormState::new(InspectionDraft::for_asset("a-1", "Pat", "2026-08-06"));
    s.draft.status = "Broken".to_owned();
    s.draft.remarks = "seized bearing".to_owned();
    assert!(s.begin_submit());
    s.finish_success();
    assert_eq!(s.phase, SubmitPhase::Idle);
    assert_eq!(s.draft.asset_id, "a-1");
    assert_eq!(s.draft.checked_by, "Pat");
    assert_eq!(s.draft.status, "Good");
    assert!(s.draft.remarks.is_empty());
    assert!(s.error.is_none());
}

#[test]
fn inspection_double_submit_is_suppressed() {
    let mut s = InspectionFormState::new(InspectionDraft::for_asset("a-1", "Pat", "2026-08-06"));
    assert!(s.begin_submit());
    assert!(!s.begin_submit());
}
