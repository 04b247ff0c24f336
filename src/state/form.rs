#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::Asset;

/// Submission phase shared by the asset and inspection flows.
///
/// `Submitting` suppresses re-entry so repeated clicks cannot issue a
/// second request while one is in flight. There is no cancelled phase:
/// cancellation is a caller-level draft discard, and an in-flight request
/// is never retracted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Draft field values for an asset being created or edited.
///
/// Serialized as the write-request body, camelCase per the asset API.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFormValues {
    pub asset_no: String,
    pub line_no: String,
    pub asset_name: String,
    pub condition: String,
    pub category_code: String,
    pub acq_value: Option<f64>,
    pub book_value: Option<f64>,
    pub pis_date: String,
    pub trans_date: String,
    pub images: Vec<String>,
}

impl AssetFormValues {
    /// Load an existing asset's attributes into a draft for editing.
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            asset_no: asset.asset_no.clone(),
            line_no: asset.line_no.clone(),
            asset_name: asset.asset_name.clone(),
            condition: asset.condition.clone(),
            category_code: asset.category_code.clone(),
            acq_value: asset.acq_value,
            book_value: asset.book_value,
            pis_date: asset.pis_date.clone(),
            trans_date: asset.trans_date.clone(),
            images: asset.images.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.asset_name.trim().is_empty() {
            return Err("Asset name is required");
        }
        Ok(())
    }
}

/// State machine for the asset create/edit form.
///
/// `editing_id == None` routes submission to the create endpoint,
/// `Some(id)` to the update endpoint for that asset. A failed submission
/// leaves the draft intact and the form open so the user can retry without
/// re-entering data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetFormState {
    pub draft: AssetFormValues,
    pub editing_id: Option<String>,
    pub show_form: bool,
    pub phase: SubmitPhase,
    pub error: Option<String>,
}

impl AssetFormState {
    /// Open the form with a blank draft in create mode.
    pub fn start_create(&mut self) {
        *self = Self {
            show_form: true,
            ..Self::default()
        };
    }

    /// Open the form with `asset`'s values loaded in edit mode.
    pub fn start_edit(&mut self, asset: &Asset) {
        *self = Self {
            draft: AssetFormValues::from_asset(asset),
            editing_id: Some(asset.id.clone()),
            show_form: true,
            ..Self::default()
        };
    }

    /// Discard the draft and close the form.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Enter `Submitting` unless a submission is already in flight.
    /// Returns whether the caller may proceed.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == SubmitPhase::Submitting {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        self.error = None;
        true
    }

    /// Submission confirmed: reset the draft and close the form.
    pub fn finish_success(&mut self) {
        *self = Self::default();
    }

    /// Submission failed: back to `Idle` with the draft intact and the
    /// form still open, surfacing `message`.
    pub fn finish_failure(&mut self, message: String) {
        self.phase = SubmitPhase::Idle;
        self.error = Some(message);
    }
}

/// Draft for one inspection/audit entry, always scoped to an existing
/// asset. Serialized as the `POST /api/asset-audit` body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDraft {
    pub asset_id: String,
    pub checked_by: String,
    pub check_date: String,
    pub status: String,
    pub remarks: String,
    pub images: Vec<String>,
}

/// Condition values the audit endpoint accepts.
pub const CONDITION_OPTIONS: [&str; 5] = ["Good", "Broken", "Pending", "X", "Poor"];

impl InspectionDraft {
    /// Fresh draft bound to `asset_id`, prefilled with the current
    /// inspector and date and the default condition.
    pub fn for_asset(asset_id: &str, checked_by: &str, check_date: &str) -> Self {
        Self {
            asset_id: asset_id.to_owned(),
            checked_by: checked_by.to_owned(),
            check_date: check_date.to_owned(),
            status: "Good".to_owned(),
            remarks: String::new(),
            images: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.asset_id.is_empty() {
            return Err("No asset is bound to this inspection");
        }
        if self.status.trim().is_empty() {
            return Err("Condition is required");
        }
        Ok(())
    }
}

/// State machine for the embedded inspection entry form. Same phase
/// semantics as `AssetFormState`; the asset is contextually fixed, so
/// there is no editing-id routing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InspectionFormState {
    pub draft: InspectionDraft,
    pub phase: SubmitPhase,
    pub error: Option<String>,
}

impl InspectionFormState {
    pub fn new(draft: InspectionDraft) -> Self {
        Self {
            draft,
            phase: SubmitPhase::Idle,
            error: None,
        }
    }

    /// Enter `Submitting` unless a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == SubmitPhase::Submitting {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        self.error = None;
        true
    }

    /// Entry confirmed by the server; reset for the next entry.
    pub fn finish_success(&mut self) {
        let asset_id = self.draft.asset_id.clone();
        let checked_by = self.draft.checked_by.clone();
        let check_date = self.draft.check_date.clone();
        *self = Self::new(InspectionDraft::for_asset(&asset_id, &checked_by, &check_date));
    }

    /// Entry rejected or the request failed: keep the draft for
    /// correction and surface `message`.
    pub fn finish_failure(&mut self, message: String) {
        self.phase = SubmitPhase::Idle;
        self.error = Some(message);
    }
}

/// Parse a currency/number input field. Blank and unparseable input both
/// mean "no value" rather than an error, matching the optional columns.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}
