//! Calculator session - the state behind one view of the calculator page.
//!
//! # Invariants
//!
//! - Changing the industry or the tonnage clears the result, closes the
//!   report panel and cancels any pending calculation.
//! - A calculation ticket completes only if no newer calculation or input
//!   change happened after it was issued.
//! - The report panel opens only once a result is shown.

use serde::Serialize;

use crate::domain::estimation::{
    preview_credits, EstimateRequest, EstimateResult, IndustryCatalog, Tonnage, DEFAULT_INDUSTRY,
};
use crate::domain::foundation::{CalculatorSessionId, StateMachine, Timestamp, ValidationError};
use crate::domain::leads::ContactDetails;

use super::errors::CalculatorError;
use super::report::EstimateReport;

/// Whether a paced calculation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationPhase {
    #[default]
    Idle,
    Calculating,
}

/// Export panel under the result: hidden, asking for contact details, or done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPanel {
    #[default]
    Hidden,
    ContactOpen,
    Sent,
}

impl StateMachine for ReportPanel {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ReportPanel::*;
        matches!(
            (self, target),
            (Hidden, ContactOpen) | (ContactOpen, Sent) | (ContactOpen, Hidden) | (Sent, Hidden)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ReportPanel::*;
        match self {
            Hidden => vec![ContactOpen],
            ContactOpen => vec![Sent, Hidden],
            Sent => vec![Hidden],
        }
    }
}

/// Handle for one pending calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationTicket {
    pub session_id: CalculatorSessionId,
    pub generation: u64,
    pub request: EstimateRequest,
}

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    id: CalculatorSessionId,
    industry: String,
    tonnage_input: String,
    result: Option<EstimateResult>,
    phase: CalculationPhase,
    generation: u64,
    report_panel: ReportPanel,
    contact: Option<ContactDetails>,
    created_at: Timestamp,
    touched_at: Timestamp,
}

impl CalculatorSession {
    /// Starts a fresh session with the default industry and empty input.
    pub fn new(id: CalculatorSessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            industry: DEFAULT_INDUSTRY.to_string(),
            tonnage_input: String::new(),
            result: None,
            phase: CalculationPhase::Idle,
            generation: 0,
            report_panel: ReportPanel::Hidden,
            contact: None,
            created_at: now,
            touched_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CalculatorSessionId {
        &self.id
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn tonnage_input(&self) -> &str {
        &self.tonnage_input
    }

    pub fn result(&self) -> Option<&EstimateResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> CalculationPhase {
        self.phase
    }

    pub fn is_calculating(&self) -> bool {
        self.phase == CalculationPhase::Calculating
    }

    pub fn report_panel(&self) -> ReportPanel {
        self.report_panel
    }

    pub fn contact(&self) -> Option<&ContactDetails> {
        self.contact.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn touched_at(&self) -> &Timestamp {
        &self.touched_at
    }

    /// Factor for the selected industry (fallback applied).
    pub fn conversion_factor(&self, catalog: &IndustryCatalog) -> f64 {
        catalog.factor_for(&self.industry)
    }

    /// Live credit preview, only while no result is shown.
    pub fn preview_credits(&self, catalog: &IndustryCatalog) -> Option<u64> {
        if self.result.is_some() {
            return None;
        }
        preview_credits(catalog, &self.industry, &self.tonnage_input)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input changes
    // ─────────────────────────────────────────────────────────────────────────

    pub fn select_industry(&mut self, industry: &str) -> Result<(), CalculatorError> {
        let industry = industry.trim();
        if industry.is_empty() {
            return Err(ValidationError::empty_field("industry").into());
        }
        self.industry = industry.to_string();
        self.reset_output();
        Ok(())
    }

    pub fn set_tonnage_input(&mut self, input: impl Into<String>) {
        self.tonnage_input = input.into();
        self.reset_output();
    }

    fn reset_output(&mut self) {
        self.result = None;
        self.contact = None;
        self.report_panel = ReportPanel::Hidden;
        self.phase = CalculationPhase::Idle;
        self.generation += 1;
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Calculation
    // ─────────────────────────────────────────────────────────────────────────

    /// Issues a ticket for the current inputs, superseding any pending one.
    ///
    /// Returns `None`, with the result cleared, when the tonnage is not a
    /// positive finite number.
    pub fn begin_calculation(&mut self) -> Option<CalculationTicket> {
        self.generation += 1;
        self.touch();

        let Some(tonnage) = Tonnage::parse(&self.tonnage_input) else {
            self.result = None;
            self.phase = CalculationPhase::Idle;
            return None;
        };

        self.phase = CalculationPhase::Calculating;
        Some(CalculationTicket {
            session_id: self.id,
            generation: self.generation,
            request: EstimateRequest::new(self.industry.clone(), tonnage),
        })
    }

    /// Publishes a result for `ticket`. Returns `false` and leaves the
    /// session untouched when the ticket is stale.
    pub fn complete_calculation(&mut self, ticket: &CalculationTicket, result: EstimateResult) -> bool {
        if ticket.session_id != self.id
            || ticket.generation != self.generation
            || self.phase != CalculationPhase::Calculating
        {
            return false;
        }
        self.result = Some(result);
        self.phase = CalculationPhase::Idle;
        self.touch();
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Report export
    // ─────────────────────────────────────────────────────────────────────────

    /// Shows the contact form for the report. Idempotent while open.
    pub fn open_contact_form(&mut self) -> Result<(), CalculatorError> {
        if self.result.is_none() {
            return Err(CalculatorError::EstimateMissing);
        }
        if self.report_panel == ReportPanel::ContactOpen {
            return Ok(());
        }
        self.report_panel = self
            .report_panel
            .transition_to(ReportPanel::ContactOpen)
            .map_err(|_| CalculatorError::invalid_state("report already sent"))?;
        self.touch();
        Ok(())
    }

    /// Captures contact details and produces the report.
    pub fn request_report(&mut self, email: &str, phone: &str) -> Result<EstimateReport, CalculatorError> {
        let result = self.result.ok_or(CalculatorError::EstimateMissing)?;
        if self.report_panel != ReportPanel::ContactOpen {
            return Err(CalculatorError::invalid_state(
                "contact form is not open for this estimate",
            ));
        }
        let tonnage = Tonnage::parse(&self.tonnage_input).ok_or(CalculatorError::EstimateMissing)?;
        let contact = ContactDetails::parse(email, phone)?;

        self.report_panel = self
            .report_panel
            .transition_to(ReportPanel::Sent)
            .map_err(|e| CalculatorError::invalid_state(e.to_string()))?;
        self.contact = Some(contact.clone());
        self.touch();

        Ok(EstimateReport {
            industry: self.industry.clone(),
            tonnage,
            tonnage_text: self.tonnage_input.trim().to_string(),
            result,
            contact,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifetime
    // ─────────────────────────────────────────────────────────────────────────

    pub fn touch(&mut self) {
        self.touched_at = Timestamp::now();
    }

    /// True once the session has been idle for longer than `ttl_secs`.
    pub fn is_expired(&self, now: &Timestamp, ttl_secs: u64) -> bool {
        now.duration_since(&self.touched_at).num_seconds() > ttl_secs as i64
    }
}
