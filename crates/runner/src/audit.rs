//! Roster audit - load every data set, map the roster and run the progression
//! rules on each operator's current and target states.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use opsmgr_domain::{DateRange, Operator, ValidationReport};
use opsmgr_shared::{map_roster, MappingError};

use crate::ports::{RosterSource, SourceError};

/// Which of an operator's two progression states a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Current,
    Target,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Rule violations in one state of one operator.
#[derive(Debug, Clone)]
pub struct Finding {
    pub code: String,
    pub name: String,
    pub state: StateKind,
    pub report: ValidationReport,
}

impl Finding {
    /// One printable line per violation.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.report.violations().iter().map(move |violation| {
            format!(
                "{} {} [{}] {}: {}",
                self.code,
                self.name,
                self.state,
                violation.rule(),
                violation.message()
            )
        })
    }
}

/// Counts over the audited operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditSummary {
    /// Operators audited (after date filtering)
    pub total: usize,
    /// Operators with potential above 0
    pub owned: usize,
    /// Owned operators whose current state has reached the target
    pub completed: usize,
    /// Operators with at least one violation in either state
    pub invalid: usize,
    /// Master records that could not be mapped
    pub unmapped: usize,
}

/// Everything one audit run produced.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub summary: AuditSummary,
    pub findings: Vec<Finding>,
    pub mapping_failures: Vec<MappingError>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.mapping_failures.is_empty()
    }

    /// Printable lines: mapping failures first, then violations in roster order.
    pub fn lines(&self) -> Vec<String> {
        self.mapping_failures
            .iter()
            .map(|e| format!("skipped: {e}"))
            .chain(self.findings.iter().flat_map(Finding::lines))
            .collect()
    }
}

/// Audit use case over a [`RosterSource`].
pub struct RosterAudit {
    source: Arc<dyn RosterSource>,
    language: String,
    date_range: Option<DateRange>,
}

impl RosterAudit {
    pub fn new(source: Arc<dyn RosterSource>, language: impl Into<String>) -> Self {
        Self {
            source,
            language: language.into(),
            date_range: None,
        }
    }

    /// Only audit operators with a release, Paradox Simulation or module date in `range`.
    pub fn with_date_range(mut self, range: Option<DateRange>) -> Self {
        self.date_range = range;
        self
    }

    /// # Errors
    ///
    /// Returns `SourceError` if any data set cannot be loaded. Rule violations
    /// and unmappable records are part of the report, never errors.
    pub async fn run(&self) -> Result<AuditReport, SourceError> {
        let (master_data, game_data, user_data) = tokio::try_join!(
            self.source.load_master(),
            self.source.load_game_data(),
            self.source.load_user(),
        )?;
        let game_data = game_data.unwrap_or_default();

        let mapping = map_roster(&master_data, &game_data, &user_data, &self.language);

        let operators: Vec<Operator> = match &self.date_range {
            Some(range) => mapping
                .operators
                .into_iter()
                .filter(|op| op.has_date_in(range))
                .collect(),
            None => mapping.operators,
        };

        let mut report = AuditReport {
            mapping_failures: mapping.failures,
            ..AuditReport::default()
        };
        report.summary.unmapped = report.mapping_failures.len();

        for operator in &operators {
            let findings = audit_operator(operator, &self.language);
            if !findings.is_empty() {
                warn!(
                    operator = %operator.code(),
                    violations = findings.iter().map(|f| f.report.len()).sum::<usize>(),
                    "Operator has invalid progression"
                );
                report.summary.invalid += 1;
            }
            report.findings.extend(findings);
        }

        report.summary.total = operators.len();
        report.summary.owned = operators.iter().filter(|op| !op.is_unowned()).count();
        report.summary.completed = operators
            .iter()
            .filter(|op| !op.is_unowned() && op.is_completed())
            .count();

        let summary = report.summary;
        if summary.invalid > 0 || summary.unmapped > 0 {
            warn!(
                total = summary.total,
                owned = summary.owned,
                completed = summary.completed,
                invalid = summary.invalid,
                unmapped = summary.unmapped,
                "Roster audit found problems"
            );
        } else {
            info!(
                total = summary.total,
                owned = summary.owned,
                completed = summary.completed,
                "Roster audit clean"
            );
        }

        Ok(report)
    }
}

fn audit_operator(operator: &Operator, language: &str) -> Vec<Finding> {
    [
        (StateKind::Current, operator.validate_current()),
        (StateKind::Target, operator.validate_target()),
    ]
    .into_iter()
    .filter(|(_, report)| !report.is_valid())
    .map(|(state, report)| Finding {
        code: operator.code().to_string(),
        name: operator.name().get(language).to_string(),
        state,
        report,
    })
    .collect()
}
