//! Executing a rename plan on disk
//!
//! Nothing here aborts the batch: every record ends with an outcome and the
//! report accounts for all of them. There is no rollback.

use std::path::Path;

use serde::Serialize;
use shapes_core::{RenamePlan, RenameRecord};
use tracing::{info, warn};

/// What happened to one planned rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApplyOutcome {
    Renamed,
    /// Source already has its planned name
    Unchanged,
    SkippedMissingSource,
    SkippedTargetExists,
    Failed { cause: String },
}

impl ApplyOutcome {
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            ApplyOutcome::SkippedMissingSource | ApplyOutcome::SkippedTargetExists
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppliedRecord {
    pub record: RenameRecord,
    pub outcome: ApplyOutcome,
}

/// Per-record outcomes of one apply run, in plan order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyReport {
    pub results: Vec<AppliedRecord>,
}

impl ApplyReport {
    fn count(&self, pred: impl Fn(&ApplyOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn renamed(&self) -> usize {
        self.count(|o| *o == ApplyOutcome::Renamed)
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| *o == ApplyOutcome::Unchanged)
    }

    pub fn skipped(&self) -> usize {
        self.count(ApplyOutcome::is_skip)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ApplyOutcome::Failed { .. }))
    }

    pub fn is_clean(&self) -> bool {
        self.skipped() == 0 && self.failed() == 0
    }
}

/// Apply every record of `plan` in order
pub async fn apply(plan: &RenamePlan) -> ApplyReport {
    apply_records(plan.records()).await
}

async fn apply_records(records: &[RenameRecord]) -> ApplyReport {
    let mut report = ApplyReport::default();

    for record in records {
        let outcome = apply_record(record).await;
        match &outcome {
            ApplyOutcome::SkippedMissingSource => {
                warn!("Skip {}: source not found", record.source().display());
            }
            ApplyOutcome::SkippedTargetExists => {
                warn!("Skip {}: target already exists", record.destination().display());
            }
            ApplyOutcome::Failed { cause } => {
                warn!("Failed {}: {}", record.source().display(), cause);
            }
            ApplyOutcome::Renamed | ApplyOutcome::Unchanged => {}
        }

        report.results.push(AppliedRecord {
            record: record.clone(),
            outcome,
        });
    }

    info!(
        "Applied plan: {} renamed, {} unchanged, {} skipped, {} failed",
        report.renamed(),
        report.unchanged(),
        report.skipped(),
        report.failed()
    );

    report
}

async fn apply_record(record: &RenameRecord) -> ApplyOutcome {
    let source = record.source();
    let destination = record.destination();

    match exists(&source).await {
        Ok(true) => {}
        Ok(false) => return ApplyOutcome::SkippedMissingSource,
        Err(e) => return ApplyOutcome::Failed { cause: e.to_string() },
    }

    if source == destination {
        return ApplyOutcome::Unchanged;
    }

    match exists(&destination).await {
        Ok(false) => {}
        Ok(true) => return ApplyOutcome::SkippedTargetExists,
        Err(e) => return ApplyOutcome::Failed { cause: e.to_string() },
    }

    match tokio::fs::rename(&source, &destination).await {
        Ok(()) => ApplyOutcome::Renamed,
        Err(e) => ApplyOutcome::Failed { cause: e.to_string() },
    }
}

async fn exists(path: &Path) -> std::io::Result<bool> {
    tokio::fs::try_exists(path).await
}
