//! Analysis session — runs analyses for one caller and owns the single latest-result slot.
//!
//! Flow per invocation: refuse empty input → bump sequence → cancel any in-flight run →
//! `Analyzing` (cosmetic pacing delay, cancelable) → compute → publish only if still the
//! newest invocation → back to `Idle`.
//!
//! The analyzer itself is stateless; everything mutable lives here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::analysis::analyzer::{AnalysisResult, ResumeAnalyzer};
use crate::analysis::scorer::ScoreBand;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPhase {
    Idle,
    Analyzing,
}

/// The published result of the most recent completed invocation.
#[derive(Debug, Clone, Serialize)]
pub struct LatestAnalysis {
    pub invocation: u64,
    pub completed_at: DateTime<Utc>,
    pub band: ScoreBand,
    pub message: String,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Empty job description. Nothing ran, nothing changed.
    Refused,
    /// A newer invocation started before this one finished; its result was discarded.
    Superseded(u64),
    /// Abandoned through `AnalysisSession::cancel`.
    Cancelled(u64),
    Completed(LatestAnalysis),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub phase: AnalysisPhase,
    pub invocations: u64,
    pub latest_invocation: Option<u64>,
}

struct InFlight {
    invocation: u64,
    cancel: CancellationToken,
}

pub struct AnalysisSession {
    analyzer: Arc<dyn ResumeAnalyzer>,
    delay: Duration,
    invocations: AtomicU64,
    in_flight: Mutex<Option<InFlight>>,
    latest: RwLock<Option<LatestAnalysis>>,
}

/// Clears the in-flight slot on every exit path, including a dropped future,
/// but only while the slot still belongs to this invocation.
struct InFlightGuard<'a> {
    session: &'a AnalysisSession,
    invocation: u64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.session.in_flight.lock();
        if in_flight
            .as_ref()
            .is_some_and(|f| f.invocation == self.invocation)
        {
            *in_flight = None;
        }
    }
}

impl AnalysisSession {
    pub fn new(analyzer: Arc<dyn ResumeAnalyzer>, delay: Duration) -> Self {
        Self {
            analyzer,
            delay,
            invocations: AtomicU64::new(0),
            in_flight: Mutex::new(None),
            latest: RwLock::new(None),
        }
    }

    pub async fn run(&self, job_description: &str, resume: &ResumeRecord) -> AnalysisOutcome {
        if job_description.trim().is_empty() {
            debug!("Empty job description, analysis refused");
            return AnalysisOutcome::Refused;
        }

        let invocation = self.invocations.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationToken::new();

        let stale = self.in_flight.lock().replace(InFlight {
            invocation,
            cancel: cancel.clone(),
        });
        if let Some(stale) = stale {
            info!(
                "Invocation {} supersedes in-flight invocation {}",
                invocation, stale.invocation
            );
            stale.cancel.cancel();
        }
        let _guard = InFlightGuard {
            session: self,
            invocation,
        };

        info!("Invocation {invocation}: analyzing");

        tokio::select! {
            _ = cancel.cancelled() => {
                return self.abandoned(invocation);
            }
            _ = tokio::time::sleep(self.delay) => {}
        }

        // Input was already screened above, so a refusal here is an analyzer bug.
        // The invocation number stays consumed; nothing is published.
        let Some(analysis) = self.analyzer.analyze(job_description, resume).await else {
            warn!("Invocation {invocation}: analyzer refused non-empty input, nothing published");
            return AnalysisOutcome::Refused;
        };

        // Publish under the in-flight lock so a concurrent start cannot slip between
        // the freshness check and the write.
        let in_flight = self.in_flight.lock();
        let still_current = in_flight
            .as_ref()
            .is_some_and(|f| f.invocation == invocation)
            && !cancel.is_cancelled();
        if !still_current {
            drop(in_flight);
            return self.abandoned(invocation);
        }

        let band = ScoreBand::from_score(analysis.score);
        let latest = LatestAnalysis {
            invocation,
            completed_at: Utc::now(),
            band,
            message: band.message().to_string(),
            analysis,
        };
        *self.latest.write() = Some(latest.clone());
        drop(in_flight);

        info!(
            "Invocation {}: complete, score {}/100 ({} matched, {} missing)",
            invocation,
            latest.analysis.score,
            latest.analysis.matched_keywords.len(),
            latest.analysis.missing_keywords.len()
        );

        AnalysisOutcome::Completed(latest)
    }

    /// Abandons the in-flight invocation, if any. Returns whether one was running.
    pub fn cancel(&self) -> bool {
        match self.in_flight.lock().take() {
            Some(flight) => {
                info!("Invocation {}: cancelled", flight.invocation);
                flight.cancel.cancel();
                true
            }
            None => false,
        }
    }

    pub fn latest(&self) -> Option<LatestAnalysis> {
        self.latest.read().clone()
    }

    pub fn status(&self) -> SessionStatus {
        let phase = if self.in_flight.lock().is_some() {
            AnalysisPhase::Analyzing
        } else {
            AnalysisPhase::Idle
        };
        SessionStatus {
            phase,
            invocations: self.invocations.load(Ordering::SeqCst),
            latest_invocation: self.latest.read().as_ref().map(|l| l.invocation),
        }
    }

    /// Any later invocation means this one was superseded; otherwise it was cancelled.
    fn abandoned(&self, invocation: u64) -> AnalysisOutcome {
        if self.invocations.load(Ordering::SeqCst) > invocation {
            info!("Invocation {invocation}: superseded, result discarded");
            AnalysisOutcome::Superseded(invocation)
        } else {
            AnalysisOutcome::Cancelled(invocation)
        }
    }
}
