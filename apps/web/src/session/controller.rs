//! UI Step Controller — the per-session state machine behind the screens.
//!
//! Edges:
//!   Idle ──submit──▶ Analyzing ──settle──▶ Succeeded | Failed
//!   Succeeded | Failed | Analyzing ──reset──▶ Idle
//!
//! Resetting while analyzing aborts the in-flight task and bumps the epoch, so a
//! reply that still arrives for the old epoch is dropped instead of overwriting
//! the new state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::evaluation::encoder::EncodedDocument;
use crate::evaluation::evaluator::{EvaluationError, Evaluator};
use crate::evaluation::models::EvaluationResult;

/// The only message users see for a failed analysis, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Analiz sırasında bir hata oluştu. Lütfen tekrar deneyin.";

#[derive(Debug, Clone)]
pub enum AppStep {
    Idle,
    Analyzing {
        candidate_name: String,
        file_name: String,
        started_at: DateTime<Utc>,
    },
    Succeeded {
        result: Arc<EvaluationResult>,
        completed_at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

impl AppStep {
    pub fn name(&self) -> &'static str {
        match self {
            AppStep::Idle => "input",
            AppStep::Analyzing { .. } => "analyzing",
            AppStep::Succeeded { .. } => "result",
            AppStep::Failed { .. } => "error",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("cannot submit while the session is in the '{0}' step")]
    NotIdle(&'static str),

    #[error("candidate name and thesis file are both required")]
    Incomplete,
}

struct Inner {
    step: AppStep,
    epoch: u64,
    in_flight: Option<AbortHandle>,
    last_activity: Instant,
}

pub struct Controller {
    id: Uuid,
    evaluator: Arc<dyn Evaluator>,
    inner: Mutex<Inner>,
}

impl Controller {
    pub fn new(id: Uuid, evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            id,
            evaluator,
            inner: Mutex::new(Inner {
                step: AppStep::Idle,
                epoch: 0,
                in_flight: None,
                last_activity: Instant::now(),
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current step. Results are shared, so this is cheap.
    pub async fn snapshot(&self) -> AppStep {
        self.inner.lock().await.step.clone()
    }

    pub async fn last_activity(&self) -> Instant {
        self.inner.lock().await.last_activity
    }

    /// `Idle → Analyzing`, or straight to `Failed` when the evaluator is not
    /// ready (no request is attempted in that case).
    pub async fn submit(
        self: &Arc<Self>,
        candidate_name: String,
        document: EncodedDocument,
    ) -> Result<(), TransitionError> {
        let mut inner = self.inner.lock().await;

        if !matches!(inner.step, AppStep::Idle) {
            return Err(TransitionError::NotIdle(inner.step.name()));
        }
        if candidate_name.trim().is_empty() {
            return Err(TransitionError::Incomplete);
        }

        inner.epoch += 1;
        inner.last_activity = Instant::now();
        let epoch = inner.epoch;

        if let Err(e) = self.evaluator.check_ready() {
            error!("Session {} cannot start evaluation: {e}", self.id);
            inner.step = AppStep::Failed {
                message: FAILURE_MESSAGE.to_string(),
            };
            return Ok(());
        }

        info!(
            "Session {} analyzing {} for {}",
            self.id, document.file_name, candidate_name
        );
        inner.step = AppStep::Analyzing {
            candidate_name: candidate_name.clone(),
            file_name: document.file_name.clone(),
            started_at: Utc::now(),
        };

        let this = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let outcome = this.evaluator.evaluate(&candidate_name, &document).await;
            this.settle(epoch, outcome).await;
        });
        inner.in_flight = Some(handle.abort_handle());

        Ok(())
    }

    async fn settle(&self, epoch: u64, outcome: Result<EvaluationResult, EvaluationError>) {
        let mut inner = self.inner.lock().await;

        if inner.epoch != epoch || !matches!(inner.step, AppStep::Analyzing { .. }) {
            debug!("Session {} dropping stale reply for epoch {epoch}", self.id);
            return;
        }

        inner.in_flight = None;
        inner.last_activity = Instant::now();
        inner.step = match outcome {
            Ok(result) => {
                info!(
                    "Session {} evaluated: {} ({} findings)",
                    self.id,
                    result.decision.overall.as_str(),
                    result.findings_table.len()
                );
                AppStep::Succeeded {
                    result: Arc::new(result),
                    completed_at: Utc::now(),
                }
            }
            Err(e) => {
                error!("Session {} evaluation failed: {e}", self.id);
                AppStep::Failed {
                    message: FAILURE_MESSAGE.to_string(),
                }
            }
        };
    }

    /// Back to `Idle`, clearing any result or error. Cancels an in-flight evaluation.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(handle) = inner.in_flight.take() {
            handle.abort();
            info!("Session {} cancelled in-flight evaluation", self.id);
        }
        inner.epoch += 1;
        inner.last_activity = Instant::now();
        inner.step = AppStep::Idle;
    }
}

#[cfg(test)]
pub(crate) mod stubs {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::llm_client::LlmError;

    pub enum Reply {
        Success(EvaluationResult),
        Empty,
        NoCredential,
    }

    /// Evaluator that optionally waits on a gate before replying.
    pub struct StubEvaluator {
        pub reply: Reply,
        pub gate: Option<Notify>,
        pub calls: AtomicUsize,
    }

    impl StubEvaluator {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply,
                gate: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn gated(reply: Reply) -> Self {
            Self {
                gate: Some(Notify::new()),
                ..Self::new(reply)
            }
        }

        pub fn release(&self) {
            if let Some(gate) = &self.gate {
                gate.notify_one();
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Evaluator for StubEvaluator {
        fn check_ready(&self) -> Result<(), EvaluationError> {
            match self.reply {
                Reply::NoCredential => Err(EvaluationError::MissingCredential),
                _ => Ok(()),
            }
        }

        async fn evaluate(
            &self,
            _candidate_name: &str,
            _document: &EncodedDocument,
        ) -> Result<EvaluationResult, EvaluationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match &self.reply {
                Reply::Success(result) => Ok(result.clone()),
                Reply::Empty => Err(EvaluationError::Model(LlmError::EmptyContent)),
                Reply::NoCredential => Err(EvaluationError::MissingCredential),
            }
        }
    }

    pub fn pdf() -> EncodedDocument {
        EncodedDocument::encode("tez.pdf", "application/pdf", b"%PDF-1.7").unwrap()
    }

    /// Polls until the controller reaches `step`, or panics after ~2s.
    pub async fn wait_for(controller: &Controller, step: &str) -> AppStep {
        for _ in 0..200 {
            let snapshot = controller.snapshot().await;
            if snapshot.name() == step {
                return snapshot;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!(
            "controller never reached '{step}', stuck at '{}'",
            controller.snapshot().await.name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::stubs::*;
    use super::*;
    use crate::evaluation::models::fixtures::sample_result;

    fn controller(evaluator: Arc<StubEvaluator>) -> Arc<Controller> {
        Arc::new(Controller::new(Uuid::new_v4(), evaluator))
    }

    #[tokio::test]
    async fn test_success_walks_input_analyzing_result() {
        let evaluator = Arc::new(StubEvaluator::gated(Reply::Success(sample_result())));
        let ctrl = controller(evaluator.clone());

        let mut seen = vec![ctrl.snapshot().await.name()];
        ctrl.submit("Ayşe Yılmaz".to_string(), pdf()).await.unwrap();
        seen.push(ctrl.snapshot().await.name());
        evaluator.release();
        let done = wait_for(&ctrl, "result").await;
        seen.push(done.name());

        assert_eq!(seen, vec!["input", "analyzing", "result"]);
        match done {
            AppStep::Succeeded { result, .. } => assert_eq!(*result, sample_result()),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_stores_fixed_message() {
        let ctrl = controller(Arc::new(StubEvaluator::new(Reply::Empty)));
        ctrl.submit("Ayşe Yılmaz".to_string(), pdf()).await.unwrap();
        match wait_for(&ctrl, "error").await {
            AppStep::Failed { message } => assert_eq!(message, FAILURE_MESSAGE),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_credential_fails_immediately_without_request() {
        let evaluator = Arc::new(StubEvaluator::new(Reply::NoCredential));
        let ctrl = controller(evaluator.clone());
        ctrl.submit("Ayşe Yılmaz".to_string(), pdf()).await.unwrap();

        match ctrl.snapshot().await {
            AppStep::Failed { message } => assert_eq!(message, FAILURE_MESSAGE),
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(evaluator.calls(), 0);
    }

    #[tokio::test]
    async fn test_reset_from_result_and_error_returns_to_input() {
        let ok = controller(Arc::new(StubEvaluator::new(Reply::Success(sample_result()))));
        ok.submit("A".to_string(), pdf()).await.unwrap();
        wait_for(&ok, "result").await;
        ok.reset().await;
        assert!(matches!(ok.snapshot().await, AppStep::Idle));

        let failed = controller(Arc::new(StubEvaluator::new(Reply::Empty)));
        failed.submit("A".to_string(), pdf()).await.unwrap();
        wait_for(&failed, "error").await;
        failed.reset().await;
        assert!(matches!(failed.snapshot().await, AppStep::Idle));
    }

    #[tokio::test]
    async fn test_reset_while_analyzing_drops_late_reply() {
        let evaluator = Arc::new(StubEvaluator::gated(Reply::Success(sample_result())));
        let ctrl = controller(evaluator.clone());
        ctrl.submit("A".to_string(), pdf()).await.unwrap();
        ctrl.reset().await;
        evaluator.release();

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(matches!(ctrl.snapshot().await, AppStep::Idle));
    }

    #[tokio::test]
    async fn test_stale_settle_is_ignored_after_resubmit() {
        let evaluator = Arc::new(StubEvaluator::gated(Reply::Success(sample_result())));
        let ctrl = controller(evaluator.clone());
        ctrl.submit("A".to_string(), pdf()).await.unwrap();
        ctrl.reset().await;
        ctrl.submit("B".to_string(), pdf()).await.unwrap();

        ctrl.settle(1, Err(EvaluationError::MissingCredential)).await;
        assert_eq!(ctrl.snapshot().await.name(), "analyzing");

        evaluator.release();
        wait_for(&ctrl, "result").await;
    }

    #[tokio::test]
    async fn test_submit_rejected_outside_idle() {
        let evaluator = Arc::new(StubEvaluator::gated(Reply::Success(sample_result())));
        let ctrl = controller(evaluator.clone());
        ctrl.submit("A".to_string(), pdf()).await.unwrap();
        assert_eq!(
            ctrl.submit("A".to_string(), pdf()).await,
            Err(TransitionError::NotIdle("analyzing"))
        );
        evaluator.release();
    }

    #[tokio::test]
    async fn test_blank_name_is_incomplete() {
        let ctrl = controller(Arc::new(StubEvaluator::new(Reply::Empty)));
        assert_eq!(
            ctrl.submit("   ".to_string(), pdf()).await,
            Err(TransitionError::Incomplete)
        );
        assert!(matches!(ctrl.snapshot().await, AppStep::Idle));
    }
}
