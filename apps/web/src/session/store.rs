//! In-memory registry of review sessions, one controller per browser flow.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::evaluation::evaluator::Evaluator;
use crate::session::controller::Controller;

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Controller>>>,
    evaluator: Arc<dyn Evaluator>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(evaluator: Arc<dyn Evaluator>, ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            evaluator,
            ttl,
        }
    }

    pub async fn create(&self) -> Arc<Controller> {
        let id = Uuid::new_v4();
        let controller = Arc::new(Controller::new(id, Arc::clone(&self.evaluator)));
        self.sessions.write().await.insert(id, Arc::clone(&controller));
        controller
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Controller>> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions idle for longer than the TTL, cancelling any in-flight work.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let snapshot: Vec<(Uuid, Arc<Controller>)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, c)| (*id, Arc::clone(c)))
            .collect();

        let mut expired = Vec::new();
        for (id, controller) in snapshot {
            if now.saturating_duration_since(controller.last_activity().await) > self.ttl {
                controller.reset().await;
                expired.push(id);
            }
        }

        if !expired.is_empty() {
            let mut sessions = self.sessions.write().await;
            for id in &expired {
                sessions.remove(id);
            }
            info!("Evicted {} idle sessions", expired.len());
        }
        expired.len()
    }

    /// Runs `evict_idle` on a fixed interval for the lifetime of the process.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                store.evict_idle(Instant::now()).await;
            }
        })
    }
}
