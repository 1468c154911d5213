use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

const SESSION_CAPACITY: u64 = 10_000;
const SESSION_TTL: Duration = Duration::from_secs(60 * 60); // 1 hour

/// Per-session UI state: which canned example (if any) currently populates
/// the input, and the draft review text itself.
#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    pub selected_example: Option<String>,
    pub draft: String,
}

/// Explicitly-scoped session store. Sessions expire after an hour of
/// inactivity-free lifetime; the cache bounds total memory.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<Uuid, ReviewSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        let cache = Cache::builder()
            .max_capacity(SESSION_CAPACITY)
            .time_to_live(SESSION_TTL)
            .build();

        Self { cache }
    }

    pub async fn create(&self) -> Uuid {
        let session_id = Uuid::new_v4();
        self.cache.insert(session_id, ReviewSession::default()).await;
        session_id
    }

    pub async fn get(&self, session_id: Uuid) -> Option<ReviewSession> {
        self.cache.get(&session_id).await
    }

    pub async fn update(&self, session_id: Uuid, session: ReviewSession) {
        self.cache.insert(session_id, session).await;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
