//! Sample blog posting model and store.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A blog posting in the sample domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostingModel {
    /// The posting's id, allocated by the store.
    pub id: u64,
    /// The posting's headline.
    pub title: String,
    /// An optional subtitle.
    pub subtitle: Option<String>,
    /// The article body.
    pub content: String,
    /// The id of the person who wrote the posting.
    pub creator_id: u64,
}

/// The data needed to create or update a blog posting.
#[derive(Debug, Clone)]
pub struct BlogPostingData {
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    pub creator_id: u64,
}

/// In-memory blog posting store, same shape as the person store.
#[derive(Debug, Default)]
pub struct BlogPostingStore {
    postings: RwLock<BTreeMap<u64, BlogPostingModel>>,
    next_id: AtomicU64,
}

impl BlogPostingStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with sample postings by the seeded people.
    pub fn seeded() -> Self {
        let store = Self::new();
        for data in seed_postings() {
            store.create(data);
        }
        store
    }

    /// Add a new posting, allocating its id.
    #[instrument(skip(self, data), fields(title = %data.title))]
    pub fn create(&self, data: BlogPostingData) -> BlogPostingModel {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let posting = BlogPostingModel {
            id,
            title: data.title,
            subtitle: data.subtitle,
            content: data.content,
            creator_id: data.creator_id,
        };
        self.write_lock().insert(id, posting.clone());
        debug!(id, "created blog posting");
        posting
    }

    /// The posting with the given id, if present.
    pub fn get(&self, id: u64) -> Option<BlogPostingModel> {
        self.read_lock().get(&id).cloned()
    }

    /// Total number of postings.
    pub fn count(&self) -> usize {
        self.read_lock().len()
    }

    /// One page of postings in id order, plus the total count.
    pub fn page(&self, page_number: usize, per_page: usize) -> (Vec<BlogPostingModel>, usize) {
        let postings = self.read_lock();
        let total = postings.len();
        let skip = page_number.saturating_sub(1).saturating_mul(per_page);
        let items = postings.values().skip(skip).take(per_page).cloned().collect();
        (items, total)
    }

    /// Replace the posting with the given id, if present.
    #[instrument(skip(self, data))]
    pub fn update(&self, id: u64, data: BlogPostingData) -> Option<BlogPostingModel> {
        let mut postings = self.write_lock();
        let posting = postings.get_mut(&id)?;
        *posting = BlogPostingModel {
            id,
            title: data.title,
            subtitle: data.subtitle,
            content: data.content,
            creator_id: data.creator_id,
        };
        debug!(id, "updated blog posting");
        Some(posting.clone())
    }

    /// Remove the posting with the given id, returning it if present.
    #[instrument(skip(self))]
    pub fn remove(&self, id: u64) -> Option<BlogPostingModel> {
        let removed = self.write_lock().remove(&id);
        if removed.is_some() {
            debug!(id, "removed blog posting");
        }
        removed
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<u64, BlogPostingModel>> {
        self.postings.read().expect("blog posting store lock poisoned")
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<u64, BlogPostingModel>> {
        self.postings.write().expect("blog posting store lock poisoned")
    }
}

fn seed_postings() -> Vec<BlogPostingData> {
    vec![
        BlogPostingData {
            title: "Designing Evolvable APIs".into(),
            subtitle: Some("Links over version numbers".into()),
            content: "Clients that follow links survive server refactorings that would \
                      break clients built around hard-coded URL templates."
                .into(),
            creator_id: 0,
        },
        BlogPostingData {
            title: "Pagination Done Right".into(),
            subtitle: None,
            content: "Emit first, last and current page links always; next and previous \
                      only when they exist."
                .into(),
            creator_id: 1,
        },
        BlogPostingData {
            title: "Embedding Without Tears".into(),
            subtitle: Some("When to inline related resources".into()),
            content: "Embed what the client almost always needs; link the rest.".into(),
            creator_id: 0,
        },
    ]
}
