//! Change notifications for the document store.
//!
//! Each successful mutation bumps a revision counter and records what
//! changed. Clients hold on to the revision from their last snapshot and wait
//! for a newer one instead of polling every collection.

use std::sync::Arc;
use std::time::Duration;

use shared::{ChangeKind, Collection};
use tokio::sync::watch;
use tracing::debug;

/// The latest change published on the feed
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeNotice {
    pub revision: u64,
    /// None only for the initial notice at revision 0
    pub collection: Option<Collection>,
    pub kind: Option<ChangeKind>,
    pub document_id: Option<String>,
}

impl ChangeNotice {
    fn initial() -> Self {
        Self {
            revision: 0,
            collection: None,
            kind: None,
            document_id: None,
        }
    }
}

#[derive(Clone)]
pub struct ChangeFeed {
    sender: Arc<watch::Sender<ChangeNotice>>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(ChangeNotice::initial());
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Record a change and return the new revision
    pub fn publish(&self, collection: Collection, kind: ChangeKind, document_id: &str) -> u64 {
        let mut revision = 0;
        self.sender.send_modify(|notice| {
            notice.revision += 1;
            notice.collection = Some(collection);
            notice.kind = Some(kind);
            notice.document_id = Some(document_id.to_string());
            revision = notice.revision;
        });
        debug!(
            "Published change {:?} {:?} {} at revision {}",
            kind, collection, document_id, revision
        );
        revision
    }

    pub fn current(&self) -> ChangeNotice {
        self.sender.borrow().clone()
    }

    pub fn revision(&self) -> u64 {
        self.sender.borrow().revision
    }

    pub fn subscribe(&self) -> watch::Receiver<ChangeNotice> {
        self.sender.subscribe()
    }

    /// Wait until the revision moves past `since`.
    ///
    /// Returns immediately when the feed is already ahead of `since`, and
    /// None if nothing changed before `timeout` elapsed.
    pub async fn wait_for_change(&self, since: u64, timeout: Duration) -> Option<ChangeNotice> {
        let mut receiver = self.subscribe();
        let result = tokio::time::timeout(timeout, receiver.wait_for(|notice| notice.revision > since)).await;
        match result {
            Ok(Ok(notice)) => Some(notice.clone()),
            _ => None,
        }
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}
