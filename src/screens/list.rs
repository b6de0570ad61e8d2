use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, info};

use crate::dto::list_dto::total_pages;
use crate::error::{Error, Result};
use crate::models::{Creatable, Resource};
use crate::screens::table::{Table, TableRow};
use crate::services::resource_service::ResourceService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Everything a list screen renders.
#[derive(Debug, Clone)]
pub struct ListView<R> {
    pub status: ListStatus,
    pub items: Vec<R>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<R: Resource> ListView<R> {
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The table, or `None` while loading or after a failure.
    pub fn table(&self) -> Option<Table> {
        if self.status != ListStatus::Ready {
            return None;
        }
        Some(Table {
            headers: R::columns().iter().map(|c| c.to_string()).collect(),
            rows: self
                .items
                .iter()
                .map(|item| TableRow {
                    id: item.id().to_string(),
                    cells: item.cells(),
                })
                .collect(),
        })
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!("Page {} sur {}", self.current_page, self.total_pages)
    }
}

/// Paginated list screen for one resource.
///
/// Clones share state. Every fetch takes a ticket; a response is applied only
/// if no newer fetch started in the meantime.
pub struct ListController<R: Resource> {
    service: ResourceService<R>,
    page_size: u32,
    view: Arc<Mutex<ListView<R>>>,
    latest: Arc<AtomicU64>,
}

impl<R: Resource> Clone for ListController<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            page_size: self.page_size,
            view: Arc::clone(&self.view),
            latest: Arc::clone(&self.latest),
        }
    }
}

impl<R: Resource> ListController<R> {
    pub fn new(service: ResourceService<R>, page_size: u32) -> Self {
        Self {
            service,
            page_size: page_size.max(1),
            view: Arc::new(Mutex::new(ListView {
                status: ListStatus::Loading,
                items: Vec::new(),
                current_page: 1,
                total_pages: 1,
            })),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListView<R>> {
        // A panic while holding the lock leaves plain data behind; keep using it.
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> ListView<R> {
        self.lock().clone()
    }

    pub fn status(&self) -> ListStatus {
        self.lock().status.clone()
    }

    pub fn items(&self) -> Vec<R> {
        self.lock().items.clone()
    }

    pub fn current_page(&self) -> u32 {
        self.lock().current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.lock().total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Initial load when the screen is shown.
    pub async fn mount(&self) {
        self.refresh().await;
    }

    /// Re-fetches the current page.
    pub async fn refresh(&self) {
        let page = self.current_page();
        self.load_page(page).await;
    }

    pub async fn set_page(&self, page: u32) {
        self.load_page(page.max(1)).await;
    }

    pub async fn next_page(&self) {
        let view = self.snapshot();
        if view.can_go_next() {
            self.load_page(view.current_page + 1).await;
        }
    }

    pub async fn previous_page(&self) {
        let view = self.snapshot();
        if view.can_go_previous() {
            self.load_page(view.current_page - 1).await;
        }
    }

    fn begin(&self, page: u32) -> u64 {
        let mut view = self.lock();
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        view.current_page = page;
        view.status = ListStatus::Loading;
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    async fn load_page(&self, page: u32) {
        let ticket = self.begin(page);
        let result = self.fetch(page).await;

        let mut view = self.lock();
        if !self.is_current(ticket) {
            debug!(endpoint = R::ENDPOINT, page, ticket, "Dropping stale list response");
            return;
        }
        match result {
            Ok((items, pages)) => {
                debug!(endpoint = R::ENDPOINT, page, count = items.len(), pages, "List loaded");
                view.items = items;
                view.total_pages = pages;
                view.status = ListStatus::Ready;
            }
            Err(e) => {
                error!(endpoint = R::ENDPOINT, page, error = %e, "Failed to load list");
                view.items.clear();
                view.total_pages = 1;
                view.status = ListStatus::Failed(R::LOAD_ERROR.to_string());
            }
        }
    }

    async fn fetch(&self, page: u32) -> Result<(Vec<R>, u32)> {
        if !R::PAGINATED {
            let items = self.service.fetch_all().await?;
            return Ok((items, 1));
        }

        let slice = self.service.fetch_page(page, self.page_size).await?;
        let total = match slice.total {
            Some(total) => total,
            None => self.service.count().await?,
        };
        Ok((slice.items, total_pages(total, self.page_size)))
    }

    fn fail(&self, message: &str) {
        let mut view = self.lock();
        // Supersede any fetch still in flight so it cannot hide the error.
        self.latest.fetch_add(1, Ordering::SeqCst);
        view.status = ListStatus::Failed(message.to_string());
    }

    /// Deletes a record and reloads the current page. Returns false on failure.
    pub async fn delete(&self, id: &str) -> bool {
        match self.service.delete(id).await {
            Ok(()) => {
                info!(endpoint = R::ENDPOINT, id, "Deleted from list screen");
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(endpoint = R::ENDPOINT, id, error = %e, "Delete failed");
                self.fail(R::DELETE_ERROR);
                false
            }
        }
    }
}

impl<R: Creatable> ListController<R> {
    /// Creates a record and reloads the current page. Returns false on failure.
    pub async fn create(&self, payload: &R::Payload) -> bool {
        match self.service.create(payload).await {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(endpoint = R::ENDPOINT, error = %e, "Create failed");
                let message = match &e {
                    Error::UnexpectedResponse(msg) => msg.as_str(),
                    _ => R::CREATE_ERROR,
                };
                self.fail(message);
                false
            }
        }
    }
}
