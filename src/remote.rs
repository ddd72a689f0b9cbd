//! Fetch, mutate and refetch state shared by every dashboard view.
//!
//! A [`RemoteResource`] holds the last successfully loaded value together with the error of the
//! last failed load. Each kind of operation runs in its own slot: while a slot is busy, a second
//! request of the same kind is suppressed, and different slots never block each other.
//!
//! Views driven by signals use the split-phase calls ([`RemoteResource::begin_fetch`] /
//! [`RemoteResource::finish_fetch`], [`RemoteResource::begin`] / [`RemoteResource::finish`]);
//! everything else can await [`RemoteResource::refresh`] and [`RemoteResource::mutate`].
//!
//! A mutation that succeeds while a load is in flight cannot start its own refetch. It marks the
//! resource instead, and [`RemoteResource::finish_fetch`] tells the caller to load once more, since
//! the in-flight response may predate the mutation.

use std::future::Future;

use dioxus_logger::tracing;

use crate::error::ApiError;

/// Load state of a resource as a view renders it.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

/// Kinds of operation that may be in flight at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Fetch,
    Submit,
    Approve,
    Reject,
}

/// Busy flags, one per [`SlotKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSlots {
    fetch: bool,
    submit: bool,
    approve: bool,
    reject: bool,
}

impl OperationSlots {
    pub fn is_busy(&self, slot: SlotKind) -> bool {
        *self.flag(slot)
    }

    /// Marks `slot` busy, returning `false` when it already was.
    pub fn acquire(&mut self, slot: SlotKind) -> bool {
        let flag = self.flag_mut(slot);
        if *flag {
            return false;
        }

        *flag = true;
        true
    }

    pub fn release(&mut self, slot: SlotKind) {
        *self.flag_mut(slot) = false;
    }

    fn flag(&self, slot: SlotKind) -> &bool {
        match slot {
            SlotKind::Fetch => &self.fetch,
            SlotKind::Submit => &self.submit,
            SlotKind::Approve => &self.approve,
            SlotKind::Reject => &self.reject,
        }
    }

    fn flag_mut(&mut self, slot: SlotKind) -> &mut bool {
        match slot {
            SlotKind::Fetch => &mut self.fetch,
            SlotKind::Submit => &mut self.submit,
            SlotKind::Approve => &mut self.approve,
            SlotKind::Reject => &mut self.reject,
        }
    }
}

/// A value owned by the housing API, cached for one view.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResource<T> {
    value: Option<T>,
    load_error: Option<ApiError>,
    action_error: Option<ApiError>,
    slots: OperationSlots,
    refetch_requested: bool,
}

/// A fetched listing of records.
pub type RemoteCollection<R> = RemoteResource<Vec<R>>;

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self {
            value: None,
            load_error: None,
            action_error: None,
            slots: OperationSlots::default(),
            refetch_requested: false,
        }
    }
}

impl<T> RemoteResource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successfully loaded value, possibly stale after a failed refetch.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Error of the most recent load, cleared by the next successful one.
    pub fn load_error(&self) -> Option<&ApiError> {
        self.load_error.as_ref()
    }

    /// Error of the most recent mutation, cleared when the next one starts.
    pub fn action_error(&self) -> Option<&ApiError> {
        self.action_error.as_ref()
    }

    pub fn is_busy(&self, slot: SlotKind) -> bool {
        self.slots.is_busy(slot)
    }

    pub fn is_loading(&self) -> bool {
        self.is_busy(SlotKind::Fetch)
    }

    /// State to render.
    ///
    /// A loaded value wins over a later load error so stale rows stay visible; callers show
    /// [`RemoteResource::load_error`] alongside them.
    pub fn state(&self) -> Loadable<&T> {
        match (&self.value, &self.load_error) {
            (Some(value), _) => Loadable::Ready(value),
            (None, _) if self.is_loading() => Loadable::Loading,
            (None, Some(err)) => Loadable::Failed(err.clone()),
            (None, None) => Loadable::Idle,
        }
    }

    /// Whether a mutation succeeded during the load now in flight.
    pub fn is_refetch_requested(&self) -> bool {
        self.refetch_requested
    }

    /// Starts a load; `false` means one is already in flight and no request should be sent.
    pub fn begin_fetch(&mut self) -> bool {
        if !self.slots.acquire(SlotKind::Fetch) {
            return false;
        }

        self.refetch_requested = false;
        true
    }

    /// Records the result of a load started with [`RemoteResource::begin_fetch`].
    ///
    /// Returns `true` when a mutation succeeded while this load was in flight. The stored value
    /// may not reflect it yet, and the caller has to load again.
    pub fn finish_fetch(&mut self, result: Result<T, ApiError>) -> bool {
        self.slots.release(SlotKind::Fetch);
        let reload = std::mem::take(&mut self.refetch_requested);

        match result {
            Ok(value) => {
                self.value = Some(value);
                self.load_error = None;
            }
            Err(err) => {
                tracing::warn!("Keeping previous value after failed load: {}", err);
                self.load_error = Some(err);
            }
        }

        if reload {
            tracing::debug!("Mutation landed during load, loading again");
        }

        reload
    }

    /// Starts a mutation in `slot`; `false` means the slot is busy.
    pub fn begin(&mut self, slot: SlotKind) -> bool {
        if !self.slots.acquire(slot) {
            return false;
        }

        self.action_error = None;
        true
    }

    /// Records the outcome of a mutation started with [`RemoteResource::begin`].
    ///
    /// The loaded value is never touched here; a successful mutation is followed by a refetch.
    /// When a load is already in flight, that load is flagged so its caller loads again.
    pub fn finish<R>(&mut self, slot: SlotKind, result: Result<R, ApiError>) -> Result<R, ApiError> {
        self.slots.release(slot);

        match &result {
            Ok(_) if self.is_loading() => self.refetch_requested = true,
            Ok(_) => {}
            Err(err) => self.action_error = Some(err.clone()),
        }

        result
    }

    /// Awaits `fetch` and stores its result.
    ///
    /// Returns `false` without polling `fetch` when a load is already in flight.
    pub async fn refresh<F>(&mut self, fetch: F) -> bool
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        if !self.begin_fetch() {
            tracing::debug!("Load already in flight, skipping");
            return false;
        }

        let result = fetch.await;
        let _ = self.finish_fetch(result);
        true
    }

    /// Awaits `mutation` in `slot`, then refetches with `refetch` when it succeeded.
    ///
    /// # Returns
    /// - `None` - `slot` was busy, `mutation` was dropped without being polled
    /// - `Some(Ok(R))` - mutation succeeded and the value was refetched
    /// - `Some(Err(ApiError))` - mutation failed, the loaded value is unchanged
    pub async fn mutate<R, M, F, Fut>(
        &mut self,
        slot: SlotKind,
        mutation: M,
        refetch: F,
    ) -> Option<Result<R, ApiError>>
    where
        M: Future<Output = Result<R, ApiError>>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if !self.begin(slot) {
            tracing::debug!("{:?} already in flight, skipping", slot);
            return None;
        }

        let result = mutation.await;
        let result = self.finish(slot, result);

        if result.is_ok() {
            self.refresh(refetch()).await;
        }

        Some(result)
    }
}
