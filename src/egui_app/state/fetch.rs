/// Lifecycle of one background fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No request has been issued yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The request failed; fallback data is shown with this message.
    Errored(String),
}

/// Remote dataset plus its fetch status.
///
/// A failed fetch still carries data: the fixed sample dataset substituted
/// for display.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteSlot<T> {
    status: FetchStatus,
    data: Option<T>,
}

impl<T> Default for RemoteSlot<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
        }
    }
}

/// What a page should render for a slot.
#[derive(Debug, PartialEq)]
pub enum SlotView<'a, T> {
    Idle,
    Loading,
    Ready {
        data: &'a T,
        /// Error text when `data` is the fallback sample.
        fallback_warning: Option<&'a str>,
    },
}

impl<T> RemoteSlot<T> {
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.status, FetchStatus::Errored(_))
    }

    /// Mark the request as in flight. Previously fetched data is kept until
    /// the new result arrives.
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    pub fn finish(&mut self, data: T) {
        self.status = FetchStatus::Loaded;
        self.data = Some(data);
    }

    /// Record a failure and substitute `fallback` for display.
    pub fn fail(&mut self, message: impl Into<String>, fallback: T) {
        self.status = FetchStatus::Errored(message.into());
        self.data = Some(fallback);
    }

    pub fn view(&self) -> SlotView<'_, T> {
        match (&self.status, self.data.as_ref()) {
            (FetchStatus::Loading, _) => SlotView::Loading,
            (FetchStatus::Loaded, Some(data)) => SlotView::Ready {
                data,
                fallback_warning: None,
            },
            (FetchStatus::Errored(message), Some(data)) => SlotView::Ready {
                data,
                fallback_warning: Some(message.as_str()),
            },
            _ => SlotView::Idle,
        }
    }
}
