use uuid::Uuid;

/// Client-side key for a posting that the service has not assigned an id to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalKey(Uuid);

impl LocalKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for LocalKey {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a posting came from. Not part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostingOrigin {
    #[default]
    Persisted,
    Pending(LocalKey),
}

impl PostingOrigin {
    pub fn is_pending(&self) -> bool {
        matches!(self, PostingOrigin::Pending(_))
    }
}
