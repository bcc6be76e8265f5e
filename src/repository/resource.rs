//! Tri-state wrapper normalizing network outcomes for state holders.

/// Outcome of a repository call as seen by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    /// Request in flight. Repositories never return this; state holders may.
    Loading,
    Success(T),
    Error { message: String },
}

impl<T> Resource<T> {
    pub fn success(data: T) -> Self {
        Resource::Success(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Resource::Error {
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error { message } => Resource::Error { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ok: Resource<u32> = Resource::success(3);
        assert_eq!(ok.data(), Some(&3));
        assert!(ok.message().is_none());

        let err: Resource<u32> = Resource::error("fallo");
        assert_eq!(err.message(), Some("fallo"));
        assert!(err.data().is_none());

        assert!(Resource::<u32>::Loading.is_loading());
    }

    #[test]
    fn test_map_keeps_error() {
        let err: Resource<u32> = Resource::error("x");
        assert_eq!(err.map(|n| n + 1), Resource::error("x"));
        assert_eq!(Resource::success(1).map(|n| n + 1), Resource::success(2));
    }
}
