/// Lifecycle of a simulated fetch.
///
/// There is no way to express "loading with a result" or "done without a
/// result": the payload only exists in `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Waiting for the delay to elapse
    Loading,
    /// The payload has arrived and will not change again
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            LoadState::Loading => None,
            LoadState::Ready(value) => Some(value),
        }
    }
}

/// What a rendering callback receives from a loader: `{loading, result}`.
#[derive(Debug, PartialEq, Eq)]
pub struct LoaderView<'a, T> {
    pub loading: bool,
    pub result: Option<&'a T>,
}

// Manual impls: deriving would require `T: Clone`/`T: Copy`.
impl<T> Clone for LoaderView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LoaderView<'_, T> {}

impl<'a, T> From<&'a LoadState<T>> for LoaderView<'a, T> {
    fn from(state: &'a LoadState<T>) -> Self {
        Self {
            loading: state.is_loading(),
            result: state.result(),
        }
    }
}

impl<'a, T> LoaderView<'a, T> {
    /// A view that is still loading
    pub fn loading() -> Self {
        Self {
            loading: true,
            result: None,
        }
    }

    /// A view with a result
    pub fn ready(result: &'a T) -> Self {
        Self {
            loading: false,
            result: Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_has_no_result() {
        let state: LoadState<u8> = LoadState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn test_ready_exposes_result() {
        let state = LoadState::Ready("hats");
        assert!(!state.is_loading());
        assert_eq!(state.result(), Some(&"hats"));
    }

    #[test]
    fn test_view_mirrors_state() {
        let loading: LoadState<u8> = LoadState::Loading;
        assert_eq!(LoaderView::from(&loading), LoaderView::loading());

        let ready = LoadState::Ready(5u8);
        let view = LoaderView::from(&ready);
        assert!(!view.loading);
        assert_eq!(view.result, Some(&5));
    }
}
