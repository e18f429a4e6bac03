use std::fmt::Display;
use std::future::Future;

/// Where a roster fetch stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    /// The fetch failed; holds the error message as reported.
    Failed(String),
}

/// One fetch, with an explicit retry after failure.
///
/// There is no backoff and no automatic retry: a retry re-runs the same fetch
/// from scratch, and only when the caller asks for it.
#[derive(Debug)]
pub struct Loader<T> {
    state: LoadState<T>,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loader<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<T> {
        &self.state
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.state, LoadState::Failed(_))
    }

    /// Run `fetch` and record its outcome.
    pub async fn load<F, Fut, E>(&mut self, fetch: F) -> &LoadState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.state = LoadState::Loading;
        self.state = match fetch().await {
            Ok(value) => LoadState::Loaded(value),
            Err(error) => {
                tracing::warn!(%error, "load failed");
                LoadState::Failed(error.to_string())
            }
        };
        &self.state
    }

    /// Re-run `fetch` if the previous attempt failed. Other states are left
    /// alone.
    pub async fn retry<F, Fut, E>(&mut self, fetch: F) -> &LoadState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        if self.is_failed() {
            tracing::info!("retrying failed load");
            return self.load(fetch).await;
        }
        &self.state
    }

    /// The loaded value, or the failure message as an error.
    pub fn into_result(self) -> anyhow::Result<T> {
        match self.state {
            LoadState::Loaded(value) => Ok(value),
            LoadState::Failed(message) => Err(anyhow::anyhow!(message)),
            LoadState::Loading => Err(anyhow::anyhow!("load was never started")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::{LoadState, Loader};

    #[tokio::test]
    async fn success_lands_in_loaded() {
        let mut loader = Loader::new();
        let state = loader.load(|| async { Ok::<_, String>(vec![1, 2]) }).await;
        assert_eq!(state, &LoadState::Loaded(vec![1, 2]));
    }

    #[tokio::test]
    async fn failure_keeps_the_message() {
        let mut loader: Loader<Vec<u8>> = Loader::new();
        loader.load(|| async { Err("Airtable API error 503: down") }).await;
        assert_eq!(
            loader.state(),
            &LoadState::Failed("Airtable API error 503: down".to_string())
        );
        let err = loader.into_result().expect_err("failed load is an error");
        assert_eq!(err.to_string(), "Airtable API error 503: down");
    }

    #[tokio::test]
    async fn retry_reruns_only_after_failure() {
        let attempts = Cell::new(0);
        let fetch = || {
            attempts.set(attempts.get() + 1);
            let attempt = attempts.get();
            async move {
                if attempt == 1 {
                    Err("offline")
                } else {
                    Ok(attempt)
                }
            }
        };

        let mut loader = Loader::new();
        loader.load(&fetch).await;
        assert!(loader.is_failed());

        loader.retry(&fetch).await;
        assert_eq!(loader.state(), &LoadState::Loaded(2));

        loader.retry(&fetch).await;
        assert_eq!(attempts.get(), 2);
    }

    #[test]
    fn unstarted_loader_is_an_error() {
        let loader: Loader<()> = Loader::default();
        assert!(loader.into_result().is_err());
    }
}
