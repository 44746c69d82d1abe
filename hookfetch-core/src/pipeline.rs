//! # Pipeline Composer
//!
//! Left-to-right composition of adapted steps. Steps run strictly one after
//! another; there is no reordering and no parallelism.

use crate::{continuation::Step, error::BoxError, message::Message};
use std::sync::Arc;

/// A composed chain of steps.
///
/// Cloning is cheap; the step list is shared.
pub struct Pipeline<T: Message> {
    steps: Arc<[Step<T>]>,
}

// A composed pipeline always holds at least its identity step.
#[allow(clippy::len_without_is_empty)]
impl<T: Message> Pipeline<T> {
    /// Feeds `value` through every step in order.
    ///
    /// Returns the last step's output, or the first failure. Steps after a
    /// failure never run.
    pub async fn run(&self, value: T) -> Result<T, BoxError> {
        let mut value = value;
        for step in self.steps.iter() {
            value = step.call(value).await?;
        }
        Ok(value)
    }

    /// Number of steps, counting the identity step of an empty pipeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl<T: Message> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            steps: Arc::clone(&self.steps),
        }
    }
}

impl<T: Message> std::fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// Composes `steps` into a single pipeline.
///
/// An empty input becomes a single identity step, so the pipeline resolves
/// to whatever it is given.
pub fn compose<T: Message>(steps: impl IntoIterator<Item = Step<T>>) -> Pipeline<T> {
    let mut steps: Vec<Step<T>> = steps.into_iter().collect();
    if steps.is_empty() {
        steps.push(Step::identity());
    }
    Pipeline {
        steps: steps.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::continuation::{Next, adapt, interceptor_fn};
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    fn recording(id: usize, order: Arc<Mutex<Vec<usize>>>) -> Step<Vec<usize>> {
        adapt(interceptor_fn(move |mut value: Vec<usize>, next: Next<Vec<usize>>| {
            order.lock().unwrap().push(id);
            value.push(id);
            next.proceed(value);
        }))
    }

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let pipeline = compose((1..=3).map(|id| recording(id, order.clone())));

        let output = pipeline.run(Vec::new()).await.unwrap();

        assert_eq!(output, vec![1, 2, 3]);
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_pipeline_is_identity() {
        let pipeline: Pipeline<String> = compose(Vec::new());

        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.run("unchanged".into()).await.unwrap(), "unchanged");
    }

    #[tokio::test]
    async fn test_failure_short_circuits() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let counter = later_calls.clone();

        let pipeline = compose([
            adapt(interceptor_fn(|value: u32, next: Next<u32>| next.proceed(value + 1))),
            adapt(interceptor_fn(|_value: u32, next: Next<u32>| next.reject("stop here"))),
            adapt(interceptor_fn(move |value: u32, next: Next<u32>| {
                counter.fetch_add(1, Ordering::SeqCst);
                next.proceed(value);
            })),
        ]);

        let err = pipeline.run(0).await.unwrap_err();

        assert_eq!(err.to_string(), "stop here");
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_pipeline_reusable() {
        let pipeline = compose([adapt(interceptor_fn(|value: u32, next: Next<u32>| {
            next.proceed(value * 2)
        }))]);
        let cloned = pipeline.clone();

        assert_eq!(pipeline.run(2).await.unwrap(), 4);
        assert_eq!(cloned.run(5).await.unwrap(), 10);
    }
}
