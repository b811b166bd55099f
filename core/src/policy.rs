use crate::Result;
use log::warn;

/// How a builder reacts when an operation cannot produce its artifact.
///
/// The SDK runs inside merchant page rendering, where a review widget that
/// fails to build must not take the whole page down with it. `Lenient` keeps
/// that contract: the failure is logged as a warning and the caller receives
/// no value. `Strict` propagates the failure to the caller instead.
///
/// Every failure condition in the SDK is routed through [`settle`], so the
/// two modes can never diverge in behavior beyond error-vs-warning.
///
/// [`settle`]: FailurePolicy::settle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Propagate failures to the caller as errors.
    Strict,
    /// Log failures at warn level and resolve to `None`.
    #[default]
    Lenient,
}

impl FailurePolicy {
    /// Resolve an operation outcome according to the policy.
    pub fn settle<T>(&self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(v) => Ok(Some(v)),
            Err(err) => match self {
                FailurePolicy::Strict => Err(err),
                FailurePolicy::Lenient => {
                    warn!("reviewly: {err}");
                    Ok(None)
                }
            },
        }
    }
}
