use crate::actions::Action;
use redux_helpers::{from_fn, logging_middleware, Dispatch, Middleware, MiddlewareApi};
use serde_json::Value;
use std::sync::Arc;

/// Middleware chain for the counter store, outermost first
pub fn chain(log_actions: bool) -> Vec<Arc<dyn Middleware<Value, Action>>> {
    let mut middleware: Vec<Arc<dyn Middleware<Value, Action>>> = Vec::new();
    if log_actions {
        middleware.push(Arc::new(logging_middleware::<Value, Action, Action>()));
    }
    middleware.push(Arc::new(increment_if_odd()));
    middleware
}

/// IncrementIfOddMiddleware - consumes `IncrementIfOdd` and dispatches an
/// `Increment` through the whole chain when the counter is odd
pub fn increment_if_odd() -> impl Middleware<Value, Action> {
    from_fn(
        |api: &MiddlewareApi<Value, Action>, next: &Dispatch<Action>, action: Action| {
            let Action::IncrementIfOdd(amount) = action else {
                return next.call(action);
            };

            let count = api.get_state()["counter"].as_i64().unwrap_or(0);
            if count % 2 != 0 {
                api.dispatch(Action::Increment(amount))
            } else {
                log::debug!("IncrementIfOdd: counter {} is even, skipping", count);
                action
            }
        },
    )
}
