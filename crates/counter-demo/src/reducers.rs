use crate::actions::Action;
use redux_helpers::{compose_reducers, slice_reducer, Namespace, Reducer, SliceReducer};
use serde_json::{json, Value};

/// Root reducer: `{ "counter": i64, "history": [label, ...] }`
pub fn root_reducer(history_limit: usize) -> Reducer<Value, Action> {
    compose_reducers(
        Namespace::new()
            .callable("counter", counter_reducer())
            .callable("history", history_reducer(history_limit)),
    )
}

fn counter_reducer() -> SliceReducer<Action> {
    slice_reducer(|state: Option<Value>, action: &Action| {
        let count = state.and_then(|v| v.as_i64()).unwrap_or(0);
        let next = match action {
            Action::Increment(n) => count.saturating_add(*n),
            Action::Decrement(n) => count.saturating_sub(*n),
            Action::Reset => 0,
            // Resolved by middleware before it reaches the store
            Action::IncrementIfOdd(_) => count,
        };
        json!(next)
    })
}

fn history_reducer(limit: usize) -> SliceReducer<Action> {
    slice_reducer(move |state: Option<Value>, action: &Action| {
        let mut history = match state {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        history.push(Value::String(action.label()));
        if history.len() > limit {
            history.drain(..history.len() - limit);
        }
        Value::Array(history)
    })
}
