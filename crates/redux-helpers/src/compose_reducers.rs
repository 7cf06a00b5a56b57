//! Combine per-key reducers into one reducer over a JSON object state

use crate::namespace::Namespace;
use crate::store::Reducer;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Reducer for one key of the state. `None` means the key has no value yet.
pub type SliceReducer<A> = Arc<dyn Fn(Option<Value>, &A) -> Value + Send + Sync>;

/// Wrap a closure or fn item as a [`SliceReducer`]
pub fn slice_reducer<A, F>(f: F) -> SliceReducer<A>
where
    F: Fn(Option<Value>, &A) -> Value + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Build a reducer that hands each key of the state to its own reducer
///
/// The resulting state holds exactly one key per callable entry of
/// `reducers`, in namespace order. Non-callable entries are ignored and keys
/// of the incoming state without a reducer are not carried over.
pub fn compose_reducers<A: 'static>(reducers: Namespace<SliceReducer<A>>) -> Reducer<Value, A> {
    let slices: Vec<(String, SliceReducer<A>)> = reducers
        .callables()
        .map(|(key, reduce)| (key.to_string(), Arc::clone(reduce)))
        .collect();

    Arc::new(move |state: Value, action: &A| {
        let mut previous = match state {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let next: Map<String, Value> = slices
            .iter()
            .map(|(key, reduce)| (key.clone(), reduce(previous.remove(key), action)))
            .collect();
        Value::Object(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::create_store;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug)]
    enum Action {
        Increment,
        Push(&'static str),
    }

    fn counter() -> SliceReducer<Action> {
        slice_reducer(|state: Option<Value>, action: &Action| {
            let count = state.and_then(|v| v.as_i64()).unwrap_or(0);
            match action {
                Action::Increment => json!(count + 1),
                _ => json!(count),
            }
        })
    }

    fn stack() -> SliceReducer<Action> {
        slice_reducer(|state: Option<Value>, action: &Action| {
            let mut items = match state {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            if let Action::Push(value) = action {
                items.push(json!(value));
            }
            Value::Array(items)
        })
    }

    #[test]
    fn test_compose_reducers_maps_keys_to_reducers() {
        let reduce = compose_reducers(
            Namespace::new()
                .callable("counter", counter())
                .callable("stack", stack()),
        );

        let s1 = reduce(json!({}), &Action::Increment);
        assert_eq!(s1, json!({ "counter": 1, "stack": [] }));

        let s2 = reduce(s1, &Action::Push("a"));
        assert_eq!(s2, json!({ "counter": 1, "stack": ["a"] }));
    }

    #[test]
    fn test_compose_reducers_ignores_non_callables() {
        let reduce = compose_reducers(
            Namespace::new()
                .value("fake", true)
                .value("broken", "string")
                .value("another", json!({ "nested": "object" }))
                .callable("stack", stack()),
        );

        let state = reduce(json!({}), &Action::Push("x"));
        let keys: Vec<&String> = state.as_object().map(|m| m.keys().collect()).unwrap_or_default();
        assert_eq!(keys, vec!["stack"]);
    }

    #[test]
    fn test_compose_reducers_drops_unknown_keys_and_non_object_state() {
        let reduce = compose_reducers(Namespace::new().callable("counter", counter()));

        let state = reduce(json!({ "counter": 4, "stale": true }), &Action::Increment);
        assert_eq!(state, json!({ "counter": 5 }));

        let state = reduce(Value::Null, &Action::Increment);
        assert_eq!(state, json!({ "counter": 1 }));
    }

    #[test]
    fn test_compose_reducers_as_store_reducer() {
        let reduce = compose_reducers(
            Namespace::new()
                .callable("counter", counter())
                .callable("stack", stack()),
        );
        let store = create_store(reduce, Some(json!({ "counter": 10 })), None);

        store.dispatch.call(Action::Increment);
        store.dispatch.call(Action::Push("b"));

        assert_eq!(store.state(), json!({ "counter": 11, "stack": ["b"] }));
    }
}
