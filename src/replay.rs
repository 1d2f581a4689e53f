use crate::todo::ids::IdStrategy;
use crate::todo::intent::Intent;
use crate::todo::models::TodoState;
use crate::todo::store::TodoStore;
use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::debug;

/// Reads one JSON intent per line and applies each to a fresh store.
///
/// Blank lines are skipped. `ADD_TODO` goes through the same blank-text check
/// as the input box, so a blank payload never reaches the store.
pub fn replay_intents<R: BufRead>(reader: R, strategy: IdStrategy) -> Result<TodoState> {
    let mut store = TodoStore::new(strategy);

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_number))?;
        if line.trim().is_empty() {
            continue;
        }

        let intent: Intent = serde_json::from_str(&line)
            .with_context(|| format!("Invalid intent on line {}", line_number))?;

        let intent = match intent {
            Intent::Add(text) => match Intent::add_from_input(&text) {
                Some(intent) => intent,
                None => {
                    debug!(line = line_number, "skipping blank ADD_TODO");
                    continue;
                }
            },
            other => other,
        };

        store.dispatch(intent);
    }

    Ok(store.into_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn replay(input: &str) -> TodoState {
        replay_intents(input.as_bytes(), IdStrategy::Counter).unwrap()
    }

    #[test]
    fn test_add_toggle_delete_scenarios() {
        let added = replay(r#"{"type":"ADD_TODO","payload":"Buy milk"}"#);
        assert_eq!(
            serde_json::to_value(&added).unwrap(),
            json!({ "todos": [{ "id": 1, "text": "Buy milk", "completed": false }] })
        );

        let toggled = replay(
            "{\"type\":\"ADD_TODO\",\"payload\":\"Buy milk\"}\n\
             {\"type\":\"TOGGLE_TODO\",\"payload\":1}\n",
        );
        assert_eq!(
            serde_json::to_value(&toggled).unwrap(),
            json!({ "todos": [{ "id": 1, "text": "Buy milk", "completed": true }] })
        );

        let deleted = replay(
            "{\"type\":\"ADD_TODO\",\"payload\":\"Buy milk\"}\n\
             {\"type\":\"TOGGLE_TODO\",\"payload\":1}\n\
             {\"type\":\"DELETE_TODO\",\"payload\":1}\n",
        );
        assert_eq!(serde_json::to_value(&deleted).unwrap(), json!({ "todos": [] }));
    }

    #[test]
    fn test_blank_add_is_skipped() {
        let state = replay(
            "{\"type\":\"ADD_TODO\",\"payload\":\"\"}\n\
             {\"type\":\"ADD_TODO\",\"payload\":\"   \"}\n",
        );
        assert!(state.is_empty());
    }

    #[test]
    fn test_order_and_unknown_intents() {
        let state = replay(
            "{\"type\":\"ADD_TODO\",\"payload\":\"A\"}\n\
             \n\
             {\"type\":\"RENAME_TODO\"}\n\
             {\"type\":\"ADD_TODO\",\"payload\":\"B\"}\n\
             {\"type\":\"DELETE_TODO\",\"payload\":99}\n",
        );
        let texts: Vec<&str> = state.iter().map(|item| item.text()).collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_intents_with_payloads_are_noops() {
        let base = "{\"type\":\"ADD_TODO\",\"payload\":\"A\"}\n";
        let expected = replay(base);

        for unknown in [
            r#"{"type":"RENAME_TODO","payload":1}"#,
            r#"{"type":"RENAME_TODO","payload":"B"}"#,
            r#"{"type":"RENAME_TODO","payload":{"id":1,"text":"B"}}"#,
        ] {
            let state = replay(&format!("{}{}\n", base, unknown));
            assert_eq!(state, expected, "after {}", unknown);
        }
    }

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-zA-Z0-9 ]{0,10}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    fn unknown_kind() -> impl Strategy<Value = String> {
        "[A-Za-z_]{1,16}".prop_filter("known intent type", |kind| {
            !matches!(kind.as_str(), "ADD_TODO" | "DELETE_TODO" | "TOGGLE_TODO")
        })
    }

    proptest! {
        #[test]
        fn prop_unknown_intents_leave_state_unchanged(
            texts in prop::collection::vec("[a-z]{1,8}", 0..5),
            kind in unknown_kind(),
            payload in json_value(),
            with_payload in any::<bool>(),
        ) {
            let mut base = String::new();
            for text in &texts {
                base.push_str(&json!({ "type": "ADD_TODO", "payload": text }).to_string());
                base.push('\n');
            }
            base.push_str(&json!({ "type": "TOGGLE_TODO", "payload": 1 }).to_string());
            base.push('\n');

            let unknown = if with_payload {
                json!({ "type": kind, "payload": payload })
            } else {
                json!({ "type": kind })
            };

            let decoded: Intent = serde_json::from_value(unknown.clone()).unwrap();
            prop_assert_eq!(decoded, Intent::Unknown);

            let expected = replay_intents(base.as_bytes(), IdStrategy::Counter).unwrap();
            let leading = format!("{}\n{}", unknown, base);
            let state = replay_intents(leading.as_bytes(), IdStrategy::Counter).unwrap();
            prop_assert_eq!(&state, &expected);

            let trailing = format!("{}{}\n", base, unknown);
            let state = replay_intents(trailing.as_bytes(), IdStrategy::Counter).unwrap();
            prop_assert_eq!(&state, &expected);
        }
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = replay_intents(
            "{\"type\":\"ADD_TODO\",\"payload\":\"A\"}\nnot json\n".as_bytes(),
            IdStrategy::Counter,
        )
        .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
