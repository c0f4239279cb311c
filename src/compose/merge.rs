//! The namespace merge contract.
//!
//! Existing user-declared configuration is the merge base and always wins on
//! conflict. Objects merge recursively, lists append, and a key the user
//! already set to anything else is left alone. Appending instead of
//! replacing keeps the merge order-tolerant: resolvers contributed by other
//! plugins during the same configuration phase survive regardless of
//! initialization order.

use serde_json::{Map, Value};

/// Merges `patch` into `base`, base-wins.
pub fn merge_patch(base: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, incoming) in patch {
        match (base.get_mut(&key), incoming) {
            (Some(Value::Object(existing)), Value::Object(overlay)) => {
                merge_patch(existing, overlay);
            }
            (Some(Value::Array(existing)), Value::Array(mut items)) => {
                existing.append(&mut items);
            }
            // Scalar or kind conflict: the user-set value stays.
            (Some(_), _) => {}
            (None, incoming) => {
                base.insert(key, incoming);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_new_keys_are_inserted() {
        let mut base = object(json!({"a": 1}));
        merge_patch(&mut base, object(json!({"b": 2})));

        assert_eq!(Value::Object(base), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_base_wins_on_scalar_conflict() {
        let mut base = object(json!({"a": 1}));
        merge_patch(&mut base, object(json!({"a": 99})));

        assert_eq!(base["a"], json!(1));
    }

    #[test]
    fn test_base_wins_on_kind_conflict() {
        let mut base = object(json!({"a": "scalar"}));
        merge_patch(&mut base, object(json!({"a": {"nested": true}})));

        assert_eq!(base["a"], json!("scalar"));
    }

    #[test]
    fn test_objects_merge_recursively() {
        let mut base = object(json!({"outer": {"kept": 1}}));
        merge_patch(&mut base, object(json!({"outer": {"added": 2}})));

        assert_eq!(base["outer"], json!({"kept": 1, "added": 2}));
    }

    #[test]
    fn test_lists_append_preserving_order() {
        let mut base = object(json!({"resolvers": ["first", "second"]}));
        merge_patch(&mut base, object(json!({"resolvers": ["third"]})));

        assert_eq!(base["resolvers"], json!(["first", "second", "third"]));
    }

    #[test]
    fn test_append_is_order_tolerant_across_patches() {
        // Two unrelated patches applied in either order produce the same
        // set of entries under the list key.
        let patch_a = object(json!({"resolvers": ["a"]}));
        let patch_b = object(json!({"resolvers": ["b"]}));

        let mut ab = object(json!({}));
        merge_patch(&mut ab, patch_a.clone());
        merge_patch(&mut ab, patch_b.clone());

        let mut ba = object(json!({}));
        merge_patch(&mut ba, patch_b);
        merge_patch(&mut ba, patch_a);

        let mut ab_list = ab["resolvers"].as_array().unwrap().clone();
        let mut ba_list = ba["resolvers"].as_array().unwrap().clone();
        ab_list.sort_by_key(|v| v.as_str().unwrap().to_string());
        ba_list.sort_by_key(|v| v.as_str().unwrap().to_string());
        assert_eq!(ab_list, ba_list);
    }
}
