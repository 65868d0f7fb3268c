use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::Breakpoint;

/// Flat token path → concrete value, e.g. `"button.height.m" → 40`.
pub type ResolvedTokenTable = BTreeMap<String, Value>;

const FALLBACK_ORDER: [Breakpoint; 3] = [
    Breakpoint::Desktop,
    Breakpoint::Tablet,
    Breakpoint::Mobile,
];

/// Resolve every responsive value in `tree` for `breakpoint`.
///
/// A mapping holding any of `mobile`, `tablet` or `desktop` is a responsive
/// value and collapses to the requested entry, falling back desktop → tablet →
/// mobile. Other mappings are walked recursively and keep their shape; leaves
/// pass through unchanged.
pub fn resolve(tree: &Value, breakpoint: Breakpoint) -> Value {
    match tree {
        Value::Object(map) if is_responsive(map) => pick_breakpoint(map, breakpoint),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), resolve(value, breakpoint)))
                .collect(),
        ),
        leaf => leaf.clone(),
    }
}

fn is_responsive(map: &Map<String, Value>) -> bool {
    Breakpoint::ALL
        .iter()
        .any(|breakpoint| map.contains_key(breakpoint.as_str()))
}

fn pick_breakpoint(map: &Map<String, Value>, breakpoint: Breakpoint) -> Value {
    std::iter::once(breakpoint)
        .chain(FALLBACK_ORDER)
        .find_map(|candidate| map.get(candidate.as_str()))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Flatten a resolved tree into dotted paths. Arrays are kept as leaf values.
pub fn flatten(tree: &Value) -> ResolvedTokenTable {
    let mut table = ResolvedTokenTable::new();
    flatten_into(tree, &mut String::new(), &mut table);
    table
}

fn flatten_into(node: &Value, prefix: &mut String, table: &mut ResolvedTokenTable) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                let restore = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                flatten_into(value, prefix, table);
                prefix.truncate(restore);
            }
        }
        leaf => {
            table.insert(prefix.clone(), leaf.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tablet_falls_back_to_desktop_when_missing() {
        let node = json!({ "mobile": "a", "desktop": "b" });
        assert_eq!(resolve(&node, Breakpoint::Tablet), json!("b"));
    }

    #[test]
    fn requested_breakpoint_wins_when_present() {
        let node = json!({ "mobile": "a", "tablet": "c", "desktop": "b" });
        assert_eq!(resolve(&node, Breakpoint::Tablet), json!("c"));
        assert_eq!(resolve(&node, Breakpoint::Mobile), json!("a"));
        assert_eq!(resolve(&node, Breakpoint::Desktop), json!("b"));
    }

    #[test]
    fn desktop_request_falls_back_to_tablet_then_mobile() {
        assert_eq!(
            resolve(&json!({ "mobile": 1, "tablet": 2 }), Breakpoint::Desktop),
            json!(2)
        );
        assert_eq!(
            resolve(&json!({ "mobile": 1 }), Breakpoint::Desktop),
            json!(1)
        );
        assert_eq!(
            resolve(&json!({ "mobile": 1 }), Breakpoint::Tablet),
            json!(1)
        );
    }

    #[test]
    fn nested_mappings_keep_structure_and_leaves_pass_through() {
        let tree = json!({
            "spacing": { "sm": 8, "md": { "mobile": 12, "desktop": 16 } },
            "motion": { "easing": "ease-out" },
            "steps": [1, 2, 3]
        });

        let resolved = resolve(&tree, Breakpoint::Mobile);
        assert_eq!(
            resolved,
            json!({
                "spacing": { "sm": 8, "md": 12 },
                "motion": { "easing": "ease-out" },
                "steps": [1, 2, 3]
            })
        );
        assert_eq!(resolve(&tree, Breakpoint::Mobile), resolved);
    }

    #[test]
    fn flatten_builds_dotted_paths() {
        let table = flatten(&json!({
            "button": { "height": { "m": 40 } },
            "radius": { "4": 4 },
            "opacity": 0.4
        }));

        assert_eq!(table.get("button.height.m"), Some(&json!(40)));
        assert_eq!(table.get("radius.4"), Some(&json!(4)));
        assert_eq!(table.get("opacity"), Some(&json!(0.4)));
        assert_eq!(table.len(), 3);
    }
}
