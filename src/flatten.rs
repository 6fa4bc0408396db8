//! Conversion between nested query objects and dotted flat keys.
//!
//! The geocoding endpoints take nested options as dotted query parameters
//! (`focus.point.lon=8.68`) and echo their query back in the same flat form.
//!
//! Rules:
//! * object members join their path with `.`;
//! * array entries are keyed by their index (`a.0`, `a.1`), except for the
//!   paths listed in [`COMMA_JOINED_FIELDS`] when building a query string,
//!   where an array of scalars becomes a single comma separated value;
//! * `null` leaves and empty objects or arrays produce no key.

use serde_json::{Map, Value};

/// Query fields the geocoder expects as one comma separated list.
pub const COMMA_JOINED_FIELDS: &[&str] = &["sources", "layers"];

/// Flattens a nested object into dotted keys with scalar values.
pub fn flatten(value: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(None, value, &[], &mut flat);
    flat
}

/// Flattens a query object into string pairs ready for URL encoding.
pub fn to_query_pairs(value: &Value) -> Vec<(String, String)> {
    let mut flat = Map::new();
    flatten_into(None, value, COMMA_JOINED_FIELDS, &mut flat);
    flat.into_iter()
        .filter_map(|(key, value)| scalar_to_string(&value).map(|value| (key, value)))
        .collect()
}

fn flatten_into(
    prefix: Option<&str>,
    value: &Value,
    comma_joined: &[&str],
    flat: &mut Map<String, Value>,
) {
    let child_key = |key: &str| match prefix {
        Some(prefix) => format!("{prefix}.{key}"),
        None => key.to_owned(),
    };

    match value {
        Value::Object(members) => {
            for (key, member) in members {
                flatten_into(Some(&child_key(key)), member, comma_joined, flat);
            }
        }
        Value::Array(items) => {
            if let Some(path) = prefix.filter(|path| comma_joined.contains(path)) {
                if let Some(joined) = join_scalars(items) {
                    flat.insert(path.to_owned(), Value::String(joined));
                    return;
                }
            }
            for (index, item) in items.iter().enumerate() {
                flatten_into(Some(&child_key(&index.to_string())), item, comma_joined, flat);
            }
        }
        Value::Null => {}
        scalar => {
            if let Some(path) = prefix {
                flat.insert(path.to_owned(), scalar.clone());
            }
        }
    }
}

fn join_scalars(items: &[Value]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(scalar_to_string)
        .collect::<Option<Vec<_>>>()
        .map(|values| values.join(","))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Rebuilds a nested object from dotted keys.
///
/// Objects whose keys are exactly `0..n` become arrays again. When a key is
/// both a leaf and a prefix (`a` and `a.b`), the nested form wins.
pub fn unflatten(flat: &Map<String, Value>) -> Value {
    let mut root = Map::new();
    for (key, value) in flat {
        let path = key.split('.').collect::<Vec<_>>();
        insert_path(&mut root, &path, value.clone());
    }
    restore_arrays(Value::Object(root))
}

fn insert_path(object: &mut Map<String, Value>, path: &[&str], value: Value) {
    match path {
        [] => {}
        [last] => {
            let slot = object.entry(*last).or_insert(Value::Null);
            if !slot.is_object() {
                *slot = value;
            }
        }
        [head, rest @ ..] => {
            let child = object
                .entry(*head)
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child) = child {
                insert_path(child, rest, value);
            }
        }
    }
}

fn restore_arrays(value: Value) -> Value {
    match value {
        Value::Object(members) => {
            let mut members = members
                .into_iter()
                .map(|(key, member)| (key, restore_arrays(member)))
                .collect::<Map<_, _>>();
            let order = indexed_entries(&members);
            match order {
                Some(order) => {
                    Value::Array(
                        order
                            .into_iter()
                            .filter_map(|key| members.remove(&key))
                            .collect(),
                    )
                }
                None => Value::Object(members),
            }
        }
        other => other,
    }
}

/// Keys of `members` in index order, if they are exactly `0..len`.
fn indexed_entries(members: &Map<String, Value>) -> Option<Vec<String>> {
    if members.is_empty() {
        return None;
    }
    let mut indices = members
        .keys()
        .map(|key| {
            key.parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == *key)
        })
        .collect::<Option<Vec<_>>>()?;
    indices.sort_unstable();
    let contiguous = indices.iter().enumerate().all(|(position, index)| position == *index);
    contiguous.then(|| indices.iter().map(usize::to_string).collect())
}
