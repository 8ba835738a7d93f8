//! Display attributes and the process-wide graph defaults.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use parking_lot::RwLock;

/// Graphviz attribute mapping, kept sorted so DOT output is stable.
pub type Attrs = BTreeMap<String, String>;

/// Layout direction every graph gets unless told otherwise.
pub const DEFAULT_RANKDIR: &str = "LR";

static DEFAULT_GRAPH_ATTRS: LazyLock<RwLock<Attrs>> =
    LazyLock::new(|| RwLock::new(initial_graph_attrs()));

fn initial_graph_attrs() -> Attrs {
    attrs([("rankdir", DEFAULT_RANKDIR)])
}

/// Build an [`Attrs`] map from key/value pairs.
pub fn attrs<I, K, V>(pairs: I) -> Attrs
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Snapshot of the current process-wide graph defaults.
pub fn default_graph_attrs() -> Attrs {
    DEFAULT_GRAPH_ATTRS.read().clone()
}

/// Set one default graph attribute, returning the previous value.
pub fn set_default_graph_attr(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    DEFAULT_GRAPH_ATTRS.write().insert(key.into(), value.into())
}

/// Remove one default graph attribute, returning its value.
pub fn remove_default_graph_attr(key: &str) -> Option<String> {
    DEFAULT_GRAPH_ATTRS.write().remove(key)
}

/// Restore the defaults to `{ rankdir = "LR" }`.
pub fn reset_default_graph_attrs() {
    *DEFAULT_GRAPH_ATTRS.write() = initial_graph_attrs();
}

/// Current defaults with `overrides` laid on top.
pub fn merged_graph_attrs(overrides: Option<&Attrs>) -> Attrs {
    let mut merged = default_graph_attrs();
    if let Some(overrides) = overrides {
        merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

/// Parse a `key=value` pair as given on the command line.
pub fn parse_attr(input: &str) -> graphwork_error::Result<(String, String)> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(graphwork_error::Error::invalid_argument(format!(
            "expected key=value, got '{input}'"
        ))
        .with_operation("attrs::parse_attr")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_start_left_to_right() {
        reset_default_graph_attrs();
        assert_eq!(default_graph_attrs(), attrs([("rankdir", "LR")]));
    }

    #[test]
    #[serial]
    fn overrides_win_over_defaults() {
        reset_default_graph_attrs();
        let merged = merged_graph_attrs(Some(&attrs([("rankdir", "TB"), ("bgcolor", "white")])));
        assert_eq!(merged, attrs([("bgcolor", "white"), ("rankdir", "TB")]));
        // defaults untouched
        assert_eq!(default_graph_attrs()["rankdir"], "LR");
    }

    #[test]
    #[serial]
    fn mutating_defaults_affects_later_merges() {
        reset_default_graph_attrs();
        assert_eq!(set_default_graph_attr("splines", "ortho"), None);
        assert_eq!(merged_graph_attrs(None)["splines"], "ortho");

        assert_eq!(remove_default_graph_attr("rankdir").as_deref(), Some("LR"));
        assert!(!merged_graph_attrs(None).contains_key("rankdir"));

        reset_default_graph_attrs();
        assert_eq!(default_graph_attrs(), attrs([("rankdir", "LR")]));
    }

    #[test]
    fn parse_attr_splits_on_first_equals() {
        assert_eq!(
            parse_attr("label=a=b").unwrap(),
            ("label".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_attr("rankdir=TB").unwrap(),
            ("rankdir".to_string(), "TB".to_string())
        );
    }

    #[test]
    fn parse_attr_rejects_missing_key() {
        let err = parse_attr("=TB").unwrap_err();
        assert_eq!(err.kind(), graphwork_error::ErrorKind::InvalidArgument);
        assert!(parse_attr("rankdir").is_err());
    }
}
