//! [`PseudoArrayHandler`] — detects objects that are really arrays wearing
//! a dict's clothes (purely numeric string keys).

/// Decides whether an object's keys should be modelled as an array with a
/// `patternProperties` key regex instead of as `properties`.
pub trait PseudoArrayHandler: Send + Sync {
    /// Given the keys of an object-valued example, returns `(true, regex)`
    /// if the object should be modelled as a pseudo-array, where `regex`
    /// is the `patternProperties` key pattern to use.
    fn is_pseudo_array(&self, keys: &[String]) -> (bool, Option<String>);
}

/// The default handler: every key must parse as a non-negative decimal
/// integer, and the key set must be non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPseudoArrayHandler;

impl PseudoArrayHandler for DefaultPseudoArrayHandler {
    fn is_pseudo_array(&self, keys: &[String]) -> (bool, Option<String>) {
        if keys.is_empty() {
            return (false, None);
        }
        if keys.iter().all(|k| k.parse::<u64>().is_ok()) {
            (true, Some("^[0-9]+$".to_string()))
        } else {
            (false, None)
        }
    }
}

/// A handler that never treats an object as a pseudo-array — opts a caller
/// out of the feature entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverPseudoArray;

impl PseudoArrayHandler for NeverPseudoArray {
    fn is_pseudo_array(&self, _keys: &[String]) -> (bool, Option<String>) {
        (false, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_consecutive_numeric_keys() {
        let handler = DefaultPseudoArrayHandler;
        let keys = vec!["0".to_string(), "1".to_string(), "2".to_string()];
        assert_eq!(
            handler.is_pseudo_array(&keys),
            (true, Some("^[0-9]+$".to_string()))
        );
    }

    #[test]
    fn detects_non_consecutive_numeric_keys_too() {
        // The spec only requires "parses as a decimal integer", not consecutive.
        let handler = DefaultPseudoArrayHandler;
        let keys = vec!["5".to_string(), "100".to_string()];
        assert!(handler.is_pseudo_array(&keys).0);
    }

    #[test]
    fn rejects_mixed_keys() {
        let handler = DefaultPseudoArrayHandler;
        let keys = vec!["0".to_string(), "name".to_string()];
        assert_eq!(handler.is_pseudo_array(&keys), (false, None));
    }

    #[test]
    fn rejects_empty_keys() {
        let handler = DefaultPseudoArrayHandler;
        assert_eq!(handler.is_pseudo_array(&[]), (false, None));
    }

    #[test]
    fn never_handler_always_declines() {
        let handler = NeverPseudoArray;
        let keys = vec!["0".to_string(), "1".to_string()];
        assert_eq!(handler.is_pseudo_array(&keys), (false, None));
    }
}
