use crate::{Error, MemoryDirectory, Result, UserDirectory};
use std::time::Duration;

/// Construct a directory by registry name.
///
/// `latency` is the artificial per-query delay; pass `Duration::ZERO` to
/// disable it (tests do).
pub fn create_directory(name: &str, latency: Duration) -> Result<Box<dyn UserDirectory>> {
    match name {
        "memory" => Ok(Box::new(MemoryDirectory::with_latency(latency))),
        other => Err(Error::Directory(format!("unknown directory: {}", other))),
    }
}

/// Names accepted by [`create_directory`].
pub fn directory_names() -> Vec<&'static str> {
    vec!["memory"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_known_directory() {
        let directory = create_directory("memory", Duration::ZERO).unwrap();
        assert_eq!(directory.name(), "memory");
    }

    #[test]
    fn test_unknown_directory_is_rejected() {
        let err = create_directory("ldap", Duration::ZERO).unwrap_err();
        assert!(err.to_string().contains("unknown directory"));
    }

    #[test]
    fn test_registry_lists_every_constructible_directory() {
        for name in directory_names() {
            assert!(create_directory(name, Duration::ZERO).is_ok(), "{}", name);
        }
    }
}
