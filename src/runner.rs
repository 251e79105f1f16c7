//! Test runner collaborator interface
//!
//! The formatter never inspects tests itself; the runner hands it something
//! that can name the test's owning group and describe the test.

use serde::{Deserialize, Serialize};

/// A test as seen by the formatter
pub trait TestHandle {
    /// Short name of the group (class, module, suite) that owns the test
    fn group_name(&self) -> &str;

    /// Free-text description of the test, e.g. `test_creates_a_user`
    fn description(&self) -> &str;
}

/// Owned snapshot of a test handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Owning group short name
    pub group: String,
    /// Test description
    pub description: String,
}

impl TestCase {
    /// Create a test case
    #[must_use]
    pub fn new(group: &str, description: &str) -> Self {
        Self {
            group: group.to_string(),
            description: description.to_string(),
        }
    }

    /// Copy the identity out of any handle
    #[must_use]
    pub fn of(test: &dyn TestHandle) -> Self {
        Self::new(test.group_name(), test.description())
    }
}

impl TestHandle for TestCase {
    fn group_name(&self) -> &str {
        &self.group
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Borrowed<'a> {
        class: &'a str,
        method: &'a str,
    }

    impl TestHandle for Borrowed<'_> {
        fn group_name(&self) -> &str {
            self.class
        }

        fn description(&self) -> &str {
            self.method
        }
    }

    #[test]
    fn test_snapshot_copies_identity() {
        let handle = Borrowed {
            class: "UserTest",
            method: "test_creates_a_user",
        };

        let case = TestCase::of(&handle);
        assert_eq!(case, TestCase::new("UserTest", "test_creates_a_user"));
        assert_eq!(case.group_name(), "UserTest");
        assert_eq!(case.description(), "test_creates_a_user");
    }
}
