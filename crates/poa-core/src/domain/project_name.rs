use std::fmt;
use std::path::Path;

use crate::domain::error::DomainError;

/// Name used when the user passes an empty project name.
pub const DEFAULT_PROJECT_NAME: &str = "poa-app";

/// Name of the project directory to create.
///
/// Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Resolve the name from the first positional argument.
    ///
    /// An empty argument selects [`DEFAULT_PROJECT_NAME`].
    pub fn from_arg(arg: &str) -> Self {
        Self::from_arg_or(arg, DEFAULT_PROJECT_NAME)
    }

    /// Like [`Self::from_arg`] with a caller-supplied fallback.
    ///
    /// An empty fallback still resolves to [`DEFAULT_PROJECT_NAME`].
    pub fn from_arg_or(arg: &str, fallback: &str) -> Self {
        if !arg.is_empty() {
            Self(arg.to_string())
        } else if !fallback.is_empty() {
            Self(fallback.to_string())
        } else {
            Self(DEFAULT_PROJECT_NAME.to_string())
        }
    }

    /// Resolve the name from the raw positional argument list.
    ///
    /// The list must contain at least one slot; the slot itself may be empty.
    pub fn from_args(args: &[String]) -> Result<Self, DomainError> {
        args.first()
            .map(|arg| Self::from_arg(arg))
            .ok_or(DomainError::MissingProjectArgument)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_names_are_kept_verbatim() {
        for name in ["myapp", "my-app", "../elsewhere/app", " spaced "] {
            assert_eq!(ProjectName::from_arg(name).as_str(), name);
        }
    }

    #[test]
    fn empty_name_uses_default() {
        assert_eq!(ProjectName::from_arg("").as_str(), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn configured_fallback_is_used_for_empty_name() {
        assert_eq!(ProjectName::from_arg_or("", "shop").as_str(), "shop");
        assert_eq!(ProjectName::from_arg_or("app", "shop").as_str(), "app");
    }

    #[test]
    fn empty_fallback_falls_back_to_default() {
        assert_eq!(
            ProjectName::from_arg_or("", "").as_str(),
            DEFAULT_PROJECT_NAME
        );
    }

    #[test]
    fn empty_argument_list_is_usage_error() {
        assert_eq!(
            ProjectName::from_args(&[]),
            Err(DomainError::MissingProjectArgument)
        );
    }

    #[test]
    fn first_argument_wins() {
        let args = vec!["first".to_string(), "second".to_string()];
        assert_eq!(ProjectName::from_args(&args).unwrap().as_str(), "first");
        assert_eq!(
            ProjectName::from_args(&[String::new()]).unwrap().as_str(),
            DEFAULT_PROJECT_NAME
        );
    }
}
