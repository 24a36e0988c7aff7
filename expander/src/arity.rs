use crate::error::BinderError;

/// Separator between list items inside one specialization.
pub const LIST_SEPARATOR: &str = ", ";
/// Separator between consecutive `CHECK(i);` statements.
pub const CHECK_SEPARATOR: &str = " ";
/// Parameter list of a function that takes nothing.
pub const NO_PARAMS: &str = "void";
/// Statement emitted instead of checks for zero-parameter bindings, so the
/// generated `call` still uses its `state` argument.
pub const DISCARD_STATE: &str = "(void)(state);";
/// Template parameter naming the native return type.
pub const RESULT_CLASS: &str = "class R";

/// One supported parameter count and the text fragments derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityDescriptor {
    n: usize,
}

impl ArityDescriptor {
    /// Descriptor for `n` parameters, rejecting counts above `max`.
    pub fn new(n: usize, max: usize) -> Result<Self, BinderError> {
        if n > max {
            return Err(BinderError::ArityOutOfRange { arity: n, max });
        }
        Ok(Self { n })
    }

    /// All descriptors from zero through `max`, in ascending order.
    pub fn range(max: usize) -> impl Iterator<Item = ArityDescriptor> {
        (0..=max).map(|n| ArityDescriptor { n })
    }

    pub fn count(&self) -> usize {
        self.n
    }

    pub fn is_nullary(&self) -> bool {
        self.n == 0
    }

    /// `P0`, `P1`, ...
    pub fn parameter_names(&self) -> Vec<String> {
        (0..self.n).map(|i| format!("P{i}")).collect()
    }

    /// `ARG(0)`, `ARG(1)`, ...
    pub fn argument_expressions(&self) -> Vec<String> {
        (0..self.n).map(|i| format!("ARG({i})")).collect()
    }

    /// `CHECK(0);`, `CHECK(1);`, ...
    pub fn check_statements(&self) -> Vec<String> {
        (0..self.n).map(|i| format!("CHECK({i});")).collect()
    }

    pub fn parameter_list(&self) -> String {
        if self.is_nullary() {
            return NO_PARAMS.to_string();
        }
        self.parameter_names().join(LIST_SEPARATOR)
    }

    pub fn argument_list(&self) -> String {
        self.argument_expressions().join(LIST_SEPARATOR)
    }

    /// Check statements, or the state discard when there is nothing to check.
    pub fn check_sequence(&self) -> String {
        if self.is_nullary() {
            return DISCARD_STATE.to_string();
        }
        self.check_statements().join(CHECK_SEPARATOR)
    }

    /// `class P0, class P1, ...`; empty for zero parameters.
    pub fn bare_clause(&self) -> String {
        self.parameter_names()
            .iter()
            .map(|name| format!("class {name}"))
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
    }

    /// Tail appended after `class R` in the value-returning specialization.
    ///
    /// Carries its own leading separator, and only when there is a bare
    /// clause to follow it.
    pub fn extended_clause_tail(&self) -> String {
        let bare = self.bare_clause();
        if bare.is_empty() {
            bare
        } else {
            format!("{LIST_SEPARATOR}{bare}")
        }
    }

    /// Full template parameter list of the value-returning specialization.
    pub fn extended_clause(&self) -> String {
        format!("{RESULT_CLASS}{}", self.extended_clause_tail())
    }
}
