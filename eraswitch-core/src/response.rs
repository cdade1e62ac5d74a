//! Response conversion traits.

use crate::{error::BoxError, module::ModuleResult};

/// Trait for converting a closure's output into a [`ModuleResult`].
///
/// # Default Implementations
///
/// - `()` → Continue
/// - `bool` → `true` = Continue, `false` = Stop
/// - `ModuleResult` → As is
/// - `Result<T, E>` → Delegates to inner `T` or propagates error
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a module result",
    label = "missing `IntoModuleResult` implementation",
    note = "Return `bool`, `()`, `ModuleResult` or a `Result` of those."
)]
pub trait IntoModuleResult {
    /// Convert the output into a continue/stop decision or an error.
    fn into_module_result(self) -> Result<ModuleResult, BoxError>;
}

impl IntoModuleResult for () {
    fn into_module_result(self) -> Result<ModuleResult, BoxError> {
        Ok(ModuleResult::Continue)
    }
}

impl IntoModuleResult for bool {
    fn into_module_result(self) -> Result<ModuleResult, BoxError> {
        Ok(ModuleResult::from(self))
    }
}

impl IntoModuleResult for ModuleResult {
    fn into_module_result(self) -> Result<ModuleResult, BoxError> {
        Ok(self)
    }
}

impl<T, E> IntoModuleResult for Result<T, E>
where
    T: IntoModuleResult,
    E: Into<BoxError>,
{
    fn into_module_result(self) -> Result<ModuleResult, BoxError> {
        match self {
            Ok(t) => t.into_module_result(),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_continues() {
        assert_eq!(().into_module_result().unwrap(), ModuleResult::Continue);
    }

    #[test]
    fn test_nested_result() {
        let ok: Result<bool, BoxError> = Ok(false);
        assert_eq!(ok.into_module_result().unwrap(), ModuleResult::Stop);

        let err: Result<bool, BoxError> = Err("no primary vertex".into());
        assert_eq!(
            err.into_module_result().unwrap_err().to_string(),
            "no primary vertex"
        );
    }
}
