use std::env;

use super::ReadEnv;

/// Zero-sized type that delegates to `std::env`.
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_to_std_env() {
        let std_result = std::env::var("PATH");
        let provider_result = SystemEnv.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn missing_var_is_not_present() {
        assert!(matches!(
            SystemEnv.var("CAMPUS_NO_SUCH_VAR_09321"),
            Err(env::VarError::NotPresent)
        ));
    }
}
