use thiserror::Error;

pub type CtResult<T> = Result<T, CtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_quantity() {
        let err = CtError::NonPositive {
            what: "diameter",
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("diameter"));
        assert!(msg.contains("-1"));
    }
}
