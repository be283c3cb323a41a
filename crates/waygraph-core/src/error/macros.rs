//! Error macros for waygraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WaygraphError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WaygraphError::UsageError($msg.to_string()))
    };
}

/// Macro for creating node-not-found errors
#[macro_export]
macro_rules! bail_node_not_found {
    ($node:expr) => {
        return Err($crate::error::WaygraphError::node_not_found($node))
    };
}
