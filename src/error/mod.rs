mod app_error;
mod constraint_parser;
mod database_converter;

pub use app_error::{
    AppError, AppResult, INTERNAL_SERVER_ERROR_MESSAGE, INVALID_QUERY_PARAMS_MESSAGE,
    ValidationFieldError,
};
pub use constraint_parser::ConstraintParser;
pub use database_converter::DatabaseErrorConverter;
