use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Unrecognized color: {0}")]
    Color(String),

    #[error("Invalid cron expression: {0}")]
    Cron(String),

    #[error("Invalid timestamp: {0}")]
    Timestamp(String),

    #[error("Invalid token: {0}")]
    Jwt(String),
}
