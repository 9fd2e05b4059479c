//! Inspector tool cores
//!
//! Small lookup/conversion utilities: color formats, cron expressions,
//! Unix timestamps, password entropy and JWT claims.

pub mod color;
pub mod cron;
pub mod error;
pub mod jwt;
pub mod password;
pub mod timestamp;

pub use color::{parse_color, Color};
pub use cron::{describe_cron, next_occurrences, CronSchedule};
pub use error::InspectError;
pub use jwt::{decode_jwt, DecodedJwt};
pub use password::{estimate_password, PasswordReport, PasswordStrength};
pub use timestamp::{convert_timestamp, relative_from, TimestampInfo};
