//! DynamoDB storage backend using a single-table design.
//!
//! Table layout:
//! - Athletes: `PK = ATHLETE#<athlete_id>`, `SK = ATHLETE#<athlete_id>`
//! - Sessions: `PK = ATHLETE#<athlete_id>`, `SK = SESSION#<session_id>`,
//!   co-located with their athlete in one partition
//! - GSI1: `GSI1PK = "SESSION"`, `GSI1SK = <ISO-date>#<session_id>` for
//!   querying all sessions across athletes, date-ascending by construction

mod conversions;
mod error;
mod keys;
mod store;

pub use store::DynamoStore;
