//! Typed records for the normalized schema.
//!
//! One struct per output table (§ data model), plus the loosely typed
//! [`SourceRecord`] used only for the initial CSV parse. Field order on each
//! struct defines the column order of its CSV extract and SQL table.

pub mod dimensions;
pub mod employee;
pub mod enums;
pub mod facts;
pub mod source;

pub use dimensions::{Department, JobRole, JobRoleKey};
pub use employee::Employee;
pub use enums::Flag;
pub use facts::{Compensation, Satisfaction, WorkHistory};
pub use source::SourceRecord;
