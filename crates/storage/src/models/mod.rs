#[macro_use]
mod macros;

mod division_change;
mod driver;
mod enums;
mod race_result;
mod round;
mod saved_point;
mod season;

pub use division_change::DivisionChange;
pub use driver::Driver;
pub use enums::{ChangeType, Division, DriverStatus, RaceType, RoundStatus};
pub use race_result::RaceResult;
pub use round::{PRE_SEASON_PREFIX, Round, is_pre_season_round};
pub use saved_point::{PointKey, SavedPoint, normalize_group_letter};
pub use season::Season;
