//! Level and number conversion helpers shared across the audio application.

mod containers;
mod db;
mod idle;
mod num_text;
mod random;
mod stack_str;
pub mod trace;

pub use containers::{concat_vectors, contains, map_contains_key, str_contains};
pub use db::{
	Level, MINIMUM_DB_D_LEVEL, MINIMUM_DB_LEVEL, MINIMUM_LINEAR_D_LEVEL,
	MINIMUM_LINEAR_LEVEL, db_to_linear, linear_to_db,
};
pub use idle::{IdleError, IdleHandle, IdleQueue, IdleTask, idle_add, run_idle_tasks};
pub use num_text::{
	FormatNumber, ParseNumber, format_number, format_number_or, format_number_with_capacity,
	parse_number, parse_number_into,
};
pub use random::random_number;
