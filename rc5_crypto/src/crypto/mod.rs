pub mod key_schedule;
pub mod rc5;
