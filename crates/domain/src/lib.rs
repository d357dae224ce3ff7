mod parser;
mod reminder;

pub use parser::{parse, ParseError, ParsedReminder};
pub use reminder::{NewReminder, Reminder, TIME_FORMAT};
