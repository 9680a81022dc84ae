pub mod date;
pub mod matching;
pub mod requests;
pub mod slot;
pub mod time;

pub use date::{DateInfo, RelativeDay};
pub use matching::{DateMatch, DateMatchKind, Match, TimeMatch, TimeMatchKind};
pub use requests::{
    MatchSlotsRequest, MatchSlotsResponse, ParseSlotsRequest, ParseSlotsResponse, SlotSource,
};
pub use slot::Slot;
pub use time::{DayPeriod, Minutes, TimeInfo, TimeKind, TimeWindow};
