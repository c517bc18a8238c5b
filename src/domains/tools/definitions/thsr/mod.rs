//! THSR tools module.
//!
//! One tool per TDX endpoint:
//! - `stations`: station list
//! - `timetable`: daily timetable between two stations
//! - `live_board`: live departures of a station
//! - `train_info`: daily timetable of one train
//! - `available_seats`: trains with seats between two stations
//! - `seat_status`: seat status of one train between two stations

pub mod available_seats;
pub mod common;
pub mod live_board;
pub mod seat_status;
pub mod stations;
pub mod timetable;
pub mod train_info;

pub use available_seats::{ThsrAvailableSeatsParams, ThsrAvailableSeatsTool};
pub use common::{ThsrEndpointTool, error_result, json_result};
pub use live_board::{ThsrLiveScheduleParams, ThsrLiveScheduleTool};
pub use seat_status::{ThsrTrainSeatStatusParams, ThsrTrainSeatStatusTool};
pub use stations::{ThsrStationsParams, ThsrStationsTool};
pub use timetable::{ThsrTimetableParams, ThsrTimetableTool};
pub use train_info::{ThsrTrainInfoParams, ThsrTrainInfoTool};
