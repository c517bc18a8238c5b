//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod thsr;

pub use thsr::{
    ThsrAvailableSeatsParams, ThsrAvailableSeatsTool, ThsrEndpointTool, ThsrLiveScheduleParams,
    ThsrLiveScheduleTool, ThsrStationsParams, ThsrStationsTool, ThsrTimetableParams,
    ThsrTimetableTool, ThsrTrainInfoParams, ThsrTrainInfoTool, ThsrTrainSeatStatusParams,
    ThsrTrainSeatStatusTool,
};
