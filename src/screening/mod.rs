pub mod stop_list;

pub use stop_list::{
    JuridicalStopListRequest, PhysicalStopListRequest, StopListInfo, StopListRequest,
    StopListStatus,
};
