pub mod api;
pub mod context;
pub mod modal;
pub mod storage;
