pub mod history_view;
pub mod request_record;
pub mod server_info;

pub use history_view::HistoryView;
pub use request_record::RequestRecord;
pub use server_info::ServerInfo;
