pub mod api;
pub mod dispatch;
pub mod state;
pub mod view;

pub use view::AnalyzeTransactionView;
