pub mod app;
pub mod distribution_chart;
pub mod history_list;
pub mod login_screen;
pub mod register_screen;
pub mod summary_table;
pub mod upload_form;

pub use app::App;
pub use distribution_chart::DistributionChart;
pub use history_list::HistoryList;
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
pub use summary_table::SummaryTable;
pub use upload_form::UploadForm;
