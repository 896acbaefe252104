pub mod charts;
mod history_list;
mod loading;
mod model_info;
mod prediction_form;
mod result_panel;

pub use history_list::HistoryList;
pub use model_info::ModelInfoPanel;
pub use prediction_form::PredictionForm;
pub use result_panel::ResultPanel;
