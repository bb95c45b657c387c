pub mod chart_splitter;
pub mod page_counter;
pub mod report_writer;

pub use chart_splitter::split_charts;
pub use page_counter::PageCounter;
pub use report_writer::{render_assignment_report, ReportWriter};
