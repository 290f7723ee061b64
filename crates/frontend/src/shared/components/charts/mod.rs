mod bar_chart;
mod line_chart;
pub mod scale;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;
