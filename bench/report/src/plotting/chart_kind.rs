use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ChartKind {
    #[display("Throughput by File Size")]
    FileSizeThroughput,
    #[display("Throughput by Multipart Threshold")]
    TuningThroughput,
}

impl ChartKind {
    pub fn x_axis_label(&self) -> &'static str {
        match self {
            ChartKind::FileSizeThroughput => "File Size",
            ChartKind::TuningThroughput => "Multipart Threshold",
        }
    }
}
