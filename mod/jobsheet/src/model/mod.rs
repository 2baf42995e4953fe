mod job;
mod process;
mod report;

pub use job::Job;
pub use process::{InProcessDetails, Measurement, ProcessDetail, SkivingDetails, Unit};
pub use report::{
    FittingChoice, FittingType, Footer, InspectionReport, JobDetails, Material, OrderDetails,
    PiggingOption, Remarks, Traceability,
};
