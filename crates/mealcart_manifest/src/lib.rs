//! `mealcart_manifest` v1:
//! Order-export to delivery-manifest transform pipeline.
//!
//! Architecture:
//! - `conf`      : constants and static lookup tables
//! - `spec`      : record/bucket/option models
//! - `normalize` : stateless field normalizers
//! - `aggregate` : order grouping and record derivation
//! - `partition` : route-tag bucket partitioning
//! - `project`   : carrier-ready projections
//! - `sheet`     : record sets to renderer-agnostic sheet plans
//! - `report`    : run-time report model
//! - `run`       : pipeline orchestration

pub mod aggregate;
pub mod conf;
pub mod normalize;
pub mod partition;
pub mod project;
pub mod report;
pub mod run;
pub mod sheet;
pub mod spec;

pub use aggregate::aggregate_orders;
pub use partition::{append_cold_express_row, partition_records};
pub use project::{derive_carrier_ready_records, derive_polar_parcel_manifest};
pub use report::ReportManifestRun;
pub use run::{SpecArtifactPlan, SpecPipelineOutput, run_pipeline};
pub use sheet::{EnumCellValue, SpecSheetPlan};
pub use spec::{
    EnumBucketKey, EnumCustomerGroup, SpecBuckets, SpecCarrierReadyRecord, SpecManifestRecord,
    SpecOrderRow, SpecPolarParcelManifest, SpecPolarParcelRecord, SpecRunOptions,
};
