//! Pipeline orchestration: rows in, artifact plans and a run report out.

use crate::aggregate::aggregate_orders;
use crate::conf::{
    C_FILE_MANIFEST_CARRIER_READY, C_FILE_MANIFEST_CM, C_FILE_MANIFEST_CX, C_FILE_MANIFEST_MC,
    C_FILE_MANIFEST_OTHER, C_FILE_MANIFEST_POLAR_PARCEL,
};
use crate::partition::{append_cold_express_row, partition_records, select_overlapping_order_ids};
use crate::project::{derive_carrier_ready_records, derive_polar_parcel_manifest};
use crate::report::ReportManifestRun;
use crate::sheet::{SpecSheetPlan, plan_bucket_sheet, plan_carrier_ready_sheet, plan_polar_parcel_sheet};
use crate::spec::{EnumCustomerGroup, SpecOrderRow, SpecRunOptions};

/// One output file of the archive: entry name plus its sheet plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecArtifactPlan {
    /// Archive entry name.
    pub file_name: String,
    /// Worksheet content.
    pub sheet: SpecSheetPlan,
}

/// Full pipeline output handed to the archive renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecPipelineOutput {
    /// Planned artifacts in archive order; empty buckets are omitted.
    pub l_artifacts: Vec<SpecArtifactPlan>,
    /// Run counters and warnings.
    pub report: ReportManifestRun,
}

/// Run the full transform: aggregate, partition, project, plan sheets.
///
/// Deterministic: identical rows and options produce identical output. The
/// run date in `options` feeds the Cold Xpress row and projection offsets;
/// nothing here reads the clock.
pub fn run_pipeline(l_rows: &[SpecOrderRow], options: &SpecRunOptions) -> SpecPipelineOutput {
    let mut report = ReportManifestRun {
        cnt_rows_input: l_rows.len() as u64,
        ..ReportManifestRun::default()
    };

    let l_records = aggregate_orders(l_rows, options.enum_group);
    report.cnt_orders = l_records.len() as u64;

    let mut buckets = partition_records(&l_records, l_rows);
    for order_id in select_overlapping_order_ids(l_rows) {
        report.warn(format!(
            "Order {order_id} matched multiple route tags; duplicated across buckets."
        ));
    }

    if options.if_cold_express {
        append_cold_express_row(&mut buckets, options.date_run);
    }

    report.cnt_bucket_cm = buckets.l_records_cm.len() as u64;
    report.cnt_bucket_mc = buckets.l_records_mc.len() as u64;
    report.cnt_bucket_cx = buckets.l_records_cx.len() as u64;
    report.cnt_bucket_other = buckets.l_records_other.len() as u64;

    let mut l_artifacts = Vec::new();
    let l_bucket_files = [
        (C_FILE_MANIFEST_CM, &buckets.l_records_cm),
        (C_FILE_MANIFEST_MC, &buckets.l_records_mc),
        (C_FILE_MANIFEST_CX, &buckets.l_records_cx),
        (C_FILE_MANIFEST_OTHER, &buckets.l_records_other),
    ];
    for (c_file_name, l_records_bucket) in l_bucket_files {
        if l_records_bucket.is_empty() {
            continue;
        }
        l_artifacts.push(SpecArtifactPlan {
            file_name: c_file_name.to_string(),
            sheet: plan_bucket_sheet(l_records_bucket, options.enum_group),
        });
    }

    match options.enum_group {
        EnumCustomerGroup::CleanEats => {
            if !buckets.l_records_cx.is_empty() {
                let l_records_carrier = derive_carrier_ready_records(&buckets.l_records_cx);
                l_artifacts.push(SpecArtifactPlan {
                    file_name: C_FILE_MANIFEST_CARRIER_READY.to_string(),
                    sheet: plan_carrier_ready_sheet(&l_records_carrier),
                });
            }
        }
        EnumCustomerGroup::MadeActive => {
            let manifest_polar = derive_polar_parcel_manifest(&l_records, options.date_run);
            if !manifest_polar.l_records.is_empty() {
                l_artifacts.push(SpecArtifactPlan {
                    file_name: C_FILE_MANIFEST_POLAR_PARCEL.to_string(),
                    sheet: plan_polar_parcel_sheet(&manifest_polar),
                });
            }
        }
    }

    report.cnt_artifacts = l_artifacts.len() as u64;
    tracing::info!(
        group = options.enum_group.label(),
        "{}",
        report.format("[RUN]")
    );

    SpecPipelineOutput {
        l_artifacts,
        report,
    }
}
