use juniper::GraphQLObject;

use crate::domains::member::models::{MaritalStatus, Sector};
use crate::domains::reports::statistics::ReportSummary;

#[derive(Debug, Clone, GraphQLObject)]
pub struct SectorCount {
    pub sector: Sector,
    pub count: i32,
    pub percent: i32,
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct MaritalStatusCount {
    pub marital_status: MaritalStatus,
    pub count: i32,
    pub percent: i32,
}

/// Dashboard figures shown on the reports page
#[derive(Debug, Clone, GraphQLObject)]
pub struct ReportSummaryData {
    pub total: i32,
    pub by_sector: Vec<SectorCount>,
    pub by_marital_status: Vec<MaritalStatusCount>,
    /// One decimal place, `"0"` when empty
    pub average_per_sector: String,
}

impl From<ReportSummary> for ReportSummaryData {
    fn from(summary: ReportSummary) -> Self {
        Self {
            total: summary.total as i32,
            by_sector: summary
                .by_sector
                .iter()
                .map(|(sector, n)| SectorCount {
                    sector: *sector,
                    count: *n as i32,
                    percent: summary.percent(*n) as i32,
                })
                .collect(),
            by_marital_status: summary
                .by_marital_status
                .iter()
                .map(|(status, n)| MaritalStatusCount {
                    marital_status: *status,
                    count: *n as i32,
                    percent: summary.percent(*n) as i32,
                })
                .collect(),
            average_per_sector: summary.average_label(),
        }
    }
}
