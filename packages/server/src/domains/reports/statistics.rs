//! Headcounts for the coordinator dashboard and the statistics PDF.

use crate::domains::member::models::{MaritalStatus, Member, Sector};

pub const REPORT_FILE_NAME: &str = "relatorio_pastoral_familiar.pdf";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total: usize,
    /// Sectors with at least one member, in declaration order
    pub by_sector: Vec<(Sector, usize)>,
    /// Marital statuses with at least one member, in declaration order
    pub by_marital_status: Vec<(MaritalStatus, usize)>,
    /// Members per represented sector, one decimal place
    pub average_per_sector: f64,
}

impl ReportSummary {
    pub fn from_members(members: &[Member]) -> Self {
        let by_sector: Vec<(Sector, usize)> = Sector::ALL
            .iter()
            .map(|s| (*s, members.iter().filter(|m| m.sector == *s).count()))
            .filter(|(_, n)| *n > 0)
            .collect();

        let by_marital_status = MaritalStatus::ALL
            .iter()
            .map(|s| (*s, members.iter().filter(|m| m.marital_status == *s).count()))
            .filter(|(_, n)| *n > 0)
            .collect();

        let average_per_sector = if by_sector.is_empty() {
            0.0
        } else {
            round_one_decimal(members.len() as f64 / by_sector.len() as f64)
        };

        Self {
            total: members.len(),
            by_sector,
            by_marital_status,
            average_per_sector,
        }
    }

    /// `"2.5"`, or `"0"` when there are no members
    pub fn average_label(&self) -> String {
        if self.by_sector.is_empty() {
            "0".to_string()
        } else {
            format!("{:.1}", self.average_per_sector)
        }
    }

    /// Whole-number share of the total
    pub fn percent(&self, count: usize) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (count as f64 * 100.0 / self.total as f64).round() as u32
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_member;

    #[test]
    fn test_counts_and_average() {
        let mut casado = sample_member("B", "Bruno");
        casado.marital_status = MaritalStatus::Casado;
        casado.sector = Sector::CasosEspeciais;

        let members = vec![
            sample_member("A", "Ana"),
            sample_member("C", "Carla"),
            casado,
        ];
        let summary = ReportSummary::from_members(&members);

        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.by_sector,
            vec![(Sector::PreMatrimonial, 2), (Sector::CasosEspeciais, 1)]
        );
        assert_eq!(
            summary.by_marital_status,
            vec![(MaritalStatus::Solteiro, 2), (MaritalStatus::Casado, 1)]
        );
        assert_eq!(summary.average_label(), "1.5");
        assert_eq!(summary.percent(2), 67);
    }

    #[test]
    fn test_empty_registry() {
        let summary = ReportSummary::from_members(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.by_sector.is_empty());
        assert_eq!(summary.average_label(), "0");
        assert_eq!(summary.percent(0), 0);
    }
}
