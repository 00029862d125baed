//! Report actions: exports and statistics.
//!
//! Coordinators may export anything. Agents may only download their own card.

use std::sync::Arc;

use chrono::Utc;
use printpdf::image_crate::DynamicImage;
use tracing::{info, warn};

use crate::common::{Actor, Capability, MemberId};
use crate::domains::member::actions::{get_member, list_members, visible_members};
use crate::domains::member::filter::MemberFilter;
use crate::domains::reports::csv_export::{members_csv, CSV_FILE_NAME};
use crate::domains::reports::errors::ReportError;
use crate::domains::reports::pdf::{
    card_file_name, load_image, profile_card_layout, profile_cards_layout, render_pdf,
    statistics_layout, CARDS_FILE_NAME,
};
use crate::domains::reports::statistics::{ReportSummary, REPORT_FILE_NAME};
use crate::kernel::ServerDeps;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A generated file, ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    fn pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: PDF_CONTENT_TYPE,
            bytes,
        }
    }
}

/// Decoded header logo. A broken logo is logged and left out.
fn report_logo(deps: &ServerDeps) -> Option<Arc<DynamicImage>> {
    let bytes = deps.report_logo.as_ref()?;
    match load_image(bytes) {
        Ok(image) => Some(Arc::new(image)),
        Err(e) => {
            warn!(error = %e, "Report logo could not be decoded");
            None
        }
    }
}

pub async fn export_csv(
    actor: Actor,
    filter: &MemberFilter,
    deps: &ServerDeps,
) -> Result<ReportFile, ReportError> {
    actor.can(Capability::ExportReports).check()?;

    let members = list_members(actor, filter, deps).await?;
    let bytes = members_csv(&members)?;

    info!(count = members.len(), "members exported to CSV");
    Ok(ReportFile {
        file_name: CSV_FILE_NAME.to_string(),
        content_type: CSV_CONTENT_TYPE,
        bytes,
    })
}

/// Every filtered member's card in a single PDF
pub async fn export_cards(
    actor: Actor,
    filter: &MemberFilter,
    deps: &ServerDeps,
) -> Result<ReportFile, ReportError> {
    actor.can(Capability::ExportReports).check()?;

    let members = list_members(actor, filter, deps).await?;
    if members.is_empty() {
        return Err(ReportError::NothingToExport);
    }

    let canvas = profile_cards_layout(&members, report_logo(deps), Utc::now().date_naive());
    let bytes = render_pdf(&canvas)?;

    info!(count = members.len(), pages = canvas.page_count(), "profile cards exported");
    Ok(ReportFile::pdf(CARDS_FILE_NAME, bytes))
}

/// One member's card. Agents may print their own.
pub async fn member_card(
    actor: Actor,
    id: MemberId,
    deps: &ServerDeps,
) -> Result<ReportFile, ReportError> {
    let member = get_member(actor, id, deps).await?;

    let canvas = profile_card_layout(&member, report_logo(deps), Utc::now().date_naive());
    let bytes = render_pdf(&canvas)?;

    info!(member_id = %member.id, "profile card generated");
    Ok(ReportFile::pdf(card_file_name(&member), bytes))
}

pub async fn report_summary(actor: Actor, deps: &ServerDeps) -> Result<ReportSummary, ReportError> {
    actor.can(Capability::ExportReports).check()?;

    let members = visible_members(actor, deps).await?;
    Ok(ReportSummary::from_members(&members))
}

pub async fn report_pdf(actor: Actor, deps: &ServerDeps) -> Result<ReportFile, ReportError> {
    let summary = report_summary(actor, deps).await?;
    let bytes = render_pdf(&statistics_layout(&summary))?;

    info!(total = summary.total, "statistics report generated");
    Ok(ReportFile::pdf(REPORT_FILE_NAME, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::AuthError;
    use crate::domains::member::errors::MemberError;
    use crate::domains::member::models::member::fixtures::sample_fields;
    use crate::domains::member::models::Sector;
    use crate::kernel::test_dependencies::{InMemoryMemberStore, TestDependencies};

    fn deps() -> ServerDeps {
        let mut bruno = sample_fields("BRUNO", "Bruno Lima");
        bruno.sector = Sector::CasosEspeciais;

        TestDependencies::new()
            .mock_members(
                InMemoryMemberStore::new()
                    .with_member(sample_fields("ANA", "Ana Souza"))
                    .with_member(bruno),
            )
            .into_server_deps()
    }

    fn coordinator() -> Actor {
        Actor::new(MemberId::new(), true)
    }

    async fn id_of(deps: &ServerDeps, login: &str) -> MemberId {
        deps.members.find_by_login(login).await.unwrap()[0].id
    }

    #[tokio::test]
    async fn test_csv_export() {
        let deps = deps();
        let file = export_csv(coordinator(), &MemberFilter::default(), &deps)
            .await
            .unwrap();

        assert_eq!(file.file_name, CSV_FILE_NAME);
        let text = String::from_utf8(file.bytes).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Ana Souza"));
    }

    #[tokio::test]
    async fn test_export_with_empty_selection() {
        let deps = deps();
        let filter = MemberFilter {
            sector: Some(Sector::ServicoAVida),
            ..Default::default()
        };

        assert!(matches!(
            export_csv(coordinator(), &filter, &deps).await,
            Err(ReportError::NothingToExport)
        ));
        assert!(matches!(
            export_cards(coordinator(), &filter, &deps).await,
            Err(ReportError::NothingToExport)
        ));
    }

    #[tokio::test]
    async fn test_agents_cannot_export() {
        let deps = deps();
        let agent = Actor::new(id_of(&deps, "ANA").await, false);

        assert!(matches!(
            export_csv(agent, &MemberFilter::default(), &deps).await,
            Err(ReportError::Auth(AuthError::CoordinatorRequired))
        ));
        assert!(matches!(
            report_pdf(agent, &deps).await,
            Err(ReportError::Auth(AuthError::CoordinatorRequired))
        ));
    }

    #[tokio::test]
    async fn test_agent_prints_own_card_only() {
        let deps = deps();
        let ana = id_of(&deps, "ANA").await;
        let bruno = id_of(&deps, "BRUNO").await;
        let agent = Actor::new(ana, false);

        let file = member_card(agent, ana, &deps).await.unwrap();
        assert_eq!(file.file_name, "ficha_ana_souza.pdf");
        assert!(file.bytes.starts_with(b"%PDF"));

        assert!(matches!(
            member_card(agent, bruno, &deps).await,
            Err(ReportError::Member(MemberError::Auth(_)))
        ));
    }

    #[tokio::test]
    async fn test_bulk_cards_and_statistics() {
        let deps = deps();

        let cards = export_cards(coordinator(), &MemberFilter::default(), &deps)
            .await
            .unwrap();
        assert_eq!(cards.file_name, CARDS_FILE_NAME);
        assert_eq!(cards.content_type, PDF_CONTENT_TYPE);

        let summary = report_summary(coordinator(), &deps).await.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.average_label(), "1.0");

        let report = report_pdf(coordinator(), &deps).await.unwrap();
        assert_eq!(report.file_name, REPORT_FILE_NAME);
        assert!(report.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_broken_logo_is_skipped() {
        let mut deps = deps();
        deps.report_logo = Some(Arc::new(vec![1, 2, 3]));
        assert!(report_logo(&deps).is_none());

        let file = export_cards(coordinator(), &MemberFilter::default(), &deps).await;
        assert!(file.is_ok());
    }
}
