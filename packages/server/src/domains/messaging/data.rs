use juniper::GraphQLObject;

use crate::domains::messaging::actions::WhatsappBatch;

#[derive(Debug, Clone, GraphQLObject)]
pub struct WhatsappLinkData {
    pub member_id: String,
    pub full_name: String,
    pub phone: String,
    pub message: String,
    /// `https://wa.me/<phone>?text=<message>`
    pub url: String,
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct WhatsappBatchData {
    pub links: Vec<WhatsappLinkData>,
    /// Names of selected members without a phone number
    pub skipped: Vec<String>,
    pub summary: String,
}

impl From<WhatsappBatch> for WhatsappBatchData {
    fn from(batch: WhatsappBatch) -> Self {
        let summary = batch.summary();
        Self {
            links: batch
                .links
                .into_iter()
                .map(|link| WhatsappLinkData {
                    member_id: link.member.id.to_string(),
                    full_name: link.member.full_name,
                    phone: link.phone,
                    message: link.message,
                    url: link.url,
                })
                .collect(),
            skipped: batch.skipped.into_iter().map(|m| m.full_name).collect(),
            summary,
        }
    }
}
