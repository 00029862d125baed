//! `wa.me` click-to-chat links for bulk messages.
//!
//! Nothing is sent from the server. The coordinator opens each link and
//! WhatsApp pre-fills the personalized text.

use crate::domains::member::formatting::digits_only;
use crate::domains::member::models::Member;

pub const DEFAULT_TEMPLATE: &str = "Olá, {nome}! Paz e bem!\n\n";

const NAME_PLACEHOLDER: &str = "{nome}";

/// Phones up to this many digits lack the country code
const NATIONAL_MAX_DIGITS: usize = 11;

const BRAZIL_COUNTRY_CODE: &str = "55";

#[derive(Debug, Clone)]
pub struct WhatsappLink {
    pub member: Member,
    /// Digits only, with country code
    pub phone: String,
    pub message: String,
    pub url: String,
}

/// Every `{nome}` becomes the member's first name.
pub fn personalize(template: &str, member: &Member) -> String {
    template.replace(NAME_PLACEHOLDER, member.first_name())
}

/// International phone digits, or `None` when there are no digits at all.
pub fn international_phone(phone: &str) -> Option<String> {
    let digits = digits_only(phone);
    if digits.is_empty() {
        return None;
    }
    if digits.len() <= NATIONAL_MAX_DIGITS {
        return Some(format!("{}{}", BRAZIL_COUNTRY_CODE, digits));
    }
    Some(digits)
}

pub fn wa_me_url(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone,
        urlencoding::encode(message)
    )
}

/// Link for one member, or `None` when the member has no usable phone.
pub fn link_for(member: &Member, template: &str) -> Option<WhatsappLink> {
    let phone = international_phone(&member.phone)?;
    let message = personalize(template, member);
    let url = wa_me_url(&phone, &message);

    Some(WhatsappLink {
        member: member.clone(),
        phone,
        message,
        url,
    })
}
