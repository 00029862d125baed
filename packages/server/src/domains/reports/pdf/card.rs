//! Profile card ("ficha cadastral") layout.

use std::sync::Arc;

use chrono::NaiveDate;
use printpdf::image_crate::DynamicImage;

use super::layout::{cap_height, wrap_text, Canvas, FontWeight, Rgb8, PAGE_HEIGHT, PAGE_WIDTH};
use super::photo::load_photo;
use crate::common::dates::format_br;
use crate::domains::member::anniversary::current_bodas;
use crate::domains::member::formatting::file_slug;
use crate::domains::member::models::{MaritalStatus, Member};

pub const CARDS_FILE_NAME: &str = "fichas_cadastrais.pdf";
pub const CARD_TITLE: &str = "Ficha Cadastral de Agente";
pub const CARD_SUBTITLE: &str = "Pastoral Familiar - Cadastro Paroquial";

const MARGIN: f32 = 15.0;
const FONT_SIZE_NORMAL: f32 = 10.0;
const FONT_SIZE_TITLE: f32 = 16.0;
const FONT_SIZE_HEADER: f32 = 12.0;
const FONT_SIZE_PLACEHOLDER: f32 = 8.0;
const LINE_HEIGHT: f32 = 6.0;

const LOGO_SIZE: f32 = 20.0;
const HEADER_TEXT_X: f32 = MARGIN + 25.0;
const RULE_Y: f32 = 35.0;

const PHOTO_Y: f32 = 45.0;
const PHOTO_SIZE: f32 = 40.0;
const INLINE_X: f32 = MARGIN + PHOTO_SIZE + 10.0;
const INLINE_VALUE_OFFSET: f32 = 40.0;

const SECTION_BAR_HEIGHT: f32 = 8.0;
const LABEL_WIDTH: f32 = 50.0;
/// Content must stay above this line
const BOTTOM_LIMIT: f32 = PAGE_HEIGHT - 20.0;
/// Where content resumes after a page break
const CONTINUATION_Y: f32 = 20.0;

/// `ficha_<slug>.pdf`
pub fn card_file_name(member: &Member) -> String {
    let slug = file_slug(member.full_name.trim());
    if slug.is_empty() {
        return "ficha_agente.pdf".to_string();
    }
    format!("ficha_{}.pdf", slug)
}

/// A single member's card.
pub fn profile_card_layout(member: &Member, logo: Option<Arc<DynamicImage>>, today: NaiveDate) -> Canvas {
    let mut canvas = Canvas::new(format!("{} - {}", CARD_TITLE, member.full_name));
    CardWriter::new(&mut canvas, logo).write(member, today);
    canvas
}

/// One card per member, each starting on its own page.
pub fn profile_cards_layout(members: &[Member], logo: Option<Arc<DynamicImage>>, today: NaiveDate) -> Canvas {
    let mut canvas = Canvas::new("Fichas Cadastrais");
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            canvas.add_page();
        }
        CardWriter::new(&mut canvas, logo.clone()).write(member, today);
    }
    canvas
}

struct CardWriter<'a> {
    canvas: &'a mut Canvas,
    logo: Option<Arc<DynamicImage>>,
    y: f32,
}

impl<'a> CardWriter<'a> {
    fn new(canvas: &'a mut Canvas, logo: Option<Arc<DynamicImage>>) -> Self {
        Self {
            canvas,
            logo,
            y: PHOTO_Y,
        }
    }

    fn write(mut self, member: &Member, today: NaiveDate) {
        self.header();
        self.photo(member.photo.as_deref());
        self.identity(member, today);

        self.y = PHOTO_Y + PHOTO_SIZE + 15.0;

        self.section("Contato");
        self.field("Telefone / WhatsApp:", &member.phone);
        self.field("E-mail:", &member.email);

        self.section("Endereço");
        self.field("CEP:", &member.cep);
        self.field("Endereço:", &member.street);
        self.field("Bairro:", &member.neighborhood);
        if !(member.city.trim().is_empty() && member.state.trim().is_empty()) {
            self.field("Cidade / UF:", &format!("{} / {}", member.city, member.state));
        }

        self.section("Informações Pastorais");
        self.field("Paróquia:", &member.parish);
        self.field("Comunidade:", &member.community);
        self.field("Setor Pastoral:", member.sector.label());
        self.field("Função:", member.role.label());
        self.field("Data de Ingresso:", &format_br(member.join_date));

        self.section("Outras Informações");
        self.field("Possui Veículo:", if member.has_vehicle { "Sim" } else { "Não" });
        if member.has_vehicle {
            self.field("Modelo do Veículo:", member.vehicle_model.as_deref().unwrap_or_default());
        }
        if let Some(notes) = member.notes.as_deref() {
            self.field("Observações:", notes);
        }
    }

    fn header(&mut self) {
        if let Some(logo) = self.logo.clone() {
            self.canvas.image(MARGIN, 15.0, LOGO_SIZE, LOGO_SIZE, logo);
        }
        self.canvas
            .text(HEADER_TEXT_X, 22.0, FONT_SIZE_TITLE, FontWeight::Bold, CARD_TITLE);
        self.canvas
            .text(HEADER_TEXT_X, 30.0, FONT_SIZE_NORMAL, FontWeight::Regular, CARD_SUBTITLE);
        self.canvas
            .line(MARGIN, RULE_Y, PAGE_WIDTH - MARGIN, RULE_Y, Rgb8::GREY);
    }

    fn photo(&mut self, photo: Option<&str>) {
        self.canvas
            .stroke_rect(MARGIN, PHOTO_Y, PHOTO_SIZE, PHOTO_SIZE, Rgb8::GREY);

        let center_x = MARGIN + PHOTO_SIZE / 2.0;
        let center_y = PHOTO_Y + PHOTO_SIZE / 2.0;

        let Some(photo) = photo else {
            self.canvas
                .centered_text(center_x, center_y, FONT_SIZE_PLACEHOLDER, FontWeight::Regular, "Sem Foto");
            return;
        };

        match load_photo(photo) {
            Ok(image) => self.canvas.image(
                MARGIN + 1.0,
                PHOTO_Y + 1.0,
                PHOTO_SIZE - 2.0,
                PHOTO_SIZE - 2.0,
                Arc::new(image),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Member photo could not be drawn");
                self.canvas
                    .centered_text(center_x, center_y, FONT_SIZE_PLACEHOLDER, FontWeight::Regular, "Foto");
                self.canvas.centered_text(
                    center_x,
                    center_y + 3.5,
                    FONT_SIZE_PLACEHOLDER,
                    FontWeight::Regular,
                    "inválida",
                );
            }
        }
    }

    /// Name, birth and marriage details beside the photo
    fn identity(&mut self, member: &Member, today: NaiveDate) {
        let mut y = PHOTO_Y + 5.0;
        let value_x = INLINE_X + INLINE_VALUE_OFFSET;
        let value_width = PAGE_WIDTH - MARGIN - value_x;

        let mut inline = |label: &str, value: &str| {
            if value.trim().is_empty() {
                return;
            }
            self.canvas
                .text(INLINE_X, y, FONT_SIZE_NORMAL, FontWeight::Bold, label);
            for line in wrap_text(value, value_width, FONT_SIZE_NORMAL, FontWeight::Regular) {
                self.canvas
                    .text(value_x, y, FONT_SIZE_NORMAL, FontWeight::Regular, line);
                y += LINE_HEIGHT;
            }
        };

        inline("Nome Completo:", &member.full_name);
        inline("Nascimento:", &format_br(member.birth_date));
        inline("Estado Civil:", member.marital_status.label());
        if member.marital_status == MaritalStatus::Casado {
            inline("Cônjuge:", member.spouse_name.as_deref().unwrap_or_default());
            if let Some(wedding) = member.wedding_date {
                inline("Casamento:", &format_br(wedding));
                if let Some(bodas) = current_bodas(wedding, today) {
                    inline("Bodas:", &bodas);
                }
            }
        }
    }

    fn break_page_if_needed(&mut self, needed: f32) {
        if self.y + needed > BOTTOM_LIMIT {
            self.canvas.add_page();
            self.y = CONTINUATION_Y;
        }
    }

    fn section(&mut self, title: &str) {
        self.break_page_if_needed(SECTION_BAR_HEIGHT);

        self.canvas.fill_rect(
            MARGIN,
            self.y,
            PAGE_WIDTH - MARGIN * 2.0,
            SECTION_BAR_HEIGHT,
            Rgb8::BLUE,
        );
        // Vertically centred in the bar
        let baseline = self.y + SECTION_BAR_HEIGHT / 2.0 + cap_height(FONT_SIZE_HEADER) / 2.0;
        self.canvas.colored_text(
            MARGIN + 2.0,
            baseline,
            FONT_SIZE_HEADER,
            FontWeight::Bold,
            Rgb8::WHITE,
            title,
        );
        self.y += SECTION_BAR_HEIGHT + 4.0;
    }

    fn field(&mut self, label: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        let value_x = MARGIN + LABEL_WIDTH;
        let value_width = PAGE_WIDTH - value_x - MARGIN;
        let lines = wrap_text(value, value_width, FONT_SIZE_NORMAL, FontWeight::Regular);
        let step = LINE_HEIGHT - 1.0;
        let block_height = lines.len() as f32 * step;

        // Keep short blocks together; longer ones flow across pages line by line
        if block_height <= BOTTOM_LIMIT - CONTINUATION_Y {
            self.break_page_if_needed(block_height);
        } else {
            self.break_page_if_needed(step);
        }

        self.canvas
            .text_from_top(MARGIN, self.y, FONT_SIZE_NORMAL, FontWeight::Bold, label);
        for line in lines {
            self.break_page_if_needed(step);
            self.canvas
                .text_from_top(value_x, self.y, FONT_SIZE_NORMAL, FontWeight::Regular, line);
            self.y += step;
        }

        self.y += 3.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_member;
    use crate::domains::reports::pdf::layout::DrawOp;
    use crate::domains::reports::pdf::photo::fixtures::png_data_url;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn image_count(canvas: &Canvas) -> usize {
        canvas
            .pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .count()
    }

    #[test]
    fn test_card_has_header_sections_and_fields() {
        let member = sample_member("ANA", "Ana Paula");
        let canvas = profile_card_layout(&member, None, today());

        assert_eq!(canvas.page_count(), 1);
        let page = &canvas.pages[0];
        for text in [
            CARD_TITLE,
            CARD_SUBTITLE,
            "Sem Foto",
            "Contato",
            "Endereço",
            "Informações Pastorais",
            "Outras Informações",
            "Ana Paula",
            "17/05/1980",
            "(11) 98765-4321",
            "São Paulo / SP",
            "Pré-matrimonial",
            "Não",
        ] {
            assert!(page.has_text(text), "missing {text}");
        }
        assert!(!page.has_text("Cônjuge:"));
        assert!(!page.has_text("Observações:"));
        assert_eq!(image_count(&canvas), 0);
    }

    #[test]
    fn test_married_member_shows_spouse_and_bodas() {
        let mut member = sample_member("BIA", "Beatriz");
        member.marital_status = MaritalStatus::Casado;
        member.spouse_name = Some("Carlos".into());
        member.wedding_date = NaiveDate::from_ymd_opt(2004, 5, 1);

        let canvas = profile_card_layout(&member, None, today());
        let page = &canvas.pages[0];
        assert!(page.has_text("Carlos"));
        assert!(page.has_text("01/05/2004"));
        assert!(page.has_text("Bodas de Porcelana"));
    }

    #[test]
    fn test_photo_and_logo_are_drawn() {
        let mut member = sample_member("ANA", "Ana");
        member.photo = Some(png_data_url());
        let logo = Arc::new(DynamicImage::new_rgb8(2, 2));

        let canvas = profile_card_layout(&member, Some(logo), today());
        assert_eq!(image_count(&canvas), 2);
        assert!(!canvas.pages[0].has_text("Sem Foto"));
    }

    #[test]
    fn test_broken_photo_shows_placeholder() {
        let mut member = sample_member("ANA", "Ana");
        member.photo = Some("data:image/png;base64,AAAA".into());

        let canvas = profile_card_layout(&member, None, today());
        assert!(canvas.pages[0].has_text("inválida"));
    }

    #[test]
    fn test_long_notes_continue_on_next_page() {
        let mut member = sample_member("ANA", "Ana");
        member.has_vehicle = true;
        member.vehicle_model = Some("Fiat Uno".into());
        member.notes = Some("Participa das reuniões mensais e acompanha casais. ".repeat(80));

        let canvas = profile_card_layout(&member, None, today());
        assert!(canvas.page_count() > 1);
        assert!(canvas.pages[0].has_text("Fiat Uno"));

        for page in &canvas.pages {
            for op in &page.ops {
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y <= BOTTOM_LIMIT + LINE_HEIGHT, "text below margin at {y}");
                }
            }
        }
    }

    #[test]
    fn test_bulk_cards_start_on_new_pages() {
        let members = vec![sample_member("A", "Ana"), sample_member("B", "Bruno")];
        let canvas = profile_cards_layout(&members, None, today());

        assert_eq!(canvas.page_count(), 2);
        assert!(canvas.pages[0].has_text("Ana"));
        assert!(canvas.pages[1].has_text("Bruno"));
        assert!(canvas.pages[1].has_text(CARD_TITLE));
    }

    #[test]
    fn test_card_file_name() {
        let member = sample_member("JOSE", "José da Silva");
        assert_eq!(card_file_name(&member), "ficha_jos__da_silva.pdf");

        let nameless = sample_member("X", "  ");
        assert_eq!(card_file_name(&nameless), "ficha_agente.pdf");
    }
}
