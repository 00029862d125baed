//! Wedding anniversary names ("bodas").

use chrono::NaiveDate;

use crate::common::dates::whole_years_between;

const BODAS: &[(u32, &str)] = &[
    (1, "Papel"),
    (2, "Algodão"),
    (3, "Couro"),
    (4, "Flores e Frutas"),
    (5, "Madeira"),
    (6, "Açúcar"),
    (7, "Lã"),
    (8, "Barro"),
    (9, "Cerâmica"),
    (10, "Estanho"),
    (11, "Aço"),
    (12, "Seda"),
    (13, "Renda"),
    (14, "Marfim"),
    (15, "Cristal"),
    (16, "Safira"),
    (17, "Rosa"),
    (18, "Turquesa"),
    (19, "Cretone"),
    (20, "Porcelana"),
    (21, "Zircão"),
    (22, "Louça"),
    (23, "Palha"),
    (24, "Opala"),
    (25, "Prata"),
    (26, "Alexandrita"),
    (27, "Crisoprásio"),
    (28, "Hematita"),
    (29, "Erva"),
    (30, "Pérola"),
    (31, "Nácar"),
    (32, "Pinho"),
    (33, "Crizo"),
    (34, "Oliveira"),
    (35, "Coral"),
    (36, "Cedro"),
    (37, "Aventurina"),
    (38, "Carvalho"),
    (39, "Mármore"),
    (40, "Esmeralda"),
    (41, "Seda"),
    (42, "Prata Dourada"),
    (43, "Azeviche"),
    (44, "Carbonato"),
    (45, "Rubi"),
    (46, "Alabastro"),
    (47, "Jaspe"),
    (48, "Granito"),
    (49, "Heliotrópio"),
    (50, "Ouro"),
    (55, "Ametista"),
    (60, "Diamante"),
    (70, "Vinho"),
    (75, "Brilhante"),
    (80, "Nogueira"),
];

/// Completed years of marriage as of `today`.
pub fn marriage_years(wedding_date: NaiveDate, today: NaiveDate) -> u32 {
    whole_years_between(wedding_date, today)
}

/// `Bodas de <material>` for a number of completed years, if it has a name.
pub fn bodas_name(years: u32) -> Option<String> {
    BODAS
        .iter()
        .find(|(y, _)| *y == years)
        .map(|(_, material)| format!("Bodas de {}", material))
}

/// Anniversary reached by a couple married on `wedding_date`.
pub fn current_bodas(wedding_date: NaiveDate, today: NaiveDate) -> Option<String> {
    bodas_name(marriage_years(wedding_date, today))
}
