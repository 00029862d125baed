//! Spreadsheet export of the member list.
//!
//! UTF-8 with a byte-order mark so Excel opens the accents correctly.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domains::member::models::Member;
use crate::domains::reports::errors::ReportError;

pub const CSV_FILE_NAME: &str = "agentes_pastoral_familiar.csv";

const BOM: &str = "\u{feff}";

const HEADERS: [&str; 20] = [
    "Nome Completo",
    "Data de Nascimento",
    "Estado Civil",
    "Nome do Cônjuge",
    "Data de Casamento",
    "Telefone",
    "E-mail",
    "CEP",
    "Endereço",
    "Bairro",
    "Cidade",
    "UF",
    "Possui Veículo",
    "Modelo do Veículo",
    "Paróquia",
    "Comunidade",
    "Setor",
    "Função",
    "Data de Ingresso",
    "Observações",
];

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sim"
    } else {
        "Não"
    }
}

fn row(member: &Member) -> [String; 20] {
    [
        member.full_name.clone(),
        member.birth_date.to_string(),
        member.marital_status.label().to_string(),
        member.spouse_name.clone().unwrap_or_default(),
        member.wedding_date.map(|d| d.to_string()).unwrap_or_default(),
        member.phone.clone(),
        member.email.clone(),
        member.cep.clone(),
        member.street.clone(),
        member.neighborhood.clone(),
        member.city.clone(),
        member.state.clone(),
        yes_no(member.has_vehicle).to_string(),
        member.vehicle_model.clone().unwrap_or_default(),
        member.parish.clone(),
        member.community.clone(),
        member.sector.label().to_string(),
        member.role.label().to_string(),
        member.join_date.to_string(),
        member.notes.clone().unwrap_or_default(),
    ]
}

/// CSV bytes for the given members. Dates are ISO `YYYY-MM-DD`.
pub fn members_csv(members: &[Member]) -> Result<Vec<u8>, ReportError> {
    if members.is_empty() {
        return Err(ReportError::NothingToExport);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BOM.as_bytes().to_vec());

    writer.write_record(HEADERS)?;
    for member in members {
        writer.write_record(row(member))?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ReportError::Io(std::io::Error::new(e.error().kind(), e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_member;

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        assert!(matches!(members_csv(&[]), Err(ReportError::NothingToExport)));
    }

    #[test]
    fn test_bom_and_header() {
        let csv = text(members_csv(&[sample_member("ANA", "Ana Souza")]).unwrap());
        assert!(csv.starts_with('\u{feff}'));

        let header = csv.trim_start_matches('\u{feff}').lines().next().unwrap();
        assert_eq!(header.split(',').count(), 20);
        assert!(header.starts_with("Nome Completo,Data de Nascimento,Estado Civil"));
        assert!(header.ends_with("Função,Data de Ingresso,Observações"));
    }

    #[test]
    fn test_row_values_and_quoting() {
        let mut member = sample_member("ANA", "Souza, Ana \"Aninha\"");
        member.has_vehicle = true;
        member.vehicle_model = Some("Gol".to_string());

        let csv = text(members_csv(&[member]).unwrap());
        let line = csv.lines().nth(1).unwrap();
        assert!(line.starts_with("\"Souza, Ana \"\"Aninha\"\"\",1980-05-17,Solteiro(a),,"));
        assert!(line.contains(",Sim,Gol,"));
        assert!(line.contains(",Pré-matrimonial,Agente,2020-01-01,"));
    }
}
