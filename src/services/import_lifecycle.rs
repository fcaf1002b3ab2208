// src/services/import_lifecycle.rs

//! Tabela de referência do ciclo de vida das importações.
//!
//! Tudo aqui é consulta em dados imutáveis: rótulo, cor e grupos de cada
//! status. Não existe validação de transição; qualquer status pode ser
//! gravado por quem chama. Status desconhecidos (dados legados) nunca geram
//! erro: o rótulo volta como veio e a cor cai no token neutro.

use crate::models::import::{ColorToken, ImportStatus, ShippingMethod};

#[derive(Debug, Clone, Copy)]
pub struct StatusInfo {
    pub status: ImportStatus,
    pub label: &'static str,
    pub color: ColorToken,
    pub is_final: bool,
    pub is_transport: bool,
}

// Mesma ordem de ImportStatus::ORDER
static STATUS_TABLE: [StatusInfo; 9] = [
    StatusInfo { status: ImportStatus::Planning, label: "Planejamento", color: ColorToken::Blue, is_final: false, is_transport: false },
    StatusInfo { status: ImportStatus::Production, label: "Produção", color: ColorToken::Amber, is_final: false, is_transport: false },
    StatusInfo { status: ImportStatus::DeliveredToAgent, label: "Entregue ao Agente", color: ColorToken::Purple, is_final: false, is_transport: false },
    StatusInfo { status: ImportStatus::MaritimeTransport, label: "Transporte Marítimo", color: ColorToken::Cyan, is_final: false, is_transport: true },
    StatusInfo { status: ImportStatus::AirTransport, label: "Transporte Aéreo", color: ColorToken::Sky, is_final: false, is_transport: true },
    StatusInfo { status: ImportStatus::CustomsClearance, label: "Desembaraço Aduaneiro", color: ColorToken::Orange, is_final: false, is_transport: false },
    StatusInfo { status: ImportStatus::NationalTransport, label: "Transporte Nacional", color: ColorToken::Indigo, is_final: false, is_transport: true },
    StatusInfo { status: ImportStatus::Completed, label: "Concluído", color: ColorToken::Green, is_final: true, is_transport: false },
    StatusInfo { status: ImportStatus::Cancelled, label: "Cancelado", color: ColorToken::Red, is_final: true, is_transport: false },
];

// Linha do tempo de uma importação. `Transport` é trocado pela etapa do modal.
#[derive(Debug, Clone, Copy)]
enum TimelineStage {
    Fixed(ImportStatus),
    Transport,
}

const TIMELINE: [TimelineStage; 8] = [
    TimelineStage::Fixed(ImportStatus::Planning),
    TimelineStage::Fixed(ImportStatus::Production),
    TimelineStage::Fixed(ImportStatus::DeliveredToAgent),
    TimelineStage::Transport,
    TimelineStage::Fixed(ImportStatus::CustomsClearance),
    TimelineStage::Fixed(ImportStatus::NationalTransport),
    TimelineStage::Fixed(ImportStatus::Completed),
    TimelineStage::Fixed(ImportStatus::Cancelled),
];

impl ImportStatus {
    pub fn info(self) -> &'static StatusInfo {
        // O discriminante segue a ordem da tabela
        &STATUS_TABLE[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn color(self) -> ColorToken {
        self.info().color
    }

    pub fn is_active(self) -> bool {
        !self.info().is_final
    }

    pub fn is_final(self) -> bool {
        self.info().is_final
    }

    pub fn is_transport(self) -> bool {
        self.info().is_transport
    }
}

fn lookup(status: &str) -> Option<&'static StatusInfo> {
    STATUS_TABLE.iter().find(|info| info.status.as_str() == status)
}

/// Rótulo de exibição. Status desconhecido volta sem alteração.
pub fn label_of(status: &str) -> &str {
    lookup(status).map_or(status, |info| info.label)
}

pub fn color_of(status: &str) -> ColorToken {
    lookup(status).map_or(ColorToken::Neutral, |info| info.color)
}

/// Importação ainda em andamento. Status desconhecido não é ativo.
pub fn is_active(status: &str) -> bool {
    lookup(status).is_some_and(|info| !info.is_final)
}

/// Apenas `completed` e `cancelled`.
pub fn is_final(status: &str) -> bool {
    lookup(status).is_some_and(|info| info.is_final)
}

pub fn is_transport(status: &str) -> bool {
    lookup(status).is_some_and(|info| info.is_transport)
}

/// Etapa de transporte internacional do modal. Tudo que não for "air" é marítimo.
pub fn transport_status_for(shipping_method: Option<&str>) -> ImportStatus {
    match ShippingMethod::from_raw(shipping_method) {
        ShippingMethod::Air => ImportStatus::AirTransport,
        ShippingMethod::Sea => ImportStatus::MaritimeTransport,
    }
}

/// Rótulos da linha do tempo de uma importação, em ordem, já com a etapa de
/// transporte correspondente ao modal.
pub fn labels_for(shipping_method: Option<&str>) -> Vec<(ImportStatus, &'static str)> {
    let transport = transport_status_for(shipping_method);

    TIMELINE
        .iter()
        .map(|stage| match stage {
            TimelineStage::Fixed(status) => *status,
            TimelineStage::Transport => transport,
        })
        .map(|status| (status, status.label()))
        .collect()
}

/// Próxima etapa esperada na progressão. Só informativo: nada impede que
/// o status seja alterado para qualquer outro valor.
pub fn next_status(current: ImportStatus, shipping_method: Option<&str>) -> Option<ImportStatus> {
    match current {
        ImportStatus::Planning => Some(ImportStatus::Production),
        ImportStatus::Production => Some(ImportStatus::DeliveredToAgent),
        ImportStatus::DeliveredToAgent => Some(transport_status_for(shipping_method)),
        ImportStatus::MaritimeTransport | ImportStatus::AirTransport => {
            Some(ImportStatus::CustomsClearance)
        }
        ImportStatus::CustomsClearance => Some(ImportStatus::NationalTransport),
        ImportStatus::NationalTransport => Some(ImportStatus::Completed),
        ImportStatus::Completed | ImportStatus::Cancelled => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_enum_order() {
        for (i, status) in ImportStatus::ORDER.into_iter().enumerate() {
            assert_eq!(STATUS_TABLE[i].status, status);
            assert_eq!(status.info().status, status);
        }
    }

    #[test]
    fn every_status_is_active_or_final_but_not_both() {
        for status in ImportStatus::ORDER {
            assert!(status.is_active() ^ status.is_final(), "{status}");
            if status.is_transport() {
                assert!(status.is_active(), "{status}");
            }
            // As funções por texto concordam com os métodos
            assert_eq!(is_active(status.as_str()), status.is_active());
            assert_eq!(is_final(status.as_str()), status.is_final());
            assert_eq!(is_transport(status.as_str()), status.is_transport());
        }
    }

    #[test]
    fn final_and_transport_groups() {
        let finals: Vec<_> = ImportStatus::ORDER.into_iter().filter(|s| s.is_final()).collect();
        assert_eq!(finals, vec![ImportStatus::Completed, ImportStatus::Cancelled]);

        let transport: Vec<_> = ImportStatus::ORDER.into_iter().filter(|s| s.is_transport()).collect();
        assert_eq!(
            transport,
            vec![
                ImportStatus::MaritimeTransport,
                ImportStatus::AirTransport,
                ImportStatus::NationalTransport
            ]
        );
    }

    #[test]
    fn unknown_status_degrades_gracefully() {
        assert_eq!(label_of("em_transito"), "em_transito");
        assert_eq!(label_of(""), "");
        assert_eq!(color_of("em_transito"), ColorToken::Neutral);
        assert!(!is_active("em_transito"));
        assert!(!is_final("em_transito"));
        assert!(!is_transport("em_transito"));
    }

    #[test]
    fn known_status_labels() {
        assert_eq!(label_of("customs_clearance"), "Desembaraço Aduaneiro");
        assert_eq!(label_of("completed"), "Concluído");
        assert_eq!(color_of("cancelled"), ColorToken::Red);
    }

    #[test]
    fn transport_defaults_to_maritime() {
        assert_eq!(transport_status_for(Some("air")), ImportStatus::AirTransport);
        assert_eq!(transport_status_for(Some("sea")), ImportStatus::MaritimeTransport);
        assert_eq!(transport_status_for(Some("")), ImportStatus::MaritimeTransport);
        assert_eq!(transport_status_for(Some("truck")), ImportStatus::MaritimeTransport);
        assert_eq!(transport_status_for(None), ImportStatus::MaritimeTransport);
        // Só o valor exato "air" seleciona o aéreo
        assert_eq!(transport_status_for(Some(" air ")), ImportStatus::MaritimeTransport);
        assert_eq!(transport_status_for(Some("Air")), ImportStatus::MaritimeTransport);
    }

    #[test]
    fn timeline_uses_only_the_matching_transport_stage() {
        let air = labels_for(Some("air"));
        assert_eq!(air.len(), 8);
        assert_eq!(air[3], (ImportStatus::AirTransport, "Transporte Aéreo"));
        assert!(!air.iter().any(|(s, _)| *s == ImportStatus::MaritimeTransport));

        let sea = labels_for(None);
        assert_eq!(sea[3], (ImportStatus::MaritimeTransport, "Transporte Marítimo"));
        assert!(!sea.iter().any(|(s, _)| *s == ImportStatus::AirTransport));
        assert_eq!(sea.first().map(|(s, _)| *s), Some(ImportStatus::Planning));
    }

    #[test]
    fn next_status_follows_the_modal() {
        assert_eq!(
            next_status(ImportStatus::DeliveredToAgent, Some("air")),
            Some(ImportStatus::AirTransport)
        );
        assert_eq!(
            next_status(ImportStatus::DeliveredToAgent, Some("truck")),
            Some(ImportStatus::MaritimeTransport)
        );
        assert_eq!(
            next_status(ImportStatus::AirTransport, None),
            Some(ImportStatus::CustomsClearance)
        );
        assert_eq!(next_status(ImportStatus::Completed, None), None);
        assert_eq!(next_status(ImportStatus::Cancelled, None), None);
    }

    #[test]
    fn walking_next_status_reaches_completed() {
        let mut current = ImportStatus::Planning;
        let mut steps = 0;
        while let Some(next) = next_status(current, Some("sea")) {
            current = next;
            steps += 1;
        }
        assert_eq!(current, ImportStatus::Completed);
        assert_eq!(steps, 6);
    }
}
