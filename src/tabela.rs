// Tabela fixa de horários da instituição.
//
// (periodo, slot) determina o horário de relógio do slot. A tabela é
// constante de processo: uma mudança de semestre substitui a tabela
// inteira, nunca entradas isoladas.

use crate::models::Periodo;

const MANHA: [(&str, &str); 6] = [
    ("07:00", "08:00"),
    ("08:00", "09:00"),
    ("09:00", "10:00"),
    ("10:00", "11:00"),
    ("11:00", "12:00"),
    ("12:00", "13:00"),
];

const TARDE: [(&str, &str); 6] = [
    ("13:00", "14:00"),
    ("14:00", "15:00"),
    ("15:00", "16:00"),
    ("16:00", "17:00"),
    ("17:00", "18:00"),
    ("18:00", "19:00"),
];

// A noite tem 4 aulas de 50 minutos.
const NOITE: [(&str, &str); 4] = [
    ("19:00", "19:50"),
    ("19:50", "20:40"),
    ("20:40", "21:30"),
    ("21:30", "22:20"),
];

/// Total de slots canônicos de um dia (6 manhã + 6 tarde + 4 noite).
pub const SLOTS_POR_DIA: u8 = 16;

/// Início e fim de relógio para (periodo, slot), com `slot` 1-based.
/// Fora dos limites do turno devolve None.
pub fn horario_do_slot(periodo: Periodo, slot: u8) -> Option<(&'static str, &'static str)> {
    if slot == 0 {
        return None;
    }
    let idx = (slot - 1) as usize;
    match periodo {
        Periodo::M => MANHA.get(idx).copied(),
        Periodo::T => TARDE.get(idx).copied(),
        Periodo::N => NOITE.get(idx).copied(),
    }
}

/// Índice 1-based de (periodo, slot) na ordem canônica do dia
/// (M1..M6 = 1..6, T1..T6 = 7..12, N1..N4 = 13..16).
pub fn indice_canonico(periodo: Periodo, slot: u8) -> Option<u8> {
    horario_do_slot(periodo, slot)?;
    let base = match periodo {
        Periodo::M => 0,
        Periodo::T => 6,
        Periodo::N => 12,
    };
    Some(base + slot)
}

/// Os 16 pares (periodo, slot) de um dia, na ordem canônica.
pub fn slots_canonicos() -> Vec<(Periodo, u8)> {
    let mut saida = Vec::with_capacity(SLOTS_POR_DIA as usize);
    for periodo in [Periodo::M, Periodo::T, Periodo::N] {
        for slot in 1..=periodo.total_slots() {
            saida.push((periodo, slot));
        }
    }
    saida
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limites_dos_turnos() {
        // M6 termina quando T1 começa; os turnos continuam sendo blocos
        // distintos na grade.
        assert_eq!(horario_do_slot(Periodo::M, 6), Some(("12:00", "13:00")));
        assert_eq!(horario_do_slot(Periodo::T, 1), Some(("13:00", "14:00")));
        assert_eq!(horario_do_slot(Periodo::N, 1), Some(("19:00", "19:50")));
        assert_eq!(horario_do_slot(Periodo::N, 4), Some(("21:30", "22:20")));
    }

    #[test]
    fn test_fora_dos_limites() {
        assert_eq!(horario_do_slot(Periodo::M, 0), None);
        assert_eq!(horario_do_slot(Periodo::M, 7), None);
        assert_eq!(horario_do_slot(Periodo::N, 5), None);
    }

    #[test]
    fn test_indices_canonicos() {
        assert_eq!(indice_canonico(Periodo::M, 1), Some(1));
        assert_eq!(indice_canonico(Periodo::T, 1), Some(7));
        assert_eq!(indice_canonico(Periodo::N, 1), Some(13));
        assert_eq!(indice_canonico(Periodo::N, 4), Some(16));
        assert_eq!(indice_canonico(Periodo::N, 5), None);
    }

    #[test]
    fn test_ordem_canonica_cobre_o_dia() {
        let slots = slots_canonicos();
        assert_eq!(slots.len(), SLOTS_POR_DIA as usize);
        for (i, (periodo, slot)) in slots.iter().enumerate() {
            assert_eq!(indice_canonico(*periodo, *slot), Some(i as u8 + 1));
        }
    }
}
