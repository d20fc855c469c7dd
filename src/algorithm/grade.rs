// Agrupamento de slots consecutivos em blocos da grade.

use crate::models::{BlocoGrade, Slot};

/// Colapsa um conjunto de slots nos blocos máximos de slots adjacentes,
/// um bloco por sequência contígua de cada dia.
///
/// Dois slots são adjacentes quando compartilham dia e turno e os
/// números de aula diferem em exatamente 1. Turnos distintos nunca se
/// fundem, mesmo com relógio contíguo (M6 termina 13:00 e T1 começa
/// 13:00): a instituição trata cada turno como bloco próprio de
/// alocação, e a grade preserva isso.
///
/// A saída não depende da ordem de entrada; quem consome usa
/// `inicio.inicio` e `fim.fim` como limites do bloco.
pub fn agrupar_slots_consecutivos(slots: &[Slot]) -> Vec<BlocoGrade> {
    let mut ordenados: Vec<Slot> = slots.to_vec();
    ordenados.sort_by_key(|s| (s.dia, s.periodo, s.slot));
    ordenados.dedup();

    let mut blocos: Vec<BlocoGrade> = Vec::new();
    for slot in ordenados {
        match blocos.last_mut() {
            Some(bloco)
                if bloco.dia == slot.dia
                    && bloco.fim.periodo == slot.periodo
                    && slot.slot == bloco.fim.slot + 1 =>
            {
                bloco.fim = slot;
            }
            _ => blocos.push(BlocoGrade {
                dia: slot.dia,
                inicio: slot.clone(),
                fim: slot,
            }),
        }
    }
    blocos
}
