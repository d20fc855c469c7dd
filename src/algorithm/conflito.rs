// Detecção de colisões na grade semanal.

use crate::algorithm::cache::slots_em_cache;
use crate::models::{Conflito, Slot, Turma, DIAS_LETIVOS};
use crate::tabela;

/// Varre a grade (5 dias x 16 slots canônicos) e devolve uma entrada
/// por célula ocupada por mais de uma turma selecionada, na ordem
/// (dia, indice_slot).
///
/// A varredura é intencionalmente a ingênua: a seleção de um aluno tem
/// poucas turmas e isso roda a cada mudança de seleção. O parse de cada
/// código é memoizado entre execuções; turma com horário ilegível não
/// ocupa célula nenhuma.
pub fn detectar_conflitos(turmas: &[Turma]) -> Vec<Conflito> {
    let slots_por_turma: Vec<_> = turmas.iter().map(|t| slots_em_cache(&t.horario)).collect();
    let canonicos = tabela::slots_canonicos();

    let mut conflitos: Vec<Conflito> = Vec::new();
    for dia in DIAS_LETIVOS {
        for (i, &(periodo, slot)) in canonicos.iter().enumerate() {
            let ocupantes: Vec<&Turma> = turmas
                .iter()
                .zip(slots_por_turma.iter())
                .filter(|(_, slots)| {
                    slots.iter().any(|s| s.dia == dia && s.periodo == periodo && s.slot == slot)
                })
                .map(|(turma, _)| turma)
                .collect();
            if ocupantes.len() > 1 {
                conflitos.push(Conflito {
                    dia,
                    indice_slot: i as u8 + 1,
                    turmas: ocupantes.into_iter().cloned().collect(),
                });
            }
        }
    }
    conflitos
}

/// True quando as duas turmas ocupam algum mesmo (dia, turno, aula).
/// Útil para marcar pares na listagem sem montar a grade inteira.
pub fn turmas_tem_conflito(a: &Turma, b: &Turma) -> bool {
    let slots_a = slots_em_cache(&a.horario);
    let slots_b = slots_em_cache(&b.horario);
    slots_a.iter().any(|sa| slots_b.iter().any(|sb| mesma_celula(sa, sb)))
}

fn mesma_celula(a: &Slot, b: &Slot) -> bool {
    a.dia == b.dia && a.periodo == b.periodo && a.slot == b.slot
}
