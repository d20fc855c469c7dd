// Parser do código compacto de horário para slots da grade.
//
// Um código combina dias, turno e aulas, ex.: "246M12" = segunda,
// quarta e sexta, manhã, aulas 1 e 2. Um mesmo código pode trazer mais
// de um grupo (ex.: "2M12 4T34"); todos os grupos são extraídos.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Periodo, Slot};
use crate::tabela;

// Um grupo é <dias><turno><aulas>. O que não casar com grupo nenhum
// (separadores, texto legado) é ignorado.
static GRUPO_HORARIO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([2-6]+)\s*([MTNmtn])\s*([1-6]+)").expect("regex de horário inválida"));

/// Resultado detalhado do parse, para diagnóstico de qualidade dos
/// dados: distingue turma sem horário de código que veio danificado.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseHorario {
    /// Código vazio (ou só espaços): turma legitimamente sem horário.
    Vazio,
    /// Código não vazio sem nenhum grupo reconhecível.
    NaoReconhecido,
    /// Pelo menos um grupo reconhecido.
    Slots(Vec<Slot>),
}

/// Converte um código de horário em slots da grade, já ordenados por
/// (dia, turno, aula) e sem repetição.
///
/// Código malformado ou vazio degrada para lista vazia, nunca erro: o
/// feed de origem é uma exportação institucional que nem sempre vem
/// limpa, e um registro ruim não pode derrubar a grade inteira.
pub fn parse_horario_em_slots(codigo: &str) -> Vec<Slot> {
    match parse_horario(codigo) {
        ParseHorario::Slots(slots) => slots,
        ParseHorario::Vazio | ParseHorario::NaoReconhecido => Vec::new(),
    }
}

/// Variante de `parse_horario_em_slots` que preserva o motivo de uma
/// saída vazia.
pub fn parse_horario(codigo: &str) -> ParseHorario {
    let codigo = codigo.trim();
    if codigo.is_empty() {
        return ParseHorario::Vazio;
    }

    let mut slots: Vec<Slot> = Vec::new();
    for grupo in GRUPO_HORARIO.captures_iter(codigo) {
        let periodo = match grupo[2].chars().next().and_then(Periodo::from_char) {
            Some(p) => p,
            None => continue,
        };
        for dia_ch in grupo[1].chars() {
            let dia = dia_ch as u8 - b'0';
            for slot_ch in grupo[3].chars() {
                let slot = slot_ch as u8 - b'0';
                // aula fora do turno (ex.: N5) é descartada
                if let Some((inicio, fim)) = tabela::horario_do_slot(periodo, slot) {
                    slots.push(Slot {
                        dia,
                        periodo,
                        slot,
                        inicio: inicio.to_string(),
                        fim: fim.to_string(),
                    });
                }
            }
        }
    }

    if slots.is_empty() {
        tracing::debug!(codigo, "código de horário sem grupo reconhecível");
        return ParseHorario::NaoReconhecido;
    }

    // grupos repetidos ou sobrepostos colapsam: a saída é um conjunto
    slots.sort_by_key(|s| (s.dia, s.periodo, s.slot));
    slots.dedup();
    ParseHorario::Slots(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codigo_basico() {
        let slots = parse_horario_em_slots("246M12");
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0].dia, 2);
        assert_eq!(slots[0].periodo, Periodo::M);
        assert_eq!(slots[0].slot, 1);
        assert_eq!(slots[0].inicio, "07:00");
        assert_eq!(slots[0].fim, "08:00");
    }

    #[test]
    fn test_codigo_ilegivel_vira_vazio() {
        assert!(parse_horario_em_slots("").is_empty());
        assert!(parse_horario_em_slots("SIGAA?").is_empty());
        assert_eq!(parse_horario(""), ParseHorario::Vazio);
        assert_eq!(parse_horario("???"), ParseHorario::NaoReconhecido);
    }

    #[test]
    fn test_grupos_multiplos() {
        let slots = parse_horario_em_slots("2M12 4T34");
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].periodo, Periodo::M);
        assert_eq!(slots[2].periodo, Periodo::T);
        assert_eq!(slots[2].dia, 4);
    }
}
