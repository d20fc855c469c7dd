// Estruturas de dados principais

use serde::{Deserialize, Serialize};

/// Numeração de dias usada nos códigos de horário: 2=segunda .. 6=sexta.
pub const SEGUNDA: u8 = 2;
pub const TERCA: u8 = 3;
pub const QUARTA: u8 = 4;
pub const QUINTA: u8 = 5;
pub const SEXTA: u8 = 6;

/// Dias com aula, na ordem da semana.
pub const DIAS_LETIVOS: [u8; 5] = [SEGUNDA, TERCA, QUARTA, QUINTA, SEXTA];

/// Turno de um slot de aula. A ordem de declaração (M, T, N) é a ordem
/// canônica dos turnos dentro de um dia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Periodo {
    M,
    T,
    N,
}

impl Periodo {
    /// Quantidade de slots do turno: manhã e tarde têm 6, noite tem 4.
    pub fn total_slots(&self) -> u8 {
        match self {
            Periodo::M | Periodo::T => 6,
            Periodo::N => 4,
        }
    }

    pub fn from_char(c: char) -> Option<Periodo> {
        match c.to_ascii_uppercase() {
            'M' => Some(Periodo::M),
            'T' => Some(Periodo::T),
            'N' => Some(Periodo::N),
            _ => None,
        }
    }
}

/// Um slot da grade semanal já resolvido para horário de relógio.
/// A tripla (dia, periodo, slot) determina inicio/fim pela tabela fixa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    pub dia: u8,
    pub periodo: Periodo,
    pub slot: u8,
    pub inicio: String,
    pub fim: String,
}

/// Referência de sala onde a turma acontece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sala {
    pub bloco: String,
    pub nome: String,
}

/// Turma ofertada, como vem do provedor de alocação. Entrada somente
/// leitura: o motor nunca cria nem altera turmas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turma {
    pub id: String,
    pub codigo: String,
    pub nome: String,
    /// Código compacto de horário, ex.: "246M12". Pode vir vazio ou em
    /// formato legado; nesse caso a turma não ocupa nenhum slot.
    pub horario: String,
    pub sala: Option<Sala>,
}

/// Bloco contíguo de slots de um mesmo dia e turno, para renderização da
/// grade e exportação de agenda. `inicio` e `fim` são o primeiro e o
/// último slot do bloco.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlocoGrade {
    pub dia: u8,
    pub inicio: Slot,
    pub fim: Slot,
}

/// Célula da grade ocupada por mais de uma turma selecionada.
/// `indice_slot` é 1-based na ordem canônica do dia (M1..M6, T1..T6,
/// N1..N4).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflito {
    pub dia: u8,
    pub indice_slot: u8,
    pub turmas: Vec<Turma>,
}
