// Biblioteca raiz do crate `aquario-horarios`.
// Motor de grade do montador de horários do Aquário: parse dos códigos
// de horário, agrupamento de slots para a grade e detecção de choques
// entre as turmas selecionadas.
pub mod algorithm;
pub mod exportar;
pub mod models;
pub mod oferta;
pub mod tabela;

// Reexportar a superfície que as camadas de cima usam direto
pub use algorithm::{
    agrupar_slots_consecutivos, detectar_conflitos, parse_horario, parse_horario_em_slots,
    turmas_tem_conflito, ParseHorario,
};
pub use models::{BlocoGrade, Conflito, Periodo, Sala, Slot, Turma};
