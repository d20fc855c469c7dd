// Módulo de alto nível do motor de grade.
// Declara os submódulos (arquivos na pasta `src/algorithm`).
pub mod cache;
pub mod conflito;
pub mod grade;
pub mod horario;

// Reexportar a API que o resto do portal consome
pub use cache::{estatisticas_cache, slots_em_cache};
pub use conflito::{detectar_conflitos, turmas_tem_conflito};
pub use grade::agrupar_slots_consecutivos;
pub use horario::{parse_horario, parse_horario_em_slots, ParseHorario};
