// Cache simples em memória para parses repetidos de código de horário.
//
// O detector de conflitos roda a cada mudança de seleção e os códigos
// das turmas não mudam entre execuções, então o parse é memoizado por
// código. O resultado sai como Arc para compartilhar sem clonar.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::algorithm::horario::parse_horario_em_slots;
use crate::models::Slot;

static PARSE_CACHE: OnceLock<Mutex<HashMap<String, Arc<Vec<Slot>>>>> = OnceLock::new();

// (hits, misses)
static PARSE_STATS: OnceLock<Mutex<(u64, u64)>> = OnceLock::new();

/// Slots do código, usando o cache quando disponível. Mesmo contrato de
/// `parse_horario_em_slots`: código ilegível vira lista vazia.
pub fn slots_em_cache(codigo: &str) -> Arc<Vec<Slot>> {
    let cache = PARSE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    // bloqueio curto só para consultar
    {
        let guard = cache.lock().expect("cache de horário envenenado");
        if let Some(existente) = guard.get(codigo) {
            registrar(true);
            return Arc::clone(existente);
        }
    }

    registrar(false);
    let slots = Arc::new(parse_horario_em_slots(codigo));
    let mut guard = cache.lock().expect("cache de horário envenenado");
    guard.insert(codigo.to_string(), Arc::clone(&slots));
    slots
}

/// (hits, misses, entradas) acumulados do cache de parse, para
/// diagnóstico.
pub fn estatisticas_cache() -> (u64, u64, usize) {
    let (hits, misses) = *PARSE_STATS
        .get_or_init(|| Mutex::new((0, 0)))
        .lock()
        .expect("estatísticas do cache envenenadas");
    let entradas = PARSE_CACHE
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .expect("cache de horário envenenado")
        .len();
    (hits, misses, entradas)
}

fn registrar(hit: bool) {
    let stats = PARSE_STATS.get_or_init(|| Mutex::new((0, 0)));
    let mut guard = stats.lock().expect("estatísticas do cache envenenadas");
    if hit {
        guard.0 += 1;
    } else {
        guard.1 += 1;
    }
}
