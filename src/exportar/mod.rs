// Exportação da grade para agenda externa.
//
// Cada bloco contíguo da turma vira um evento semanal (um evento por
// bloco, não um por aula) com recorrência até o fim do semestre, pronto
// para o botão "adicionar à agenda" do portal.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

use crate::algorithm::grade::agrupar_slots_consecutivos;
use crate::algorithm::horario::parse_horario_em_slots;
use crate::models::Turma;

/// Evento semanal pronto para o link de agenda.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventoAgenda {
    pub titulo: String,
    pub local: Option<String>,
    /// Primeira ocorrência do bloco dentro do semestre.
    pub primeira_data: NaiveDate,
    pub inicio: NaiveTime,
    pub fim: NaiveTime,
    pub repete_ate: NaiveDate,
}

fn dia_da_semana(dia: u8) -> Option<Weekday> {
    match dia {
        2 => Some(Weekday::Mon),
        3 => Some(Weekday::Tue),
        4 => Some(Weekday::Wed),
        5 => Some(Weekday::Thu),
        6 => Some(Weekday::Fri),
        _ => None,
    }
}

/// Gera um evento por bloco contíguo da turma dentro do semestre.
/// Horário ilegível degrada para zero eventos, como no resto do motor.
pub fn eventos_da_turma(
    turma: &Turma,
    inicio_semestre: NaiveDate,
    fim_semestre: NaiveDate,
) -> Vec<EventoAgenda> {
    let slots = parse_horario_em_slots(&turma.horario);
    let blocos = agrupar_slots_consecutivos(&slots);

    let mut eventos: Vec<EventoAgenda> = Vec::new();
    for bloco in blocos {
        let alvo = match dia_da_semana(bloco.dia) {
            Some(d) => d,
            None => continue,
        };
        let inicio = match NaiveTime::parse_from_str(&bloco.inicio.inicio, "%H:%M") {
            Ok(t) => t,
            Err(_) => continue,
        };
        let fim = match NaiveTime::parse_from_str(&bloco.fim.fim, "%H:%M") {
            Ok(t) => t,
            Err(_) => continue,
        };

        // primeira ocorrência do dia da semana a partir do início do semestre
        let mut data = inicio_semestre;
        while data.weekday() != alvo {
            data += Duration::days(1);
        }
        if data > fim_semestre {
            continue;
        }

        eventos.push(EventoAgenda {
            titulo: format!("{} - {}", turma.codigo, turma.nome),
            local: turma
                .sala
                .as_ref()
                .map(|sala| format!("{} - {}", sala.bloco, sala.nome)),
            primeira_data: data,
            inicio,
            fim,
            repete_ate: fim_semestre,
        });
    }
    eventos
}

/// Monta o link de criação de evento no Google Agenda, com recorrência
/// semanal até o fim do semestre. Datas no formato compacto local
/// (AAAAMMDDTHHMMSS), sem fuso.
pub fn url_google_agenda(evento: &EventoAgenda) -> String {
    let datas = format!(
        "{}T{}/{}T{}",
        evento.primeira_data.format("%Y%m%d"),
        evento.inicio.format("%H%M%S"),
        evento.primeira_data.format("%Y%m%d"),
        evento.fim.format("%H%M%S"),
    );
    let recorrencia = format!("RRULE:FREQ=WEEKLY;UNTIL={}", evento.repete_ate.format("%Y%m%d"));

    let mut url = format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}&recur={}",
        escapar(&evento.titulo),
        datas,
        escapar(&recorrencia),
    );
    if let Some(local) = &evento.local {
        url.push_str("&location=");
        url.push_str(&escapar(local));
    }
    url
}

// Percent-encoding mínimo para os campos de texto do link.
fn escapar(texto: &str) -> String {
    let mut saida = String::with_capacity(texto.len());
    for byte in texto.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                saida.push(byte as char)
            }
            b' ' => saida.push('+'),
            _ => saida.push_str(&format!("%{:02X}", byte)),
        }
    }
    saida
}
