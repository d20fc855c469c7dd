// Leitura da oferta de turmas publicada pelo provedor de alocação.
//
// O payload é um vetor JSON com os registros de turma/sala de um
// centro. Registro danificado é pulado com aviso; só um payload que não
// é JSON aborta a leitura.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{Sala, Turma};

/// Registro cru como vem no feed. Campos ausentes viram None para que
/// um registro incompleto não derrube o lote inteiro.
///
/// # Estrutura esperada de cada registro:
/// ```json
/// {
///   "id": "1856",
///   "codigo": "GDSC0054",
///   "nome": "Estruturas de Dados",
///   "horario": "24M45",
///   "bloco": "CI",
///   "sala": "Sala 206"
/// }
/// ```
#[derive(Debug, Deserialize)]
struct RegistroOferta {
    id: Option<String>,
    codigo: Option<String>,
    nome: Option<String>,
    horario: Option<String>,
    bloco: Option<String>,
    sala: Option<String>,
}

/// Decodifica o payload JSON da oferta em turmas.
///
/// Ids repetidos acontecem quando o provedor reexporta o período; o
/// último registro vence. Horário ausente vira código vazio (turma sem
/// slots), nunca erro.
pub fn ler_oferta_json(payload: &str) -> Result<Vec<Turma>, serde_json::Error> {
    let registros: Vec<serde_json::Value> = serde_json::from_str(payload)?;

    let mut turmas: Vec<Turma> = Vec::new();
    let mut posicao_por_id: HashMap<String, usize> = HashMap::new();

    for (i, valor) in registros.into_iter().enumerate() {
        let registro: RegistroOferta = match serde_json::from_value(valor) {
            Ok(r) => r,
            Err(erro) => {
                tracing::warn!(posicao = i, %erro, "registro de oferta ilegível, pulando");
                continue;
            }
        };

        let (id, codigo, nome) = match (registro.id, registro.codigo, registro.nome) {
            (Some(id), Some(codigo), Some(nome)) => (id, codigo, nome),
            _ => {
                tracing::warn!(posicao = i, "registro de oferta sem id/codigo/nome, pulando");
                continue;
            }
        };

        let sala = match (registro.bloco, registro.sala) {
            (Some(bloco), Some(nome)) => Some(Sala { bloco, nome }),
            _ => None,
        };

        let turma = Turma {
            id,
            codigo,
            nome,
            horario: registro.horario.unwrap_or_default(),
            sala,
        };

        match posicao_por_id.get(&turma.id) {
            Some(&posicao) => {
                tracing::debug!(id = %turma.id, "id repetido na oferta, último registro vence");
                turmas[posicao] = turma;
            }
            None => {
                posicao_por_id.insert(turma.id.clone(), turmas.len());
                turmas.push(turma);
            }
        }
    }

    Ok(turmas)
}
