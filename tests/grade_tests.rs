use aquario_horarios::algorithm::grade::agrupar_slots_consecutivos;
use aquario_horarios::algorithm::horario::parse_horario_em_slots;
use aquario_horarios::models::{Periodo, Slot};
use aquario_horarios::tabela;

#[test]
fn test_aulas_adjacentes_formam_um_bloco() {
    let blocos = agrupar_slots_consecutivos(&parse_horario_em_slots("2M56"));
    assert_eq!(blocos.len(), 1);
    assert_eq!(blocos[0].dia, 2);
    assert_eq!(blocos[0].inicio.slot, 5);
    assert_eq!(blocos[0].fim.slot, 6);
    assert_eq!(blocos[0].inicio.inicio, "11:00");
    assert_eq!(blocos[0].fim.fim, "13:00");
}

#[test]
fn test_virada_de_turno_nao_funde() {
    // M6 termina 13:00 e T1 começa 13:00, mas são blocos distintos
    let blocos = agrupar_slots_consecutivos(&parse_horario_em_slots("2M6 2T1"));
    assert_eq!(blocos.len(), 2);
    assert_eq!(blocos[0].fim.fim, "13:00");
    assert_eq!(blocos[1].inicio.inicio, "13:00");
}

#[test]
fn test_buraco_na_sequencia_quebra_o_bloco() {
    let blocos = agrupar_slots_consecutivos(&parse_horario_em_slots("2M134"));
    assert_eq!(blocos.len(), 2);
    assert_eq!((blocos[0].inicio.slot, blocos[0].fim.slot), (1, 1));
    assert_eq!((blocos[1].inicio.slot, blocos[1].fim.slot), (3, 4));
}

#[test]
fn test_dias_diferentes_nao_se_misturam() {
    let blocos = agrupar_slots_consecutivos(&parse_horario_em_slots("24M12"));
    assert_eq!(blocos.len(), 2);
    assert_eq!(blocos[0].dia, 2);
    assert_eq!(blocos[1].dia, 4);
}

#[test]
fn test_saida_nao_depende_da_ordem_de_entrada() {
    let mut slots = parse_horario_em_slots("246M123 35T34");
    let direto = agrupar_slots_consecutivos(&slots);
    slots.reverse();
    let invertido = agrupar_slots_consecutivos(&slots);
    assert_eq!(direto, invertido);
}

#[test]
fn test_reexpandir_blocos_devolve_o_conjunto_original() {
    let entrada = parse_horario_em_slots("246M123 35T34 2N12");
    let blocos = agrupar_slots_consecutivos(&entrada);

    // reexpandir cada bloco aula a aula, consultando a tabela de novo
    let mut reexpandido: Vec<Slot> = Vec::new();
    for bloco in &blocos {
        assert_eq!(bloco.inicio.periodo, bloco.fim.periodo);
        for aula in bloco.inicio.slot..=bloco.fim.slot {
            let (inicio, fim) = tabela::horario_do_slot(bloco.inicio.periodo, aula).unwrap();
            reexpandido.push(Slot {
                dia: bloco.dia,
                periodo: bloco.inicio.periodo,
                slot: aula,
                inicio: inicio.to_string(),
                fim: fim.to_string(),
            });
        }
    }

    assert_eq!(reexpandido, entrada);
}

#[test]
fn test_entrada_vazia() {
    assert!(agrupar_slots_consecutivos(&[]).is_empty());
}

#[test]
fn test_turnos_sao_ordenados_na_ordem_do_dia() {
    // mesmo chegando fora de ordem, tarde vem depois da manhã
    let slots = parse_horario_em_slots("2T1 2M6");
    let blocos = agrupar_slots_consecutivos(&slots);
    assert_eq!(blocos.len(), 2);
    assert_eq!(blocos[0].inicio.periodo, Periodo::M);
    assert_eq!(blocos[1].inicio.periodo, Periodo::T);
}
