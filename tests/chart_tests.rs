use std::collections::HashSet;
use tipagens::{Type, TypeChart, TYPE_COUNT};

#[test]
fn chart_is_a_complete_matrix() {
    let chart = TypeChart::embedded();
    assert_eq!(chart.len(), TYPE_COUNT);

    let attackers: HashSet<Type> = chart.rows().iter().map(|r| r.attacking).collect();
    assert_eq!(attackers.len(), TYPE_COUNT);

    for row in chart.rows() {
        assert_eq!(row.entries.len(), TYPE_COUNT, "row {}", row.attacking);
        let defenders: HashSet<Type> = row.entries.iter().map(|e| e.defending).collect();
        assert_eq!(defenders.len(), TYPE_COUNT, "row {}", row.attacking);
    }
}

#[test]
fn multipliers_are_non_negative() {
    for row in TypeChart::embedded().rows() {
        for entry in &row.entries {
            assert!(
                entry.multiplier >= 0.0,
                "{} vs {} is {}",
                row.attacking,
                entry.defending,
                entry.multiplier
            );
        }
    }
}

#[test]
fn rows_list_defenders_in_canonical_order() {
    for row in TypeChart::embedded().rows() {
        let order: Vec<Type> = row.entries.iter().map(|e| e.defending).collect();
        assert_eq!(order, Type::ALL.to_vec(), "row {}", row.attacking);
    }
}

#[test]
fn rows_iterate_in_file_order() {
    let order: Vec<&str> = TypeChart::embedded()
        .rows()
        .iter()
        .map(|r| r.attacking.as_str())
        .collect();
    assert_eq!(
        order,
        vec![
            "agua",
            "alien",
            "desconhecido",
            "deus",
            "docrates",
            "dragao",
            "eletrico",
            "fantasma",
            "fera",
            "fogo",
            "gelo",
            "inseto",
            "luz",
            "magico",
            "marinho",
            "mistico",
            "normal",
            "nostalgico",
            "pedra",
            "planta",
            "psiquico",
            "subterraneo",
            "tecnologia",
            "tempo",
            "terrestre",
            "trevas",
            "venenoso",
            "vento",
            "voador",
            "zumbi",
        ]
    );
}

#[test]
fn agua_row_values() {
    let chart = TypeChart::embedded();
    let agua = chart.row(Type::Agua).expect("agua row");
    assert_eq!(agua.multiplier(Type::Eletrico), Some(3.0));
    assert_eq!(agua.multiplier(Type::Marinho), Some(0.5));
    assert_eq!(agua.multiplier(Type::Planta), Some(2.0));
    assert_eq!(chart.multiplier(Type::Agua, Type::Desconhecido), 0.5);
}

#[test]
fn off_scale_values_are_kept() {
    let chart = TypeChart::embedded();
    assert_eq!(chart.multiplier(Type::Fera, Type::Vento), 1.2);
    assert_eq!(chart.multiplier(Type::Fera, Type::Eletrico), 1.2);
    assert_eq!(chart.multiplier(Type::Fantasma, Type::Luz), 5.0);
    assert_eq!(chart.multiplier(Type::Zumbi, Type::Fantasma), 0.0);
}

#[test]
fn combined_effectiveness_multiplies() {
    let chart = TypeChart::embedded();
    let expected =
        chart.multiplier(Type::Agua, Type::Eletrico) * chart.multiplier(Type::Agua, Type::Marinho);
    assert_eq!(
        chart.effectiveness(Type::Agua, &[Type::Eletrico, Type::Marinho]),
        expected
    );
    assert_eq!(chart.effectiveness(Type::Agua, &[]), 1.0);
}
