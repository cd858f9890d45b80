//! Integration tests for the campaign pipeline.

mod common;

use campanha_transform::{
    FilterStage, INVALID_KPI_MESSAGE, PipelineError, PipelineOptions, clean_campaign, process,
};
use polars::prelude::{Column, DataFrame};

use common::{column_names, column_values, test_df};

fn run(
    kpi: &DataFrame,
    loyal: Option<&DataFrame>,
    panel: Option<&DataFrame>,
) -> Result<campanha_transform::CampaignTables, PipelineError> {
    clean_campaign(Some(kpi), loyal, panel, &PipelineOptions::default())
}

#[test]
fn single_row_is_cleaned_and_renamed() {
    let kpi = test_df(vec![
        ("Contato", vec!["ana silva"]),
        ("Observação", vec!["Ensino Médio"]),
        ("Whatsapp Principal", vec!["(11) 98888-1234"]),
    ]);

    let tables = run(&kpi, None, None).unwrap();

    insta::assert_debug_snapshot!(column_names(&tables.clean_kpi), @r#"
    [
        "Nome",
        "Tipo",
        "Numero",
    ]
    "#);
    // "ANA" has three characters, so it takes the placeholder.
    assert_eq!(column_values(&tables.clean_kpi, "Nome"), vec!["CANDIDATO"]);
    assert_eq!(column_values(&tables.clean_kpi, "Tipo"), vec!["Ensino Médio"]);
    assert_eq!(column_values(&tables.clean_kpi, "Numero"), vec!["11988881234"]);

    assert_eq!(column_names(&tables.name_lookup), vec!["Nome", "Telefone"]);
    assert_eq!(column_values(&tables.name_lookup, "Nome"), vec!["CANDIDATO"]);
    assert_eq!(column_values(&tables.name_lookup, "Telefone"), vec!["11988881234"]);
}

#[test]
fn long_first_name_is_kept_upper_cased() {
    let kpi = test_df(vec![
        ("Contato", vec!["mariana silva"]),
        ("Observação", vec!["Ensino Médio"]),
        ("Whatsapp Principal", vec!["(11) 98888-1234"]),
    ]);

    let (clean, lookup) = process(Some(&kpi), None, None);
    let clean = clean.unwrap();
    let lookup = lookup.unwrap();

    assert_eq!(column_values(&clean, "Nome"), vec!["MARIANA"]);
    assert_eq!(column_values(&lookup, "Nome"), vec!["MARIANA"]);
    assert_eq!(column_values(&lookup, "Telefone"), vec!["11988881234"]);
}

#[test]
fn loyal_phone_excludes_only_row() {
    let kpi = test_df(vec![
        ("Contato", vec!["bruno lima"]),
        ("Whatsapp Principal", vec!["11999990000"]),
    ]);
    let loyal = test_df(vec![("Whatsapp Principal", vec!["(11) 99999-0000"])]);

    let err = run(&kpi, Some(&loyal), None).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::EmptyAfterFiltering {
            stage: FilterStage::Exclusion
        }
    ));
    assert!(matches!(process(Some(&kpi), Some(&loyal), None), (None, None)));
}

#[test]
fn short_contact_name_becomes_placeholder() {
    let kpi = test_df(vec![
        ("Contato", vec!["jo"]),
        ("Whatsapp Principal", vec!["11 91234-5678"]),
    ]);

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(column_values(&tables.clean_kpi, "Nome"), vec!["CANDIDATO"]);
}

#[test]
fn missing_phone_column_fails_regardless_of_lists() {
    let kpi = test_df(vec![
        ("Contato", vec!["carla souza"]),
        ("Observação", vec!["Fundamental"]),
    ]);
    let loyal = test_df(vec![("Whatsapp Principal", vec!["1"])]);
    let panel = test_df(vec![("Telefone (cobrança)", vec!["2"])]);

    let err = run(&kpi, Some(&loyal), Some(&panel)).unwrap_err();
    assert!(matches!(err, PipelineError::MissingColumn { ref column } if column == "Whatsapp Principal"));
    assert_eq!(err.user_message(), INVALID_KPI_MESSAGE);
    assert!(matches!(
        process(Some(&kpi), Some(&loyal), Some(&panel)),
        (None, None)
    ));
}

#[test]
fn duplicate_phones_keep_first_row() {
    let kpi = test_df(vec![
        ("Contato", vec!["paula dias", "pedro alves", "rita gomes"]),
        ("Observação", vec!["Médio", "Fundamental", "médio"]),
        (
            "Whatsapp Principal",
            vec!["(11) 90000-0001", "11900000001", "11 90000 0002"],
        ),
    ]);

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(column_values(&tables.clean_kpi, "Nome"), vec!["PAULA", "RITA"]);
    assert_eq!(
        column_values(&tables.clean_kpi, "Numero"),
        vec!["11900000001", "11900000002"]
    );
    assert_eq!(tables.stats.after_dedup, 2);
}

#[test]
fn absent_or_empty_kpi_fails() {
    assert!(matches!(
        clean_campaign(None, None, None, &PipelineOptions::default()),
        Err(PipelineError::MissingKpi)
    ));
    let empty = test_df(vec![("Whatsapp Principal", vec![])]);
    assert!(matches!(run(&empty, None, None), Err(PipelineError::EmptyKpi)));
}

#[test]
fn type_filter_drops_other_levels() {
    let kpi = test_df(vec![
        ("Contato", vec!["lucas melo", "julia nunes", "vitor reis"]),
        ("Observação", vec!["Superior", "ENSINO FUNDAMENTAL", ""]),
        ("Whatsapp Principal", vec!["1", "2", "3"]),
    ]);

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(column_values(&tables.clean_kpi, "Nome"), vec!["JULIA"]);
    assert_eq!(tables.stats.after_type_filter, 1);
}

#[test]
fn type_filter_skipped_without_type_column() {
    let kpi = test_df(vec![
        ("Contato", vec!["lucas melo", "julia nunes"]),
        ("Whatsapp Principal", vec!["1", "2"]),
    ]);

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(column_names(&tables.clean_kpi), vec!["Nome", "Numero"]);
    assert_eq!(tables.clean_kpi.height(), 2);
}

#[test]
fn custom_type_keywords_replace_defaults() {
    let kpi = test_df(vec![
        ("Contato", vec!["lucas melo", "julia nunes"]),
        ("Observação", vec!["Técnico", "Médio"]),
        ("Whatsapp Principal", vec!["1", "2"]),
    ]);
    let options = PipelineOptions::default().with_type_keywords(["técnico"]);

    let tables = clean_campaign(Some(&kpi), None, None, &options).unwrap();
    assert_eq!(column_values(&tables.clean_kpi, "Nome"), vec!["LUCAS"]);
}

#[test]
fn all_type_mismatches_fail_at_exclusion_checkpoint() {
    let kpi = test_df(vec![
        ("Observação", vec!["Superior"]),
        ("Whatsapp Principal", vec!["1"]),
    ]);
    assert!(matches!(
        run(&kpi, None, None),
        Err(PipelineError::EmptyAfterFiltering {
            stage: FilterStage::Exclusion
        })
    ));
}

#[test]
fn panel_excludes_by_billing_phone() {
    let kpi = test_df(vec![
        ("Contato", vec!["marcos vale", "sonia reis"]),
        ("Whatsapp Principal", vec!["(21) 3333-4444", "(21) 5555-6666"]),
    ]);
    let panel = test_df(vec![
        ("Cliente", vec!["x", "y"]),
        ("Telefone (cobrança)", vec!["2133334444", "0000"]),
    ]);

    let tables = run(&kpi, None, Some(&panel)).unwrap();
    assert_eq!(column_values(&tables.clean_kpi, "Nome"), vec!["SONIA"]);
    assert_eq!(tables.stats.panel_excluded, 1);
}

#[test]
fn lists_without_phone_column_are_ignored() {
    let kpi = test_df(vec![
        ("Contato", vec!["marcos vale"]),
        ("Whatsapp Principal", vec!["2133334444"]),
    ]);
    let loyal = test_df(vec![("Telefone", vec!["2133334444"])]);
    let panel = test_df(vec![("Whatsapp Principal", vec!["2133334444"])]);

    let tables = run(&kpi, Some(&loyal), Some(&panel)).unwrap();
    assert_eq!(tables.clean_kpi.height(), 1);
}

#[test]
fn rows_without_digits_are_dropped() {
    let kpi = test_df(vec![
        ("Contato", vec!["marcos vale", "sonia reis"]),
        ("Whatsapp Principal", vec!["sem número", "21 5555-6666"]),
    ]);

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(column_values(&tables.clean_kpi, "Numero"), vec!["2155556666"]);
    assert_eq!(tables.stats.with_phone, 1);
}

#[test]
fn missing_contact_synthesizes_placeholder_name_last() {
    let kpi = test_df(vec![
        ("Observação", vec!["Médio", "Médio"]),
        ("Whatsapp Principal", vec!["1", "2"]),
    ]);

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(
        column_names(&tables.clean_kpi),
        vec!["Tipo", "Numero", "Nome"]
    );
    assert_eq!(
        column_values(&tables.clean_kpi, "Nome"),
        vec!["CANDIDATO", "CANDIDATO"]
    );
    assert_eq!(column_values(&tables.name_lookup, "Telefone"), vec!["1"]);
}

#[test]
fn extra_columns_are_projected_away() {
    let kpi = test_df(vec![
        ("Email", vec!["a@b.c"]),
        ("Whatsapp Principal", vec!["1"]),
        ("Contato", vec!["helena"]),
    ]);

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(column_names(&tables.clean_kpi), vec!["Nome", "Numero"]);
}

#[test]
fn lookup_keeps_first_phone_per_name() {
    let kpi = test_df(vec![
        ("Contato", vec!["maria a", "joao b", "Maria c", "ze d"]),
        ("Whatsapp Principal", vec!["1", "2", "3", "4"]),
    ]);

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(
        column_values(&tables.name_lookup, "Nome"),
        vec!["MARIA", "JOAO", "CANDIDATO"]
    );
    assert_eq!(
        column_values(&tables.name_lookup, "Telefone"),
        vec!["1", "2", "4"]
    );
}

#[test]
fn numeric_phone_column_is_normalized_as_text() {
    let kpi = DataFrame::new(vec![
        Column::new("Contato".into(), &["renata lopes"]),
        Column::new("Whatsapp Principal".into(), &[11988881234.0f64]),
    ])
    .unwrap();

    let tables = run(&kpi, None, None).unwrap();
    assert_eq!(column_values(&tables.clean_kpi, "Numero"), vec!["11988881234"]);
}

#[test]
fn inputs_are_not_modified() {
    let kpi = test_df(vec![
        ("Contato", vec!["ana silva"]),
        ("Whatsapp Principal", vec!["(11) 98888-1234"]),
    ]);
    let before = kpi.clone();

    let _ = run(&kpi, None, None).unwrap();
    assert!(kpi.equals(&before));
    assert_eq!(column_values(&kpi, "Whatsapp Principal"), vec!["(11) 98888-1234"]);
}
