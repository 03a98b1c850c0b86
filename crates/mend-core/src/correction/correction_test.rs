use super::*;

#[test]
fn test_statement_order() {
    let plan = CorrectionPlan::standard();
    let [first, second] = plan.statements();
    assert_eq!(first.label, "drop_view");
    assert_eq!(second.label, "create_view");
}

#[test]
fn test_precondition_table() {
    assert_eq!(CorrectionPlan::standard().precondition_table, "events");
}

#[test]
fn test_drop_tolerates_missing_view() {
    let sql = CorrectionPlan::standard().drop_view.sql;
    assert!(sql.trim_start().starts_with("DROP VIEW IF EXISTS"));
    assert!(sql.contains(CORRECTED_VIEW));
}

#[test]
fn test_create_is_guarded() {
    let sql = CorrectionPlan::standard().create_view.sql;
    assert!(sql
        .trim_start()
        .starts_with("CREATE MATERIALIZED VIEW IF NOT EXISTS event_attr_values_mv"));
}

#[test]
fn test_create_declares_output_schema() {
    let sql = CorrectionPlan::standard().create_view.sql;
    for column in ["`project_id` String", "`attr_value` String", "`day` Date"] {
        assert!(sql.contains(column), "missing column {column}");
    }
    assert!(sql.contains("`occurrences` UInt64"));
}

#[test]
fn test_create_aliases_aggregate_before_renaming() {
    let sql = CorrectionPlan::standard().create_view.sql;
    assert!(sql.contains("count() AS occurrences_raw"));
    assert!(sql.contains("occurrences_raw AS occurrences"));
}

#[test]
fn test_create_unions_every_attr_column() {
    let sql = CorrectionPlan::standard().create_view.sql;
    for n in 1..=ATTR_VALUE_COLUMNS {
        let needle = format!("arrayJoin(attr_values_{n}) AS attr_value");
        assert!(sql.contains(&needle), "missing {needle}");
    }
    assert!(!sql.contains(&format!("attr_values_{}", ATTR_VALUE_COLUMNS + 1)));
    assert_eq!(sql.matches("UNION ALL").count(), ATTR_VALUE_COLUMNS - 1);
}
