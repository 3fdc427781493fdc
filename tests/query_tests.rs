//! Query Compiler Tests
//!
//! Tests for translating abstract queries into the select dialect.

use sablekv::query::{
    compile, Condition, Operand, Operator, Query, SortDirection, EMPTY_SET_SENTINEL,
};
use sablekv::SableError;

const DOMAIN: &str = "test_domain";

// =============================================================================
// Basic Compilation Tests
// =============================================================================

#[test]
fn test_compile_pins_type_discriminator() {
    let query = Query::for_type("products");
    let compiled = compile(&query, DOMAIN).unwrap();

    assert_eq!(
        compiled.select_expression(),
        "SELECT * FROM test_domain WHERE simpledb_type = 'products'"
    );
    assert!(compiled.unsupported.is_empty());
}

#[test]
fn test_compile_equality_with_limit() {
    let query = Query::for_type("products")
        .condition(Condition::equals("name", Some("Foo".to_string())))
        .limit(10);
    let compiled = compile(&query, DOMAIN).unwrap();

    assert_eq!(
        compiled.select_expression(),
        "SELECT * FROM test_domain WHERE simpledb_type = 'products' AND name = 'Foo' LIMIT 10"
    );
    assert!(compiled.unsupported.is_empty());
}

#[test]
fn test_compile_count_expression() {
    let query = Query::for_type("products")
        .condition(Condition::equals("name", Some("Foo".to_string())));
    let compiled = compile(&query, DOMAIN).unwrap();

    assert_eq!(
        compiled.count_expression(),
        "SELECT count(*) FROM test_domain WHERE simpledb_type = 'products' AND name = 'Foo'"
    );
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_adds_not_null_filter_and_order_clause() {
    let query = Query::for_type("products").sort("price", SortDirection::Descending);
    let compiled = compile(&query, DOMAIN).unwrap();

    assert_eq!(
        compiled.select_expression(),
        "SELECT * FROM test_domain WHERE simpledb_type = 'products' \
         AND price IS NOT NULL ORDER BY price DESC"
    );
}

#[test]
fn test_sort_ascending_keyword() {
    let query = Query::for_type("products").sort("name", SortDirection::Ascending);
    let compiled = compile(&query, DOMAIN).unwrap();
    assert!(compiled
        .select_expression()
        .ends_with("ORDER BY name ASC"));
}

// =============================================================================
// Operator Translation Tests
// =============================================================================

#[test]
fn test_null_comparisons() {
    let query = Query::for_type("t")
        .condition(Condition::equals("a", None))
        .condition(Condition::not_equals("b", None));
    let compiled = compile(&query, DOMAIN).unwrap();

    assert_eq!(compiled.filters[1], "a IS NULL");
    assert_eq!(compiled.filters[2], "b IS NOT NULL");
}

#[test]
fn test_comparison_operators() {
    let cases = [
        (Operator::GreaterThan, "a > 'v'"),
        (Operator::GreaterOrEqual, "a >= 'v'"),
        (Operator::LessThan, "a < 'v'"),
        (Operator::LessOrEqual, "a <= 'v'"),
        (Operator::NotEquals, "a != 'v'"),
        (Operator::Like, "a like 'v'"),
        (Operator::NotLike, "a not like 'v'"),
    ];

    for (operator, expected) in cases {
        let query = Query::for_type("t").condition(Condition::new(
            "a",
            operator,
            Operand::Value("v".to_string()),
        ));
        let compiled = compile(&query, DOMAIN).unwrap();
        assert_eq!(compiled.filters[1], expected, "operator {:?}", operator);
    }
}

#[test]
fn test_membership_over_set() {
    let query = Query::for_type("t").condition(Condition::within(
        "color",
        vec!["red".to_string(), "blue".to_string()],
    ));
    let compiled = compile(&query, DOMAIN).unwrap();
    assert_eq!(compiled.filters[1], "color IN ('red','blue')");
}

#[test]
fn test_membership_over_empty_set_uses_sentinel() {
    let query = Query::for_type("t").condition(Condition::within("color", vec![]));
    let compiled = compile(&query, DOMAIN).unwrap();
    assert_eq!(
        compiled.filters[1],
        format!("color IN ('{}')", EMPTY_SET_SENTINEL)
    );
}

#[test]
fn test_membership_over_inclusive_range() {
    let query = Query::for_type("t").condition(Condition::between("n", "1", "9", true));
    let compiled = compile(&query, DOMAIN).unwrap();
    assert_eq!(compiled.filters[1], "n between '1' and '9'");
}

#[test]
fn test_is_null_operators() {
    let query = Query::for_type("t")
        .condition(Condition::new("a", Operator::IsNull, Operand::None))
        .condition(Condition::new("b", Operator::IsNotNull, Operand::None));
    let compiled = compile(&query, DOMAIN).unwrap();
    assert_eq!(compiled.filters[1], "a IS NULL");
    assert_eq!(compiled.filters[2], "b IS NOT NULL");
}

// =============================================================================
// Escaping Tests
// =============================================================================

#[test]
fn test_embedded_quotes_are_doubled() {
    let query = Query::for_type("t")
        .condition(Condition::equals("name", Some("O'Brien".to_string())));
    let compiled = compile(&query, DOMAIN).unwrap();
    assert_eq!(compiled.filters[1], "name = 'O''Brien'");
}

#[test]
fn test_type_name_is_escaped_too() {
    let query = Query::for_type("it's");
    let compiled = compile(&query, DOMAIN).unwrap();
    assert_eq!(compiled.filters[0], "simpledb_type = 'it''s'");
}

// =============================================================================
// Unsupported Condition Tests
// =============================================================================

#[test]
fn test_regex_condition_is_partitioned_not_dropped() {
    let condition = Condition::new(
        "name",
        Operator::Matches,
        Operand::Pattern("^W.*".to_string()),
    );
    let query = Query::for_type("t").condition(condition.clone());
    let compiled = compile(&query, DOMAIN).unwrap();

    assert_eq!(compiled.unsupported, vec![condition]);
    // And it must not leak into the expression
    assert!(!compiled.select_expression().contains("^W"));
}

#[test]
fn test_exclusive_range_is_partitioned() {
    let condition = Condition::between("n", "1", "9", false);
    let query = Query::for_type("t").condition(condition.clone());
    let compiled = compile(&query, DOMAIN).unwrap();

    assert_eq!(compiled.unsupported, vec![condition]);
    assert!(!compiled.select_expression().contains("between"));
}

// =============================================================================
// Contract Violation Tests
// =============================================================================

#[test]
fn test_mismatched_operand_fails_hard() {
    let query = Query::for_type("t").condition(Condition::new(
        "a",
        Operator::GreaterThan,
        Operand::Set(vec!["x".to_string()]),
    ));
    let result = compile(&query, DOMAIN);
    assert!(matches!(result, Err(SableError::InvalidQueryOperator(_))));
}

#[test]
fn test_is_null_with_value_operand_fails_hard() {
    let query = Query::for_type("t").condition(Condition::new(
        "a",
        Operator::IsNull,
        Operand::Value("x".to_string()),
    ));
    let result = compile(&query, DOMAIN);
    assert!(matches!(result, Err(SableError::InvalidQueryOperator(_))));
}
