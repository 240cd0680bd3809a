//! Tests for the scitype taxonomy.

use scitype_model::{ScientificType, ScitypeError};

fn parse(text: &str) -> ScientificType {
    text.parse().expect("valid scitype")
}

#[test]
fn concrete_cases_refine_their_abstract_parents() {
    assert!(ScientificType::Continuous.is_subtype_of(&ScientificType::Infinite));
    assert!(ScientificType::Count.is_subtype_of(&ScientificType::Infinite));
    assert!(ScientificType::Multiclass(3).is_subtype_of(&ScientificType::Finite));
    assert!(ScientificType::OrderedFactor(5).is_subtype_of(&ScientificType::Finite));
    assert!(
        ScientificType::GrayImage {
            width: 28,
            height: 28
        }
        .is_subtype_of(&ScientificType::Image)
    );
    assert!(ScientificType::Image.is_subtype_of(&ScientificType::Known));
    assert!(!ScientificType::Continuous.is_subtype_of(&ScientificType::Finite));
}

#[test]
fn cardinality_is_part_of_the_type() {
    assert!(!ScientificType::Multiclass(2).is_subtype_of(&ScientificType::Multiclass(3)));
    assert!(!ScientificType::Multiclass(2).is_subtype_of(&ScientificType::OrderedFactor(2)));
}

#[test]
fn union_with_missing_is_not_a_subtype_of_the_bare_type() {
    let maybe = ScientificType::Continuous.with_missing();
    assert!(!maybe.is_subtype_of(&ScientificType::Continuous));
    assert!(ScientificType::Continuous.is_subtype_of(&maybe));
    assert!(maybe.admits_missing());
    assert!(!ScientificType::Continuous.admits_missing());
}

#[test]
fn table_compatibility_is_column_wise() {
    let target = ScientificType::table([ScientificType::Continuous, ScientificType::Count]);
    let mixed_column = ScientificType::Continuous.union(ScientificType::Count);

    // The union of this table's columns fits the union of the targets, but
    // the mixed column alone fits neither target.
    let table = ScientificType::table([mixed_column]);
    assert!(!table.is_subtype_of(&target));

    let plain = ScientificType::table([ScientificType::Count, ScientificType::Continuous]);
    assert!(plain.is_subtype_of(&target));
}

#[test]
fn arrays_and_tuples_compare_structurally() {
    let a = ScientificType::array(1, ScientificType::Count);
    let b = ScientificType::array(1, ScientificType::Infinite);
    let c = ScientificType::array(2, ScientificType::Infinite);
    assert!(a.is_subtype_of(&b));
    assert!(!a.is_subtype_of(&c));

    let t1 = ScientificType::Tuple(vec![ScientificType::Count, ScientificType::Missing]);
    let t2 = ScientificType::Tuple(vec![ScientificType::Infinite, ScientificType::Missing]);
    assert!(t1.is_subtype_of(&t2));
    assert!(!t2.is_subtype_of(&t1));
    assert!(!t1.is_subtype_of(&ScientificType::Tuple(vec![])));
}

#[test]
fn parses_names_and_unions() {
    assert_eq!(parse("Continuous"), ScientificType::Continuous);
    assert_eq!(parse(" Multiclass( 4 ) "), ScientificType::Multiclass(4));
    assert_eq!(
        parse("ColorImage(32, 16)"),
        ScientificType::ColorImage {
            width: 32,
            height: 16
        }
    );
    assert_eq!(
        parse("Missing | Continuous"),
        ScientificType::Continuous.with_missing()
    );
}

#[test]
fn rejects_machine_type_names() {
    for text in ["Int64", "Float64", "Multiclass", "Multiclass(x)", "GrayImage(1)", ""] {
        let err = text.parse::<ScientificType>().unwrap_err();
        assert!(matches!(err, ScitypeError::Configuration { .. }), "{text}");
    }
}

#[test]
fn display_renders_nested_types() {
    let table = ScientificType::table([
        ScientificType::Continuous.with_missing(),
        ScientificType::Count,
    ]);
    insta::assert_snapshot!(table.to_string(), @"Table(Count, Union(Continuous, Missing))");

    let array = ScientificType::array(2, ScientificType::OrderedFactor(3));
    insta::assert_snapshot!(array.to_string(), @"Array(2, OrderedFactor(3))");

    let tuple = ScientificType::Tuple(vec![
        ScientificType::GrayImage {
            width: 4,
            height: 2,
        },
        ScientificType::Unknown,
    ]);
    insta::assert_snapshot!(tuple.to_string(), @"Tuple(GrayImage(4, 2), Unknown)");
}
