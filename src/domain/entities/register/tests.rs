use super::*;
use chrono::NaiveDate;

use crate::domain::services::calculate_straight_line;
use crate::domain::value_objects::DepreciationMethod;

fn asset(id: &str, name: &str, category: AssetCategory, cost: f64, purchased: (i32, u32)) -> Asset {
    Asset {
        id: id.parse().unwrap(),
        name: name.to_string(),
        category,
        cost,
        residual_value: 0.0,
        purchase_date: NaiveDate::from_ymd_opt(purchased.0, purchased.1, 1).unwrap(),
        useful_life: 5,
        method: DepreciationMethod::StraightLine,
        rate: None,
        schedule: calculate_straight_line(cost, 0.0, 5),
    }
}

fn sample() -> Register {
    let mut register = Register::new();
    register.insert(asset("a", "forklift", AssetCategory::Machinery, 40_000.0, (2021, 3)));
    register.insert(asset("b", "Delivery Van", AssetCategory::Vehicles, 25_000.0, (2023, 1)));
    register.insert(asset("c", "Desk", AssetCategory::Furniture, 800.0, (2020, 9)));
    register.insert(asset("d", "Lathe", AssetCategory::Machinery, 12_000.0, (2022, 7)));
    register
}

fn names(assets: &[&Asset]) -> Vec<String> {
    assets.iter().map(|a| a.name.clone()).collect()
}

#[test]
fn insert_rejects_duplicate_id() {
    let mut register = Register::new();
    assert!(register.insert(asset("x", "One", AssetCategory::Tools, 10.0, (2024, 1))));
    assert!(!register.insert(asset("x", "Two", AssetCategory::Tools, 20.0, (2024, 1))));
    assert_eq!(register.len(), 1);
    assert_eq!(register.all()[0].name, "One");
}

#[test]
fn update_replaces_existing_only() {
    let mut register = sample();
    let mut desk = register.get(&"c".parse().unwrap()).unwrap().clone();
    desk.cost = 950.0;

    assert!(register.update(desk));
    assert_eq!(register.get(&"c".parse().unwrap()).unwrap().cost, 950.0);

    assert!(!register.update(asset("zz", "Ghost", AssetCategory::Other, 1.0, (2024, 1))));
    assert_eq!(register.len(), 4);
}

#[test]
fn upsert_inserts_then_replaces() {
    let mut register = Register::new();
    register.upsert(asset("p", "Printer", AssetCategory::Computers, 300.0, (2024, 2)));
    register.upsert(asset("p", "Printer", AssetCategory::Computers, 350.0, (2024, 2)));
    assert_eq!(register.len(), 1);
    assert_eq!(register.all()[0].cost, 350.0);
}

#[test]
fn remove_reports_whether_anything_changed() {
    let mut register = sample();
    let id: AssetId = "b".parse().unwrap();
    assert!(register.remove(&id));
    assert!(!register.remove(&id));
    assert_eq!(register.len(), 3);
}

#[test]
fn categories_are_distinct_in_first_seen_order() {
    assert_eq!(
        sample().categories(),
        vec![
            AssetCategory::Machinery,
            AssetCategory::Vehicles,
            AssetCategory::Furniture
        ]
    );
}

#[test]
fn query_sorts_names_case_insensitively() {
    let register = sample();
    let listed = register.query(&RegisterQuery::default());
    assert_eq!(names(&listed), ["Delivery Van", "Desk", "forklift", "Lathe"]);
}

#[test]
fn query_filters_by_category() {
    let register = sample();
    let listed = register.query(&RegisterQuery {
        category: Some(AssetCategory::Machinery),
        sort: SortKey::Cost,
        order: SortOrder::Asc,
    });
    assert_eq!(names(&listed), ["Lathe", "forklift"]);
}

#[test]
fn query_descending_by_date() {
    let register = sample();
    let listed = register.query(&RegisterQuery {
        category: None,
        sort: SortKey::Date,
        order: SortOrder::Desc,
    });
    assert_eq!(names(&listed), ["Delivery Van", "Lathe", "forklift", "Desk"]);
}

#[test]
fn query_by_category_keeps_register_order_for_ties() {
    let register = sample();
    let listed = register.query(&RegisterQuery {
        category: None,
        sort: SortKey::Category,
        order: SortOrder::Asc,
    });
    assert_eq!(names(&listed), ["Desk", "forklift", "Lathe", "Delivery Van"]);
}

#[test]
fn new_register_is_current_version() {
    let register = Register::default();
    assert_eq!(register.version, Register::CURRENT_VERSION);
    assert!(register.is_empty());
}
