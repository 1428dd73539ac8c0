use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{Days, Local, Months, NaiveDate};
use gym_records::model::{Equipment, EquipmentCreate, EquipmentStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn treadmill_params() -> EquipmentCreate {
    EquipmentCreate {
        name: "Treadmill".to_string(),
        status: EquipmentStatus::Available,
        location: "Cardio Area".to_string(),
        description: "Commercial grade treadmill with incline".to_string(),
    }
}

fn treadmill(id: u32, today: NaiveDate) -> Equipment {
    Equipment::new_on(id, treadmill_params(), today)
}

fn hash_of(equipment: &Equipment) -> u64 {
    let mut hasher = DefaultHasher::new();
    equipment.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_equipment_creation_schedules_first_service() {
    let equipment = treadmill(1, date(2024, 1, 31));
    assert_eq!(equipment.id, 1);
    assert_eq!(equipment.name, "Treadmill");
    assert_eq!(equipment.status, EquipmentStatus::Available);
    assert_eq!(equipment.location, "Cardio Area");
    assert_eq!(equipment.description, "Commercial grade treadmill with incline");
    assert_eq!(equipment.last_maintenance, date(2024, 1, 31));
    assert_eq!(equipment.next_maintenance, date(2024, 2, 29));
}

#[test]
fn test_perform_maintenance_clears_fault() {
    let mut equipment = treadmill(1, date(2024, 1, 1));
    equipment.report_issue("Motor making unusual noise");
    assert_eq!(equipment.status, EquipmentStatus::OutOfOrder);

    equipment.perform_maintenance_on(3, date(2024, 1, 10));
    assert_eq!(equipment.status, EquipmentStatus::Available);
    assert_eq!(equipment.last_maintenance, date(2024, 1, 10));
    assert_eq!(equipment.next_maintenance, date(2024, 4, 10));
}

#[test]
fn test_perform_maintenance_with_system_clock() {
    let today = Local::now().date_naive();
    let mut equipment = Equipment::new(1, treadmill_params());
    assert_eq!(equipment.last_maintenance, today);
    assert_eq!(equipment.next_maintenance, today + Months::new(1));
    equipment.status = EquipmentStatus::UnderMaintenance;
    equipment.perform_maintenance(3);
    assert_eq!(equipment.last_maintenance, today);
    assert_eq!(equipment.next_maintenance, today + Months::new(3));
    assert_eq!(equipment.status, EquipmentStatus::Available);
}

#[test]
fn test_is_maintenance_due_boundaries() {
    let mut equipment = treadmill(1, date(2024, 1, 1));
    equipment.next_maintenance = date(2024, 6, 1);
    assert!(equipment.is_maintenance_due_on(date(2024, 6, 1)));
    assert!(!equipment.is_maintenance_due_on(date(2024, 5, 31)));
    assert!(equipment.is_maintenance_due_on(date(2024, 6, 2)));

    let today = Local::now().date_naive();
    equipment.next_maintenance = today;
    assert!(equipment.is_maintenance_due());
    equipment.next_maintenance = today + Days::new(1);
    assert!(!equipment.is_maintenance_due());
    equipment.next_maintenance = today - Days::new(1);
    assert!(equipment.is_maintenance_due());
}

#[test]
fn test_report_issue_overwrites_description() {
    let mut equipment = treadmill(1, date(2024, 1, 1));
    equipment.report_issue("Motor making unusual noise");
    assert_eq!(equipment.status, EquipmentStatus::OutOfOrder);
    assert_eq!(equipment.description, "Motor making unusual noise");
}

#[test]
fn test_status_and_location_updates() {
    let mut equipment = treadmill(1, date(2024, 1, 1));
    equipment.status = EquipmentStatus::InUse;
    assert_eq!(equipment.status.to_string(), "In Use");
    equipment.status = EquipmentStatus::UnderMaintenance;
    assert_eq!(equipment.status.to_string(), "Under Maintenance");
    equipment.location = "Weight Area".to_string();
    assert_eq!(equipment.location, "Weight Area");
}

#[test]
fn test_status_serializes_to_display_names() {
    assert_eq!(serde_json::to_string(&EquipmentStatus::OutOfOrder).unwrap(), r#""Out of Order""#);
    let status: EquipmentStatus = serde_json::from_str(r#""In Use""#).unwrap();
    assert_eq!(status, EquipmentStatus::InUse);
}

#[test]
fn test_equality_on_id() {
    let equipment = treadmill(1, date(2024, 1, 1));
    let mut same = treadmill(1, date(2024, 3, 1));
    same.name = "Exercise Bike".to_string();
    let different = treadmill(2, date(2024, 1, 1));

    assert_eq!(equipment, same);
    assert_eq!(hash_of(&equipment), hash_of(&same));
    assert_ne!(equipment, different);
    assert_ne!(hash_of(&equipment), hash_of(&different));
}

#[test]
fn test_display() {
    let text = treadmill(1, date(2024, 1, 1)).to_string();
    assert!(text.contains("#1"));
    assert!(text.contains("Treadmill"));
    assert!(text.contains("[Available]"));
    assert!(text.contains("Cardio Area"));
}
