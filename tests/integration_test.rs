use chrono::NaiveDate;
use gym_records::config::Config;
use gym_records::framework::mock::FixedClock;
use gym_records::framework::{Clock, Context, FrameworkError};
use gym_records::model::{
    EquipmentCreate, EquipmentStatus, EquipmentUpdate, MemberCreate, MemberUpdate, PaymentCreate, PaymentStatus,
};
use gym_records::runtime::GymSystem;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn test_config() -> Config {
    Config {
        password_cost: 4,
        ..Config::default()
    }
}

fn alice(start: NaiveDate, end: NaiveDate) -> MemberCreate {
    MemberCreate {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "s3cret".to_string(),
        membership_type: "Basic".to_string(),
        membership_start: start,
        membership_end: end,
    }
}

fn rower() -> EquipmentCreate {
    EquipmentCreate {
        name: "Rowing Machine".to_string(),
        status: EquipmentStatus::Available,
        location: "Cardio Area".to_string(),
        description: "Air resistance rower".to_string(),
    }
}

/// Full walkthrough of members, equipment and payments against a pinned clock.
#[test]
fn test_full_gym_system_integration() {
    let clock = FixedClock::ymd(2024, 1, 15);
    let mut system = GymSystem::with_clock(test_config(), clock.clone());

    // Members
    let member_id = system
        .register_member(alice(date(2024, 1, 1), date(2024, 2, 1)))
        .expect("Failed to register member");
    assert!(system.authenticate(member_id, "s3cret"));
    assert!(!system.authenticate(member_id, "guess"));
    assert!(!system.authenticate(999, "s3cret"));
    assert!(system.is_membership_active(member_id).unwrap());

    let (start, end) = system.renew_membership(member_id, 3).unwrap();
    assert_eq!((start, end), (date(2024, 2, 1), date(2024, 5, 1)));

    // Let the membership lapse, then renew again
    clock.set(date(2024, 6, 10));
    assert!(!system.is_membership_active(member_id).unwrap());
    let (start, end) = system.renew_membership(member_id, 1).unwrap();
    assert_eq!((start, end), (date(2024, 6, 10), date(2024, 7, 10)));

    // Equipment
    clock.set(date(2024, 1, 15));
    let rower_id = system.add_equipment(rower()).unwrap();
    let equipment = system.equipment.get(rower_id).unwrap();
    assert_eq!(equipment.last_maintenance, date(2024, 1, 15));
    assert_eq!(equipment.next_maintenance, date(2024, 2, 15));
    assert!(system.equipment_due_for_maintenance().is_empty());

    clock.set(date(2024, 2, 15));
    assert_eq!(system.equipment_due_for_maintenance(), vec![rower_id]);

    system.report_issue(rower_id, "Chain snapped").unwrap();
    let equipment = system.equipment.get(rower_id).unwrap();
    assert_eq!(equipment.status, EquipmentStatus::OutOfOrder);
    assert_eq!(equipment.description, "Chain snapped");

    let next = system.perform_maintenance(rower_id, Some(6)).unwrap();
    assert_eq!(next, date(2024, 8, 15));
    assert_eq!(system.equipment.get(rower_id).unwrap().status, EquipmentStatus::Available);
    assert!(system.equipment_due_for_maintenance().is_empty());

    // Payments
    let payment_id = system
        .record_payment(PaymentCreate {
            member_id,
            amount: 99.99,
            method: "Credit Card".to_string(),
            description: "Quarterly fee".to_string(),
        })
        .unwrap();
    assert_eq!(system.payments.get(payment_id).unwrap().date, date(2024, 2, 15));
    assert!(!system.refund_payment(payment_id, "too early").unwrap());
    assert!(system.process_payment(payment_id, "TXN1").unwrap());
    assert!(system.refund_payment(payment_id, "request").unwrap());
    assert!(!system.refund_payment(payment_id, "request").unwrap());

    let payment = system.payments.get(payment_id).unwrap();
    assert_eq!(payment.status(), PaymentStatus::Refunded);
    assert_eq!(payment.description, "Refunded: request");

    let receipt = system.receipt(payment_id).unwrap();
    assert!(receipt.starts_with("Receipt\n-------\nPayment ID: 1\n"));
    assert!(receipt.contains("Status: Refunded\n"));
    assert!(receipt.contains("Transaction ID: TXN1\n"));
}

#[test]
fn test_configured_maintenance_interval() {
    let clock = FixedClock::ymd(2024, 3, 31);
    let config = Config {
        maintenance_interval_months: 2,
        ..test_config()
    };
    let mut system = GymSystem::with_clock(config, clock);

    // Creation keeps the one-month schedule regardless of the configured interval
    let id = system.add_equipment(rower()).unwrap();
    assert_eq!(system.equipment.get(id).unwrap().next_maintenance, date(2024, 4, 30));
    assert_eq!(system.perform_maintenance(id, None).unwrap(), date(2024, 5, 31));
    assert_eq!(system.perform_maintenance(id, Some(1)).unwrap(), date(2024, 4, 30));
}

#[test]
fn test_updates_through_store() {
    let clock = FixedClock::ymd(2024, 1, 15);
    let mut system = GymSystem::with_clock(test_config(), clock.clone());
    let config = test_config();
    let ctx = Context::new(clock.today(), &config);

    let member_id = system.register_member(alice(date(2024, 1, 1), date(2024, 2, 1))).unwrap();
    let update = MemberUpdate {
        active: Some(false),
        ..MemberUpdate::default()
    };
    let member = system.members.update(member_id, update, &ctx).unwrap();
    assert!(!member.user.active);
    assert!(!system.is_membership_active(member_id).unwrap());

    let rower_id = system.add_equipment(rower()).unwrap();
    let update = EquipmentUpdate {
        status: Some(EquipmentStatus::InUse),
        ..EquipmentUpdate::default()
    };
    assert_eq!(
        system.equipment.update(rower_id, update, &ctx).unwrap().status,
        EquipmentStatus::InUse
    );
}

#[test]
fn test_missing_records_and_failures() {
    let mut system = GymSystem::with_clock(test_config(), FixedClock::ymd(2024, 1, 15));

    assert_eq!(system.renew_membership(42, 1), Err(FrameworkError::NotFound("42".into())));
    assert_eq!(system.perform_maintenance(42, None), Err(FrameworkError::NotFound("42".into())));
    assert_eq!(system.process_payment(42, "TXN"), Err(FrameworkError::NotFound("42".into())));

    let payment_id = system
        .record_payment(PaymentCreate {
            member_id: 1,
            amount: 20.0,
            method: "Cash".to_string(),
            description: "Towel rental".to_string(),
        })
        .unwrap();
    assert!(system.fail_payment(payment_id).unwrap());
    // Processing always succeeds, even after a failure
    assert!(system.process_payment(payment_id, "TXN").unwrap());
    assert!(!system.fail_payment(payment_id).unwrap());
}

#[test]
fn test_bad_password_cost_fails_registration() {
    let config = Config {
        password_cost: 2,
        ..Config::default()
    };
    let mut system = GymSystem::with_clock(config, FixedClock::ymd(2024, 1, 15));
    let result = system.register_member(alice(date(2024, 1, 1), date(2024, 2, 1)));
    assert!(matches!(result, Err(FrameworkError::Custom(_))));
    assert!(system.members.is_empty());
}
