//! Demo walkthrough of the gym records and the library catalog.
//!
//! 1.  Setting up the [`GymSystem`] from flags or the environment.
//! 2.  Registering a member, servicing equipment and settling a payment.
//! 3.  Managing a small [`BookService`] catalog.

use chrono::Days;
use clap::Parser;
use gym_records::catalog::BookService;
use gym_records::config::{Config, GymArgs};
use gym_records::model::{Book, EquipmentCreate, EquipmentStatus, MemberCreate, PaymentCreate};
use gym_records::runtime::{setup_tracing, GymSystem};
use tracing::{error, info};

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_args(GymArgs::parse()).map_err(|e| e.to_string())?;
    info!("Starting gym records demo");

    let mut system = GymSystem::new(config);
    let today = system.today();

    // Register a member whose membership runs out next month
    let member_params = MemberCreate {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "correct horse".to_string(),
        membership_type: "Premium".to_string(),
        membership_start: today,
        membership_end: today.checked_add_days(Days::new(30)).unwrap_or(today),
    };
    let member_id = {
        let _span = tracing::info_span!("member_registration").entered();
        system.register_member(member_params).map_err(|e| e.to_string())?
    };
    info!(member_id, authenticated = system.authenticate(member_id, "correct horse"), "Member registered");

    let (start, end) = system.renew_membership(member_id, 12).map_err(|e| e.to_string())?;
    info!(member_id, %start, %end, "Membership renewed");

    // Equipment lifecycle
    let treadmill = system
        .add_equipment(EquipmentCreate {
            name: "Treadmill".to_string(),
            status: EquipmentStatus::Available,
            location: "Cardio Area".to_string(),
            description: "Commercial grade treadmill with incline".to_string(),
        })
        .map_err(|e| e.to_string())?;
    system
        .report_issue(treadmill, "Belt slipping")
        .map_err(|e| e.to_string())?;
    let next = system
        .perform_maintenance(treadmill, Some(3))
        .map_err(|e| e.to_string())?;
    info!(equipment_id = treadmill, %next, "Treadmill serviced");

    // Payment lifecycle
    let payment_id = {
        let _span = tracing::info_span!("payment_processing").entered();
        let payment_id = system
            .record_payment(PaymentCreate {
                member_id,
                amount: 99.99,
                method: "Credit Card".to_string(),
                description: "Annual membership".to_string(),
            })
            .map_err(|e| e.to_string())?;
        system
            .process_payment(payment_id, "TXN1")
            .map_err(|e| e.to_string())?;
        payment_id
    };
    match system.receipt(payment_id) {
        Ok(receipt) => info!("\n{receipt}"),
        Err(e) => error!(error = %e, "Receipt generation failed"),
    }

    // Library catalog
    let mut catalog = BookService::new();
    catalog.add_book(Book::new("9780132350884", "Clean Code", "Robert C. Martin", 2008));
    catalog.add_book(Book::new("9781593278281", "The Rust Programming Language", "Steve Klabnik", 2018));
    catalog.update_book_availability("9780132350884", false);
    for book in catalog.all_books() {
        info!(%book, "Catalog entry");
    }

    info!("Demo completed successfully");
    Ok(())
}
