use chrono::{TimeZone, Utc};
use lending_core::{core::FixedClock, domain::ItemVariant, LendingService};

/// Library with a fixed clock, the regular book "1984" by Orwell and user Ann.
pub fn orwell_library() -> LendingService {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 2, 8, 15, 0).unwrap());
    let mut service = LendingService::with_clock(Box::new(clock));
    service
        .add_item(ItemVariant::Regular, "1984", "Orwell", None)
        .expect("add 1984");
    service.register_user("Ann").expect("register Ann");
    service
}
