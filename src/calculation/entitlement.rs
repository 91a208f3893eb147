//! Entitlement lookup built from loaded configuration.

use std::collections::HashMap;

use crate::config::EntitlementRule;
use crate::models::LeaveType;

/// The sentinel entitlement marking a leave type as effectively unlimited.
///
/// Unpaid leave carries this value. Consumers must special-case it for
/// display ("Unlimited") and never hard-block against its remaining count.
pub const UNLIMITED_LEAVE_DAYS: u32 = 999;

/// Per-leave-type entitlement rules, keyed by leave type.
///
/// The reference table implements the Jordanian Labor Law allocations
/// (Vacation 14/21 days by tenure per Article 61, Sick 14 per Article 65,
/// Maternity 70 per Article 67, and so on), but the table is entirely
/// data-driven: jurisdictional changes are configuration edits.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::LeaveType;
///
/// let loader = ConfigLoader::load("./config/jordan").unwrap();
/// let entitlements = loader.entitlements();
///
/// assert_eq!(entitlements.days_for(LeaveType::Vacation, 2), 14);
/// assert_eq!(entitlements.days_for(LeaveType::Vacation, 7), 21);
/// assert!(entitlements.is_unlimited(LeaveType::Unpaid));
/// ```
#[derive(Debug, Clone)]
pub struct EntitlementTable {
    rules: HashMap<LeaveType, EntitlementRule>,
}

impl EntitlementTable {
    /// Creates a table from the loaded entitlement rules.
    pub fn new(rules: HashMap<LeaveType, EntitlementRule>) -> Self {
        Self { rules }
    }

    /// Returns the total entitlement in working days for a leave type and
    /// completed years of service.
    ///
    /// A leave type missing from the configuration degrades to 0 days; the
    /// balance engine then reports zero utilization rather than erroring.
    pub fn days_for(&self, leave_type: LeaveType, years_of_service: u32) -> u32 {
        self.rules
            .get(&leave_type)
            .map(|rule| rule.days_for(years_of_service))
            .unwrap_or(0)
    }

    /// Returns true when the leave type carries the unlimited sentinel.
    pub fn is_unlimited(&self, leave_type: LeaveType) -> bool {
        self.rules
            .get(&leave_type)
            .is_some_and(|rule| rule.unlimited)
    }
}
