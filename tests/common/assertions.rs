//! Custom assertions for authorization decisions

use tenant_authz::{DenialReason, GuardDecision};

/// Assert the decision is `Allowed`
pub fn assert_allowed(decision: &GuardDecision) {
    assert!(
        decision.is_allowed(),
        "expected access to be allowed, got {:?}",
        decision
    );
}

/// Assert the decision is `Denied` for exactly `reason`
pub fn assert_denied(decision: &GuardDecision, reason: DenialReason) {
    assert_eq!(
        decision.denial_reason(),
        Some(&reason),
        "unexpected decision {:?}",
        decision
    );
}
