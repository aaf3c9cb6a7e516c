use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Patient.as_str(), "patient");
    assert_eq!(Role::Doctor.as_str(), "doctor");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("patient").unwrap(), Role::Patient);
    assert_eq!(Role::from_str("doctor").unwrap(), Role::Doctor);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Patient);
}

#[test]
fn test_role_serde_round_trip() {
    let json = serde_json::to_string(&Role::Admin).unwrap();
    assert_eq!(json, "\"admin\"");
    let role: Role = serde_json::from_str(&json).unwrap();
    assert_eq!(role, Role::Admin);
}
