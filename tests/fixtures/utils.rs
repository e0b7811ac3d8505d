//! Shared fixture data for CLI tests

pub const SAMPLE_LEADS: &str = r#"[
    {"id": "1", "name": "John Doe", "email": "a@x.com", "city": "Austin", "state": "TX", "disposition": "New"},
    {"id": "2", "firstName": "Jon", "lastName": "Dough", "email": "b@x.com", "vendorCode": "ACME"},
    {"id": "3", "name": "Unrelated Person", "email": "c@x.com", "notes": null},
    {"id": 4, "name": "Maria Garcia", "email": "maria@x.com", "city": "Houston", "zipCode": 77002},
    {"id": "5", "name": "Anna Smith", "email": "anna@x.com", "leadType": "Auto Accident"}
]"#;
