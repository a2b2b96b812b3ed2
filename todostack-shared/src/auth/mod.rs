/// Authentication utilities
///
/// Credential login is the only authentication concern this backend owns;
/// everything here supports hashing and verifying passwords.

pub mod password;
