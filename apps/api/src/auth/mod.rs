// Registration and plaintext login against the mock database.
// There are no sessions: clients pass the returned user id on later calls.

pub mod handlers;
